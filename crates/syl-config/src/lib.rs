//! # syl-config
//!
//! Layered configuration loading for Syllabus using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SYLLABUS_*` prefix, `__` as separator)
//! 2. Project-level `.syllabus/config.toml`
//! 3. User-level `~/.config/syllabus/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SYLLABUS_DATA__DIR` -> `data.dir`,
//! `SYLLABUS_PROMOTION__ENABLED` -> `promotion.enabled`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use syl_config::SylConfig;
//!
//! let config = SylConfig::load_with_dotenv().expect("config");
//! println!("course data in {}", config.data.dir.display());
//! ```

mod data;
mod error;
mod lookup;
mod promotion;
mod router;

pub use data::DataConfig;
pub use error::ConfigError;
pub use lookup::LookupConfig;
pub use promotion::PromotionConfig;
pub use router::RouterConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SylConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub promotion: PromotionConfig,
    #[serde(default)]
    pub router: RouterConfig,
}

impl SylConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can layer additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".syllabus/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SYLLABUS_").split("__"))
    }

    /// Check cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lookup.validate()?;
        self.promotion.validate()?;
        self.router.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("syllabus").join("config.toml"))
    }

    /// Load `.env` from the workspace root, or the current directory.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SylConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.promotion.enabled);
        assert_eq!(config.data.dir, PathBuf::from("data"));
    }

    #[test]
    fn figment_builds_without_files() {
        let config = SylConfig::from_figment(&SylConfig::figment()).expect("should extract defaults");
        assert_eq!(config.lookup.min_ta_items, 3);
        assert!((config.router.min_confidence - 0.5).abs() < f64::EPSILON);
    }
}

use std::path::PathBuf;

use syl_config::SylConfig;
use syl_lookup::Lookup;

use crate::cli::GlobalFlags;

/// Loaded configuration shared by every command handler.
#[derive(Debug)]
pub struct AppContext {
    pub config: SylConfig,
}

impl AppContext {
    /// Load layered config (with `.env` support) and apply CLI overrides.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = SylConfig::load_with_dotenv()?;
        Ok(Self::with_overrides(config, flags))
    }

    fn with_overrides(mut config: SylConfig, flags: &GlobalFlags) -> Self {
        if let Some(dir) = &flags.data_dir {
            config.data.dir = PathBuf::from(dir);
        }
        tracing::debug!(data_dir = %config.data.dir.display(), "configuration loaded");
        Self { config }
    }

    /// Build a lookup orchestrator over the configured data directory.
    pub fn lookup(&self) -> anyhow::Result<Lookup> {
        Ok(Lookup::from_config(&self.config)?)
    }
}

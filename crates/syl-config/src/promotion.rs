//! Write-back of confident markdown extractions into the facts store.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Minimum fallback confidence before an extraction may be written back.
const fn default_min_confidence() -> f64 {
    0.92
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PromotionConfig {
    /// Promotion is off unless explicitly enabled.
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
}

impl Default for PromotionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_confidence: default_min_confidence(),
        }
    }
}

impl PromotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConfigError::InvalidValue {
                field: "promotion.min_confidence".into(),
                reason: format!("{} is outside [0, 1]", self.min_confidence),
            });
        }
        Ok(())
    }
}

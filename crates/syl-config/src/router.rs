//! Question routing thresholds.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Classifications below this confidence get the generic fallback message.
const fn default_min_confidence() -> f64 {
    0.5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouterConfig {
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
        }
    }
}

impl RouterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConfigError::InvalidValue {
                field: "router.min_confidence".into(),
                reason: format!("{} is outside [0, 1]", self.min_confidence),
            });
        }
        Ok(())
    }
}

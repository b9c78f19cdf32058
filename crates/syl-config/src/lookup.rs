//! Lookup orchestration and markdown fallback tuning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Minimum fallback confidence the orchestrator accepts.
const fn default_min_fallback_confidence() -> f64 {
    0.8
}

/// Minimum number of list items before a TA list extraction is trusted.
const fn default_min_ta_items() -> usize {
    3
}

/// Maximum number of links returned by the unfiltered links fallback.
const fn default_max_fallback_links() -> usize {
    15
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    #[serde(default = "default_min_fallback_confidence")]
    pub min_fallback_confidence: f64,

    #[serde(default = "default_min_ta_items")]
    pub min_ta_items: usize,

    #[serde(default = "default_max_fallback_links")]
    pub max_fallback_links: usize,

    /// Extra baseline intent -> category entries, layered over the built-in
    /// key map and under each course's own `_schema.key_map`.
    #[serde(default)]
    pub key_map: BTreeMap<String, String>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            min_fallback_confidence: default_min_fallback_confidence(),
            min_ta_items: default_min_ta_items(),
            max_fallback_links: default_max_fallback_links(),
            key_map: BTreeMap::new(),
        }
    }
}

impl LookupConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_fallback_confidence) {
            return Err(ConfigError::InvalidValue {
                field: "lookup.min_fallback_confidence".into(),
                reason: format!("{} is outside [0, 1]", self.min_fallback_confidence),
            });
        }
        Ok(())
    }
}

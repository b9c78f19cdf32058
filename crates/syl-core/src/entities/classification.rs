use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Slots;
use crate::enums::Intent;
use crate::errors::CoreError;

/// Output of the external classifier for one question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct IntentClassification {
    pub intent: Intent,
    #[serde(default)]
    pub slots: Slots,
    pub confidence: f64,
}

impl IntentClassification {
    /// Build a classification, rejecting confidence scores outside [0, 1].
    pub fn new(intent: Intent, slots: Slots, confidence: f64) -> Result<Self, CoreError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(CoreError::ConfidenceOutOfRange(confidence.to_string()));
        }
        Ok(Self {
            intent,
            slots,
            confidence,
        })
    }
}

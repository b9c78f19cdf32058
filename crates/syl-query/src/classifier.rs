//! The seam to the external intent classifier.

use syl_core::IntentClassification;

use crate::error::ClassifierError;
use crate::validate::parse_classification;

/// Classifies a question into an intent with slots.
///
/// `Ok(None)` means the classifier answered but its output was unusable;
/// `Err` means it could not be asked at all. Both end in a refusal.
pub trait Classifier: Send + Sync {
    fn classify(&self, question: &str) -> Result<Option<IntentClassification>, ClassifierError>;
}

/// Replays one raw classifier output for any question, e.g. output captured
/// from a model call made elsewhere.
#[derive(Debug, Clone)]
pub struct RawOutputClassifier {
    raw: String,
}

impl RawOutputClassifier {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl Classifier for RawOutputClassifier {
    fn classify(&self, _question: &str) -> Result<Option<IntentClassification>, ClassifierError> {
        Ok(parse_classification(&self.raw))
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Proof of an answer's provenance: the displayed fact, the exact excerpt it
/// came from, and the source document that contains the excerpt.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct Citation {
    pub text: String,
    pub quote: String,
    pub source: String,
}

impl Citation {
    #[must_use]
    pub fn new(text: impl Into<String>, quote: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quote: quote.into(),
            source: source.into(),
        }
    }
}

/// An answer string together with the citations that back it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub citations: Vec<Citation>,
}

impl Answer {
    #[must_use]
    pub fn new(text: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            text: text.into(),
            citations,
        }
    }

    /// The universal refusal: no text, no citations.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// An informational message that cites nothing (e.g. "no TA list yet").
    #[must_use]
    pub fn uncited(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.citations.is_empty()
    }
}

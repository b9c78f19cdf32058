//! Error types for the lookup orchestrator.

use std::path::PathBuf;

use syl_facts::FactsError;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Facts(#[from] FactsError),

    #[error("failed to write facts file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("facts file JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LookupError {
    /// No facts store exists for the requested course (nor a default).
    #[must_use]
    pub fn is_course_unavailable(&self) -> bool {
        matches!(self, Self::Facts(e) if e.is_course_unavailable())
    }
}

//! Error types for facts loading.

use std::path::PathBuf;

/// Errors from resolving and loading a course facts store.
#[derive(Debug, thiserror::Error)]
pub enum FactsError {
    /// No facts store is registered for the course, and no default course
    /// could stand in for it.
    #[error("no facts available for course '{course}'")]
    CourseUnavailable { course: String },

    /// The facts file exists but could not be read.
    #[error("failed to read facts file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The facts file is not a JSON object.
    #[error("malformed facts file {file}: {reason}")]
    Malformed { file: String, reason: String },
}

impl FactsError {
    #[must_use]
    pub const fn is_course_unavailable(&self) -> bool {
        matches!(self, Self::CourseUnavailable { .. })
    }
}

//! Cross-cutting error types for Syllabus.
//!
//! Domain-specific errors (e.g. `FactsError`, `LookupError`) are defined in
//! their respective crates. A unified error is deferred to `syl-cli` where
//! all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any Syllabus crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// An intent label outside the fixed intent set.
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    /// A confidence score outside [0, 1].
    #[error("Confidence out of range: {0}")]
    ConfidenceOutOfRange(String),
}

//! Classifier error types.

/// A classifier could not be reached or did not answer. Unparseable output
/// is not an error: classifiers report it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier request failed: {0}")]
    Transport(String),

    #[error("classifier input could not be read: {0}")]
    Input(#[from] std::io::Error),
}

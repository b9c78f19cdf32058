//! Markdown loading error types.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MarkdownError {
    #[error("failed to read policy document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

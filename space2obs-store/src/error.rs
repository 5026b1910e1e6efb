//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Secrets file is not a JSON object.
    #[error("failed to parse secrets file: {0}")]
    MalformedSecrets(String),

    /// Path expected to be a directory is not one.
    #[error("path does not point to a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Path expected to be a file is not one.
    #[error("path does not point to a file: {}", .0.display())]
    NotAFile(PathBuf),
}

//! Tool construction errors.

use space2obs_core::CoreError;
use space2obs_fetch::FetchError;
use space2obs_store::StoreError;
use thiserror::Error;

/// Errors raised while building a tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid tool options.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Core error, e.g. an endpoint URL that does not parse.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Store error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Turns a failed artifact write into a recoverable cycle error.
pub(crate) fn artifact_error(err: StoreError) -> FetchError {
    FetchError::Artifact(err.to_string())
}

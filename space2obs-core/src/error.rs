//! Core error types for space2obs.

use thiserror::Error;

/// Core error type for space2obs operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An endpoint URL could not be parsed.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

//! Fetch error types.

use thiserror::Error;

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for a polling cycle.
///
/// Everything except [`FetchError::QuotaExceeded`] is absorbed by the daemon
/// and turned into a retry wait.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network, DNS or timeout failure.
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status code.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL, credentials masked.
        url: String,
    },

    /// Declared content type not in the endpoint allow-list.
    #[error("unwanted content type '{found}' from {url}")]
    ContentType {
        /// The declared `Content-Type` value.
        found: String,
        /// Requested URL, credentials masked.
        url: String,
    },

    /// Payload fetched fine but could not be understood.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Core error, e.g. an unparsable URL inside a payload.
    #[error("{0}")]
    Core(#[from] space2obs_core::CoreError),

    /// Writing an artifact failed.
    #[error("artifact write failed: {0}")]
    Artifact(String),

    /// The remote quota is used up.
    #[error("rate limit exceeded ({remaining}/{limit})")]
    QuotaExceeded {
        /// Remaining requests reported by the server.
        remaining: i64,
        /// Total requests allowed.
        limit: i64,
    },
}

impl FetchError {
    /// Returns true if the daemon should wait and try again.
    pub fn is_recoverable(&self) -> bool {
        !self.is_fatal()
    }

    /// Returns true if the process must stop.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FetchError::QuotaExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let status = FetchError::Status {
            status: 503,
            url: "https://example.org".to_string(),
        };
        assert!(status.is_recoverable());
        assert!(FetchError::InvalidPayload("empty".into()).is_recoverable());
        assert!(FetchError::Artifact("disk full".into()).is_recoverable());

        let quota = FetchError::QuotaExceeded {
            remaining: 0,
            limit: 1000,
        };
        assert!(quota.is_fatal());
        assert_eq!(quota.to_string(), "rate limit exceeded (0/1000)");
    }
}

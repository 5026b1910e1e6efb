//! HTTP fetcher.
//!
//! One GET per call, no retries. Retrying is the daemon's business and
//! always happens after a retry wait.

use std::time::Duration;

use reqwest::{Client, header, header::HeaderMap};
use space2obs_core::Endpoint;
use tracing::{debug, info, instrument};

use crate::error::FetchError;
use crate::humanize::humanize_bytes;

/// User agent string for space2obs.
const USER_AGENT: &str = concat!("space2obs/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Fetched Payload
// ============================================================================

/// A response that passed status and content-type validation.
#[derive(Debug, Clone)]
pub struct FetchedPayload {
    /// Raw response body.
    pub bytes: Vec<u8>,
    /// Declared content type, as sent by the server.
    pub content_type: String,
    /// Response headers.
    pub headers: HeaderMap,
}

impl FetchedPayload {
    /// Returns the payload size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the body is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Parses the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_slice(&self.bytes)?)
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client with a fixed per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a client whose requests time out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let inner = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { inner, timeout })
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches an endpoint.
    ///
    /// Fails on transport errors, non-2xx statuses and content types outside
    /// the endpoint allow-list. On success the payload size is logged.
    #[instrument(skip(self, endpoint), fields(endpoint = %endpoint.label()))]
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<FetchedPayload, FetchError> {
        debug!(url = %endpoint.redacted_url(), "GET request");

        let response = self
            .inner
            .get(endpoint.url().clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        debug!(status = %status, "Response received");

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: endpoint.redacted_url(),
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !endpoint.accepts(&content_type) {
            return Err(FetchError::ContentType {
                found: content_type,
                url: endpoint.redacted_url(),
            });
        }

        let headers = response.headers().clone();
        let bytes = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)?
            .to_vec();

        info!("retrieved {}", humanize_bytes(bytes.len() as u64));

        Ok(FetchedPayload {
            bytes,
            content_type,
            headers,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> HttpClient {
        HttpClient::with_timeout(Duration::from_secs(5)).unwrap()
    }

    fn endpoint(server: &MockServer, accepted: &[&str]) -> Endpoint {
        Endpoint::new("test", &format!("{}/latest.jpg", server.uri()), accepted).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_accepts_content_type_with_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest.jpg"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "image/jpeg; charset=binary")
                    .set_body_bytes(vec![1u8; 2048]),
            )
            .mount(&server)
            .await;

        let payload = client()
            .fetch(&endpoint(&server, &["image/jpeg"]))
            .await
            .unwrap();

        assert_eq!(payload.len(), 2048);
        assert_eq!(payload.content_type, "image/jpeg; charset=binary");
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client()
            .fetch(&endpoint(&server, &["image/jpeg"]))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 503, .. }));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_fetch_rejects_unwanted_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html; charset=utf-8")
                    .set_body_bytes(b"<html></html>".to_vec()),
            )
            .mount(&server)
            .await;

        let err = client()
            .fetch(&endpoint(&server, &["image/jpeg"]))
            .await
            .unwrap_err();

        match err {
            FetchError::ContentType { found, .. } => {
                assert_eq!(found, "text/html; charset=utf-8");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "image/jpeg")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = HttpClient::with_timeout(Duration::from_millis(200)).unwrap();
        let err = client
            .fetch(&endpoint(&server, &["image/jpeg"]))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Http(_)));
    }
}

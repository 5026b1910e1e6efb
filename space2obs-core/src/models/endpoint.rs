//! Remote endpoints.
//!
//! An [`Endpoint`] is immutable once built: a parsed URL, a short label used
//! in progress messages and the allow-list of content types the endpoint is
//! expected to answer with.

use std::fmt;

use url::Url;

use crate::error::CoreError;

/// Query parameters whose values never appear in logs.
const REDACTED_PARAMS: &[&str] = &["api_key"];

// ============================================================================
// Endpoint
// ============================================================================

/// A remote resource polled by a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    label: String,
    url: Url,
    accepted_content_types: Vec<String>,
}

impl Endpoint {
    /// Creates an endpoint from a URL string.
    ///
    /// Accepted content types are stored lowercased and trimmed.
    pub fn new(
        label: impl Into<String>,
        url: &str,
        accepted_content_types: &[&str],
    ) -> Result<Self, CoreError> {
        let url = Url::parse(url).map_err(|e| CoreError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            label: label.into(),
            url,
            accepted_content_types: accepted_content_types
                .iter()
                .map(|t| t.trim().to_lowercase())
                .collect(),
        })
    }

    /// Creates an endpoint from a base URL and a list of query parameters.
    ///
    /// Parameters are appended in order and percent-encoded.
    pub fn with_query<K, V>(
        label: impl Into<String>,
        base: &str,
        params: &[(K, V)],
        accepted_content_types: &[&str],
    ) -> Result<Self, CoreError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut endpoint = Self::new(label, base, accepted_content_types)?;
        {
            let mut pairs = endpoint.url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k.as_ref(), v.as_ref());
            }
        }
        Ok(endpoint)
    }

    /// Returns the label used in progress messages.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the full request URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the accepted content types (lowercase).
    pub fn accepted_content_types(&self) -> &[String] {
        &self.accepted_content_types
    }

    /// Returns true if a declared `Content-Type` header value is acceptable.
    pub fn accepts(&self, declared: &str) -> bool {
        content_type_matches(declared, &self.accepted_content_types)
    }

    /// Returns the URL with credential query values masked, for logging.
    pub fn redacted_url(&self) -> String {
        if self.url.query().is_none() {
            return self.url.to_string();
        }

        let mut url = self.url.clone();
        let pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(k, v)| {
                let v = if REDACTED_PARAMS.contains(&k.as_ref()) {
                    "***".to_string()
                } else {
                    v.into_owned()
                };
                (k.into_owned(), v)
            })
            .collect();

        url.query_pairs_mut().clear().extend_pairs(pairs);
        url.to_string()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.label, self.redacted_url())
    }
}

/// Checks a declared `Content-Type` value against an allow-list.
///
/// The value is split on `;`, each segment trimmed and lowercased, and the
/// check passes if any segment is in `accepted`. A parameter such as
/// `charset=binary` cannot match a media type, but a parameter segment that
/// names an accepted type does, so `text/html; image/jpeg` passes for
/// `image/jpeg`.
pub fn content_type_matches<S: AsRef<str>>(declared: &str, accepted: &[S]) -> bool {
    declared
        .split(';')
        .map(|segment| segment.trim().to_lowercase())
        .any(|segment| {
            accepted
                .iter()
                .any(|a| a.as_ref().eq_ignore_ascii_case(&segment))
        })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_with_parameters() {
        let accepted = ["image/jpeg"];
        assert!(content_type_matches("image/jpeg; charset=binary", &accepted));
        assert!(content_type_matches("IMAGE/JPEG;charset=binary", &accepted));
        assert!(content_type_matches("  image/jpeg  ", &accepted));
    }

    #[test]
    fn test_content_type_any_segment_counts() {
        let accepted = ["image/jpeg"];
        assert!(content_type_matches("text/html; image/jpeg", &accepted));
        assert!(!content_type_matches("text/html; charset=image/jpeg", &accepted));
    }

    #[test]
    fn test_content_type_mismatch() {
        let accepted = ["application/json"];
        assert!(!content_type_matches("text/html; charset=utf-8", &accepted));
        assert!(!content_type_matches("", &accepted));
    }

    #[test]
    fn test_endpoint_accepts_lowercases_allow_list() {
        let endpoint =
            Endpoint::new("image", "https://example.org/latest.jpg", &["Image/JPEG"]).unwrap();
        assert_eq!(endpoint.accepted_content_types(), ["image/jpeg"]);
        assert!(endpoint.accepts("image/jpeg"));
        assert!(!endpoint.accepts("image/png"));
    }

    #[test]
    fn test_endpoint_with_query() {
        let endpoint = Endpoint::with_query(
            "events",
            "https://eonet.gsfc.nasa.gov/api/v3/events",
            &[("status", "open"), ("limit", "5")],
            &["application/json"],
        )
        .unwrap();
        assert_eq!(
            endpoint.url().as_str(),
            "https://eonet.gsfc.nasa.gov/api/v3/events?status=open&limit=5"
        );
    }

    #[test]
    fn test_redacted_url_masks_api_key() {
        let endpoint = Endpoint::with_query(
            "data",
            "https://api.nasa.gov/planetary/apod",
            &[("count", "1"), ("api_key", "SECRET")],
            &["application/json"],
        )
        .unwrap();
        let redacted = endpoint.redacted_url();
        assert!(!redacted.contains("SECRET"));
        assert!(redacted.contains("count=1"));
        assert!(endpoint.to_string().starts_with("data <"));
    }

    #[test]
    fn test_invalid_url() {
        let err = Endpoint::new("bad", "not a url", &["image/jpeg"]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidUrl { .. }));
    }
}

//! Rate-limit guard.
//!
//! Some endpoints report their remaining request quota in response headers.
//! A missing or unreadable header counts as `-1`, and anything at or below
//! zero stops the process.

use reqwest::header::HeaderMap;
use tracing::{error, info};

use crate::error::FetchError;

/// Header carrying the remaining request quota.
pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Header carrying the total request quota.
pub const LIMIT_HEADER: &str = "x-ratelimit-limit";

/// Quota counters read from a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests left in the current window.
    pub remaining: i64,
    /// Requests allowed per window.
    pub limit: i64,
}

impl RateLimit {
    /// Reads quota counters, defaulting each to `-1`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            remaining: header_i64(headers, REMAINING_HEADER),
            limit: header_i64(headers, LIMIT_HEADER),
        }
    }

    /// Returns true if no requests are left.
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }

    /// Logs current usage and fails with [`FetchError::QuotaExceeded`] when
    /// the quota is used up.
    pub fn check(headers: &HeaderMap) -> Result<Self, FetchError> {
        let rate = Self::from_headers(headers);
        info!("rate limit usage {}/{}", rate.remaining, rate.limit);

        if rate.is_exhausted() {
            error!("rate limit exceeded");
            return Err(FetchError::QuotaExceeded {
                remaining: rate.remaining,
                limit: rate.limit,
            });
        }

        Ok(rate)
    }
}

fn header_i64(headers: &HeaderMap, name: &str) -> i64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(-1)
}

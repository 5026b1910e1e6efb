//! Schedule parameters.

use std::time::Duration;

/// Default idle interval after a successful cycle, in seconds.
pub const DEFAULT_INTERVAL_SECS: u64 = 300;

/// Default wait after a failed or rejected cycle, in seconds.
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 60;

/// Default per-request timeout, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Timing parameters, fixed for the lifetime of a daemon run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleParams {
    /// Wait after a successful cycle, changed or not.
    pub interval: Duration,
    /// Wait after a failed or rejected cycle.
    pub retry_delay: Duration,
    /// Upper bound for a single HTTP request.
    pub request_timeout: Duration,
}

impl ScheduleParams {
    /// Creates schedule parameters from whole seconds.
    pub fn from_secs(interval: u64, retry_delay: u64, request_timeout: u64) -> Self {
        Self {
            interval: Duration::from_secs(interval),
            retry_delay: Duration::from_secs(retry_delay),
            request_timeout: Duration::from_secs(request_timeout),
        }
    }
}

impl Default for ScheduleParams {
    fn default() -> Self {
        Self::from_secs(
            DEFAULT_INTERVAL_SECS,
            DEFAULT_RETRY_DELAY_SECS,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )
    }
}

//! Tool trait and cycle types.
//!
//! A tool is the source-specific part of the daemon: it knows its endpoints,
//! decides whether a fetched payload is worth keeping and writes artifacts.
//! The daemon owns the loop and the waits.

use async_trait::async_trait;
use std::fmt;

use crate::context::ToolContext;
use crate::error::FetchError;

// ============================================================================
// Cycle Outcome
// ============================================================================

/// What a single cycle of a tool achieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// New data was accepted and at least one artifact was written.
    Changed,
    /// Data was fetched but matched what is already cached.
    Unchanged,
    /// Data was fetched but is not usable; nothing was written.
    Rejected(String),
}

impl CycleOutcome {
    /// Creates a rejected outcome.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Returns the daemon state this outcome leads to.
    pub fn next_state(&self) -> CycleState {
        match self {
            Self::Changed => CycleState::ChangedWriteIdle,
            Self::Unchanged => CycleState::NoChangeIdle,
            Self::Rejected(_) => CycleState::RejectRetry,
        }
    }
}

// ============================================================================
// Cycle State
// ============================================================================

/// Daemon state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleState {
    /// Fetching and validating.
    Fetch,
    /// Waiting the retry delay after a failure or rejection.
    RejectRetry,
    /// Waiting the interval after fetching unchanged data.
    NoChangeIdle,
    /// Waiting the interval after writing new data.
    ChangedWriteIdle,
    /// Stopped by an unrecoverable error.
    Fatal,
}

impl CycleState {
    /// Returns true if the state waits the retry delay.
    pub fn is_retry(self) -> bool {
        self == Self::RejectRetry
    }
}

impl fmt::Display for CycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::RejectRetry => "reject-retry",
            Self::NoChangeIdle => "no-change-idle",
            Self::ChangedWriteIdle => "changed-write-idle",
            Self::Fatal => "fatal",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Tool Trait
// ============================================================================

/// A data source adapter driven by the [`Daemon`](crate::daemon::Daemon).
///
/// ## Implementing a Tool
///
/// ```ignore
/// struct LatestImage { endpoint: Endpoint, artifact: Artifact }
///
/// #[async_trait]
/// impl Tool for LatestImage {
///     fn id(&self) -> &str {
///         "latest"
///     }
///
///     async fn run_cycle(&mut self, ctx: &ToolContext) -> Result<CycleOutcome, FetchError> {
///         let payload = ctx.fetch(&self.endpoint).await?;
///         if !self.artifact.has_changed(&payload.bytes) {
///             return Ok(CycleOutcome::Unchanged);
///         }
///         self.artifact.write(&payload.bytes).await?;
///         Ok(CycleOutcome::Changed)
///     }
/// }
/// ```
///
/// Recoverable errors may be returned with `?`; the daemon logs them and
/// waits the retry delay. A tool with several endpoints handles failures of
/// single endpoints itself so the others still get polled.
#[async_trait]
pub trait Tool: Send {
    /// Returns the tool identifier.
    fn id(&self) -> &str;

    /// Runs one fetch, validate and write pass.
    async fn run_cycle(&mut self, ctx: &ToolContext) -> Result<CycleOutcome, FetchError>;
}

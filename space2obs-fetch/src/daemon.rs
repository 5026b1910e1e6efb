//! The polling daemon.
//!
//! One daemon drives one tool forever: run a cycle, pick the next state from
//! its outcome, wait, repeat. Recoverable errors become retry waits. The
//! loop only ends when a fatal error escapes or the caller drops the future.

use std::convert::Infallible;

use tracing::{error, info, instrument, warn};

use crate::context::ToolContext;
use crate::error::FetchError;
use crate::tool::{CycleOutcome, CycleState, Tool};

/// Runs a [`Tool`] in an endless fetch/wait loop.
pub struct Daemon {
    tool: Box<dyn Tool>,
    ctx: ToolContext,
    state: CycleState,
    cycles: u64,
}

impl Daemon {
    /// Creates a daemon in the [`CycleState::Fetch`] state.
    pub fn new(tool: Box<dyn Tool>, ctx: ToolContext) -> Self {
        Self {
            tool,
            ctx,
            state: CycleState::Fetch,
            cycles: 0,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Returns the number of completed cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Runs one cycle and the wait that follows it.
    ///
    /// Returns the state that was waited in, or the fatal error.
    #[instrument(skip(self), fields(tool = %self.tool.id(), cycle = self.cycles + 1))]
    pub async fn step(&mut self) -> Result<CycleState, FetchError> {
        self.state = CycleState::Fetch;

        let next = match self.tool.run_cycle(&self.ctx).await {
            Ok(CycleOutcome::Rejected(reason)) => {
                warn!("{reason}");
                CycleState::RejectRetry
            }
            Ok(outcome) => outcome.next_state(),
            Err(e) if e.is_fatal() => {
                error!("{e}");
                self.state = CycleState::Fatal;
                return Err(e);
            }
            Err(e) => {
                warn!("{e}");
                CycleState::RejectRetry
            }
        };

        self.state = next;
        if next.is_retry() {
            self.ctx.retry_idle().await;
        } else {
            self.ctx.idle().await;
        }
        self.cycles += 1;

        Ok(next)
    }

    /// Runs until a fatal error occurs.
    pub async fn run(mut self) -> Result<Infallible, FetchError> {
        info!(tool = %self.tool.id(), "daemon started");
        loop {
            self.step().await?;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Scheduler;
    use async_trait::async_trait;
    use space2obs_core::ScheduleParams;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Plays back a fixed sequence of cycle results.
    struct ScriptedTool {
        script: VecDeque<Result<CycleOutcome, FetchError>>,
    }

    #[async_trait]
    impl Tool for ScriptedTool {
        fn id(&self) -> &str {
            "scripted"
        }

        async fn run_cycle(&mut self, _ctx: &ToolContext) -> Result<CycleOutcome, FetchError> {
            self.script
                .pop_front()
                .unwrap_or(Ok(CycleOutcome::Unchanged))
        }
    }

    fn daemon(script: Vec<Result<CycleOutcome, FetchError>>) -> Daemon {
        let schedule = ScheduleParams {
            interval: Duration::ZERO,
            retry_delay: Duration::ZERO,
            request_timeout: Duration::from_secs(1),
        };
        let ctx = ToolContext::new(schedule)
            .unwrap()
            .with_scheduler(Scheduler::new(false));
        Daemon::new(
            Box::new(ScriptedTool {
                script: script.into(),
            }),
            ctx,
        )
    }

    #[tokio::test]
    async fn test_state_transitions() {
        let mut daemon = daemon(vec![
            Ok(CycleOutcome::Changed),
            Ok(CycleOutcome::Unchanged),
            Ok(CycleOutcome::rejected("skipping media type 'video'")),
            Err(FetchError::Status {
                status: 503,
                url: "https://example.org".into(),
            }),
        ]);
        assert_eq!(daemon.state(), CycleState::Fetch);

        assert_eq!(daemon.step().await.unwrap(), CycleState::ChangedWriteIdle);
        assert_eq!(daemon.step().await.unwrap(), CycleState::NoChangeIdle);
        assert_eq!(daemon.step().await.unwrap(), CycleState::RejectRetry);
        assert_eq!(daemon.step().await.unwrap(), CycleState::RejectRetry);
        assert_eq!(daemon.cycles(), 4);
    }

    #[tokio::test]
    async fn test_quota_exceeded_is_fatal() {
        let mut daemon = daemon(vec![
            Ok(CycleOutcome::Unchanged),
            Err(FetchError::QuotaExceeded {
                remaining: 0,
                limit: 50,
            }),
        ]);

        daemon.step().await.unwrap();
        let err = daemon.step().await.unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(daemon.state(), CycleState::Fatal);
        assert_eq!(daemon.cycles(), 1);
    }

    #[tokio::test]
    async fn test_run_ends_only_on_fatal_error() {
        let daemon = daemon(vec![
            Ok(CycleOutcome::Changed),
            Err(FetchError::InvalidPayload("empty".into())),
            Err(FetchError::QuotaExceeded {
                remaining: -1,
                limit: -1,
            }),
        ]);

        let err = daemon.run().await.unwrap_err();
        assert!(matches!(err, FetchError::QuotaExceeded { .. }));
    }
}

//! Per-run tool context.
//!
//! The context bundles the HTTP client, the scheduler and the schedule
//! parameters. It is built once per process and lent to the tool on every
//! cycle.

use space2obs_core::{Endpoint, ScheduleParams};

use crate::client::{FetchedPayload, HttpClient};
use crate::error::FetchError;
use crate::scheduler::Scheduler;

/// Shared primitives handed to a tool each cycle.
#[derive(Debug, Clone)]
pub struct ToolContext {
    client: HttpClient,
    scheduler: Scheduler,
    schedule: ScheduleParams,
}

impl ToolContext {
    /// Creates a context with an animated scheduler.
    pub fn new(schedule: ScheduleParams) -> Result<Self, FetchError> {
        Ok(Self {
            client: HttpClient::with_timeout(schedule.request_timeout)?,
            scheduler: Scheduler::default(),
            schedule,
        })
    }

    /// Replaces the scheduler.
    #[must_use]
    pub fn with_scheduler(mut self, scheduler: Scheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Returns the HTTP client.
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Returns the schedule parameters.
    pub fn schedule(&self) -> &ScheduleParams {
        &self.schedule
    }

    /// Fetches an endpoint with the configured timeout.
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<FetchedPayload, FetchError> {
        self.client.fetch(endpoint).await
    }

    /// Waits the configured interval.
    pub async fn idle(&self) {
        self.scheduler.idle(self.schedule.interval).await;
    }

    /// Waits the configured retry delay.
    pub async fn retry_idle(&self) {
        self.scheduler.retry_idle(self.schedule.retry_delay).await;
    }
}

// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # space2obs Fetch
//!
//! The polling engine shared by every space2obs tool.
//!
//! ## Building Blocks
//!
//! - [`client::HttpClient`] - Timed GET with status and content-type checks
//! - [`rate_limit::RateLimit`] - Quota header inspection
//! - [`scheduler::Scheduler`] - Idle and retry waits with a spinner
//!
//! ## Daemon
//!
//! - [`tool::Tool`] - Trait implemented by each data source adapter
//! - [`context::ToolContext`] - What a tool gets to work with each cycle
//! - [`daemon::Daemon`] - Runs one tool forever
//!
//! ## Example
//!
//! ```ignore
//! use space2obs_fetch::{Daemon, ToolContext};
//!
//! let ctx = ToolContext::new(schedule)?;
//! let daemon = Daemon::new(tool, ctx);
//!
//! // Only returns on a fatal error.
//! let err = daemon.run().await.unwrap_err();
//! ```

pub mod client;
pub mod context;
pub mod daemon;
pub mod error;
pub mod humanize;
pub mod rate_limit;
pub mod scheduler;
pub mod tool;

pub use client::{FetchedPayload, HttpClient};
pub use context::ToolContext;
pub use daemon::Daemon;
pub use error::FetchError;
pub use humanize::humanize_bytes;
pub use rate_limit::{RateLimit, LIMIT_HEADER, REMAINING_HEADER};
pub use scheduler::{Indicator, Scheduler};
pub use tool::{CycleOutcome, CycleState, Tool};

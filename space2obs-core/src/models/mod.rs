//! Domain models for space2obs.
//!
//! ## Submodules
//!
//! - [`endpoint`] - Remote endpoints and content-type acceptance
//! - [`fingerprint`] - Change detection by payload size
//! - [`schedule`] - Idle and retry timing parameters
//! - [`tool`] - Tool identifiers

mod endpoint;
mod fingerprint;
mod schedule;
mod tool;

pub use endpoint::{Endpoint, content_type_matches};
pub use fingerprint::{Fingerprint, changed};
pub use schedule::{
    DEFAULT_INTERVAL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RETRY_DELAY_SECS, ScheduleParams,
};
pub use tool::ToolKind;

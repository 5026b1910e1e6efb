// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # space2obs Core
//!
//! Core types shared by every space2obs crate.
//!
//! ## Key Types
//!
//! - [`ToolKind`] - The data sources that can be polled
//! - [`Endpoint`] - A URL plus the content types it may answer with
//! - [`Fingerprint`] - Byte-length proxy used to detect payload change
//! - [`ScheduleParams`] - Interval, retry delay and request timeout
//! - [`Template`] - User-configurable text template for derived artifacts
//!
//! ## Text Helpers
//!
//! - [`normalize_whitespace`] - Collapses whitespace runs to single spaces
//! - [`shorten`] - Word-boundary-aware truncation with a trailing marker

pub mod error;
pub mod models;
pub mod text;

pub use error::CoreError;

pub use models::{
    DEFAULT_INTERVAL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RETRY_DELAY_SECS, Endpoint,
    Fingerprint, ScheduleParams, ToolKind, changed, content_type_matches,
};

pub use text::{Template, TemplateFields, normalize_whitespace, shorten, SHORTEN_PLACEHOLDER};

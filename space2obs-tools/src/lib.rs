// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # space2obs Tools
//!
//! Data source adapters for space2obs. Each tool module includes:
//!
//! - **Descriptor**: Static metadata and the constructor used by the registry
//! - **Tool**: The [`Tool`](space2obs_fetch::Tool) implementation
//! - **Parser**: Payload types for JSON feeds
//!
//! ## Supported Tools
//!
//! | Tool | Source | Artifacts | Quota guard |
//! |------|--------|-----------|-------------|
//! | `apod` | NASA Astronomy Picture of the Day | data, image, text | yes |
//! | `dnmap` | timeanddate.com day/night map | image | no |
//! | `eonet` | NASA EONET natural events | data, text | yes |
//! | `soho` | SOHO/SDO real-time cameras | one image per camera | no |
//!
//! ## Usage
//!
//! ```ignore
//! use space2obs_core::ToolKind;
//! use space2obs_tools::{ToolConfig, ToolRegistry};
//!
//! let desc = ToolRegistry::get(ToolKind::Soho).unwrap();
//! let tool = desc.build(config).await?;
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod registry;

// Tool modules (alphabetical)
pub mod apod;
pub mod dnmap;
pub mod eonet;
pub mod soho;

pub use config::{ToolConfig, ToolOptions};
pub use descriptor::{CliConfig, ToolDescriptor, ToolFuture, ToolMetadata};
pub use error::ToolError;
pub use registry::ToolRegistry;

pub use apod::{ApodOptions, ApodTool, apod_descriptor};
pub use dnmap::{DnmapOptions, DnmapTool, dnmap_descriptor};
pub use eonet::{EonetOptions, EonetStatus, EonetTool, eonet_descriptor};
pub use soho::{SohoOptions, SohoTool, soho_descriptor};

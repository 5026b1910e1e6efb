// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # space2obs Store
//!
//! On-disk state for space2obs.
//!
//! - **Artifact**: A cache file plus the fingerprint of its last write
//! - **Secrets**: Credentials loaded once from a JSON file
//! - **Persistence**: Atomic writes, default paths and path preconditions
//!
//! ## Usage
//!
//! ```ignore
//! use space2obs_store::{Artifact, Secrets};
//!
//! let secrets = Secrets::load(&secrets_file).await?;
//! let mut image = Artifact::open(&cache_dir, "dnmap_last_image").await;
//!
//! if image.has_changed(&payload) {
//!     image.write(&payload).await?;
//! }
//! ```

pub mod artifact;
pub mod error;
pub mod persistence;
pub mod secrets;

pub use artifact::Artifact;
pub use error::StoreError;
pub use persistence::{
    default_cache_dir, default_config_dir, default_secrets_path, file_len, require_dir,
    require_file, write_atomic,
};
pub use secrets::Secrets;
#[cfg(test)]
mod persistence_tests;

//! Tool configuration.
//!
//! Everything a tool needs at construction: where to write, which secrets
//! are available and the options of every tool. Only the options of the
//! selected tool are read.

use std::path::PathBuf;

use space2obs_store::Secrets;

use crate::apod::ApodOptions;
use crate::dnmap::DnmapOptions;
use crate::eonet::EonetOptions;
use crate::soho::SohoOptions;

/// Per-tool options.
#[derive(Debug, Clone, Default)]
pub struct ToolOptions {
    /// `apod` options.
    pub apod: ApodOptions,
    /// `dnmap` options.
    pub dnmap: DnmapOptions,
    /// `eonet` options.
    pub eonet: EonetOptions,
    /// `soho` options.
    pub soho: SohoOptions,
}

/// Construction input for a tool.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Existing directory receiving the artifacts.
    pub cache_dir: PathBuf,
    /// Secrets loaded at startup.
    pub secrets: Secrets,
    /// Options for every tool.
    pub options: ToolOptions,
}

impl ToolConfig {
    /// Creates a config with default options and no secrets.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            secrets: Secrets::default(),
            options: ToolOptions::default(),
        }
    }

    /// Sets the secrets.
    #[must_use]
    pub fn with_secrets(mut self, secrets: Secrets) -> Self {
        self.secrets = secrets;
        self
    }

    /// Sets the options.
    #[must_use]
    pub fn with_options(mut self, options: ToolOptions) -> Self {
        self.options = options;
        self
    }
}

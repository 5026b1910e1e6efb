//! Tool descriptor system.
//!
//! A descriptor contains all the static configuration for a tool:
//! - Metadata (display name, description, source, secrets, artifacts)
//! - CLI configuration
//! - The constructor the registry calls to build the tool

use std::future::Future;
use std::pin::Pin;

use space2obs_core::ToolKind;
use space2obs_fetch::Tool;

use crate::config::ToolConfig;
use crate::error::ToolError;

/// Future returned by a tool constructor.
pub type ToolFuture = Pin<Box<dyn Future<Output = Result<Box<dyn Tool>, ToolError>> + Send>>;

// ============================================================================
// Tool Descriptor
// ============================================================================

/// Complete descriptor for a tool.
pub struct ToolDescriptor {
    /// Tool identifier.
    pub id: ToolKind,
    /// Display metadata.
    pub metadata: ToolMetadata,
    /// CLI configuration.
    pub cli: CliConfig,
    /// Builds the tool from its configuration.
    pub build: fn(ToolConfig) -> ToolFuture,
}

impl ToolDescriptor {
    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        self.metadata.display_name
    }

    /// Returns the CLI name.
    pub fn cli_name(&self) -> &str {
        self.cli.name
    }

    /// Builds the tool.
    pub fn build(&self, config: ToolConfig) -> ToolFuture {
        (self.build)(config)
    }
}

// ============================================================================
// Tool Metadata
// ============================================================================

/// Human-facing information about a tool.
#[derive(Debug, Clone)]
pub struct ToolMetadata {
    /// Name shown in the startup banner and help.
    pub display_name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Where the data comes from.
    pub source_url: &'static str,
    /// Whether responses are checked against the rate-limit headers.
    pub quota_guarded: bool,
    /// Secrets read from the secrets file at startup.
    pub secrets: &'static [&'static str],
    /// Artifact file names; `{camera}` stands for a camera id.
    pub artifacts: &'static [&'static str],
}

// ============================================================================
// CLI Config
// ============================================================================

/// How a tool is named on the command line.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Name of the positional tool argument.
    pub name: &'static str,
}

//! APOD tool descriptor.

use space2obs_core::ToolKind;
use space2obs_fetch::Tool;

use super::tool::{API_KEY_SECRET, ApodTool};
use crate::config::ToolConfig;
use crate::descriptor::{CliConfig, ToolDescriptor, ToolFuture, ToolMetadata};

/// Returns the `apod` descriptor.
pub fn apod_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        id: ToolKind::Apod,
        metadata: apod_metadata(),
        cli: apod_cli_config(),
        build: build_apod,
    }
}

fn apod_metadata() -> ToolMetadata {
    ToolMetadata {
        display_name: "Astronomy Picture of the Day",
        description: "Latest APOD image with its title, explanation and credit",
        source_url: "https://apod.nasa.gov",
        quota_guarded: true,
        secrets: &[API_KEY_SECRET],
        artifacts: &["apod_last_data", "apod_last_image", "apod_last_text"],
    }
}

fn apod_cli_config() -> CliConfig {
    CliConfig { name: "apod" }
}

fn build_apod(config: ToolConfig) -> ToolFuture {
    Box::pin(async move {
        let tool: Box<dyn Tool> = Box::new(ApodTool::build(config).await?);
        Ok(tool)
    })
}

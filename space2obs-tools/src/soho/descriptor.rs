//! SOHO tool descriptor.

use space2obs_core::ToolKind;
use space2obs_fetch::Tool;

use super::tool::SohoTool;
use crate::config::ToolConfig;
use crate::descriptor::{CliConfig, ToolDescriptor, ToolFuture, ToolMetadata};

/// Returns the `soho` descriptor.
pub fn soho_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        id: ToolKind::Soho,
        metadata: ToolMetadata {
            display_name: "SOHO Real-Time Images",
            description: "Latest coronagraph and solar disk images",
            source_url: "https://soho.nascom.nasa.gov/data/realtime-images.html",
            quota_guarded: false,
            secrets: &[],
            artifacts: &["soho_last_{camera}_image"],
        },
        cli: CliConfig { name: "soho" },
        build: build_soho,
    }
}

fn build_soho(config: ToolConfig) -> ToolFuture {
    Box::pin(async move {
        let tool: Box<dyn Tool> = Box::new(SohoTool::build(config).await?);
        Ok(tool)
    })
}

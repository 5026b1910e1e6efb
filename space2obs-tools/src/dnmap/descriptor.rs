//! Day/night map tool descriptor.

use space2obs_core::ToolKind;
use space2obs_fetch::Tool;

use super::tool::DnmapTool;
use crate::config::ToolConfig;
use crate::descriptor::{CliConfig, ToolDescriptor, ToolFuture, ToolMetadata};

/// Returns the `dnmap` descriptor.
pub fn dnmap_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        id: ToolKind::Dnmap,
        metadata: ToolMetadata {
            display_name: "Day and Night World Map",
            description: "Current day/night map of the earth",
            source_url: "https://www.timeanddate.com/worldclock/sunearth.html",
            quota_guarded: false,
            secrets: &[],
            artifacts: &["dnmap_last_image"],
        },
        cli: CliConfig { name: "dnmap" },
        build: build_dnmap,
    }
}

fn build_dnmap(config: ToolConfig) -> ToolFuture {
    Box::pin(async move {
        let tool: Box<dyn Tool> = Box::new(DnmapTool::build(config).await?);
        Ok(tool)
    })
}

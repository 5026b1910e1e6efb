//! EONET tool descriptor.

use space2obs_core::ToolKind;
use space2obs_fetch::Tool;

use super::tool::EonetTool;
use crate::config::ToolConfig;
use crate::descriptor::{CliConfig, ToolDescriptor, ToolFuture, ToolMetadata};

/// Returns the `eonet` descriptor.
pub fn eonet_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        id: ToolKind::Eonet,
        metadata: ToolMetadata {
            display_name: "Earth Observatory Natural Event Tracker",
            description: "Wildfires, storms, volcanoes and other natural events",
            source_url: "https://eonet.gsfc.nasa.gov",
            quota_guarded: true,
            secrets: &[],
            artifacts: &["eonet_last_data", "eonet_last_text"],
        },
        cli: CliConfig { name: "eonet" },
        build: build_eonet,
    }
}

fn build_eonet(config: ToolConfig) -> ToolFuture {
    Box::pin(async move {
        let tool: Box<dyn Tool> = Box::new(EonetTool::build(config).await?);
        Ok(tool)
    })
}

//! Day/night map polling cycle.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use space2obs_core::{CoreError, Endpoint};
use space2obs_fetch::{CycleOutcome, FetchError, Tool, ToolContext};
use space2obs_store::Artifact;
use tracing::{info, instrument};

use crate::config::ToolConfig;
use crate::error::{ToolError, artifact_error};

/// Map image base URL.
const SUNMAP_BASE: &str = "https://www.timeanddate.com";

/// Map image path.
const SUNMAP_PATH: &str = "/scripts/sunmap.php";

const IMAGE_CONTENT_TYPES: &[&str] = &["image/jpeg"];

/// Polls the day/night map.
#[derive(Debug)]
pub struct DnmapTool {
    base_url: String,
    simple: bool,
    image: Artifact,
}

impl DnmapTool {
    /// Builds the tool against timeanddate.com.
    pub async fn build(config: ToolConfig) -> Result<Self, ToolError> {
        Self::with_base_url(config, SUNMAP_BASE).await
    }

    /// Builds the tool against another host.
    pub async fn with_base_url(config: ToolConfig, base_url: &str) -> Result<Self, ToolError> {
        let tool = Self {
            base_url: format!("{}{SUNMAP_PATH}", base_url.trim_end_matches('/')),
            simple: config.options.dnmap.simple,
            image: Artifact::open(&config.cache_dir, "dnmap_last_image").await,
        };
        // Fail at startup rather than on every cycle.
        tool.endpoint_at(Utc::now())?;
        Ok(tool)
    }

    /// Returns the map endpoint for a point in time.
    pub fn endpoint_at(&self, now: DateTime<Utc>) -> Result<Endpoint, CoreError> {
        let iso = now.format("%Y%m%dT%H%M").to_string();
        let earth = if self.simple { "0" } else { "1" };
        Endpoint::with_query(
            "image",
            &self.base_url,
            &[("iso", iso.as_str()), ("earth", earth)],
            IMAGE_CONTENT_TYPES,
        )
    }
}

#[async_trait]
impl Tool for DnmapTool {
    fn id(&self) -> &str {
        "dnmap"
    }

    #[instrument(skip_all)]
    async fn run_cycle(&mut self, ctx: &ToolContext) -> Result<CycleOutcome, FetchError> {
        let endpoint = self.endpoint_at(Utc::now())?;

        info!("downloading image");
        let image = ctx.fetch(&endpoint).await?;

        if !self.image.has_changed(&image.bytes) {
            info!("no change");
            return Ok(CycleOutcome::Unchanged);
        }

        self.image.write(&image.bytes).await.map_err(artifact_error)?;
        Ok(CycleOutcome::Changed)
    }
}

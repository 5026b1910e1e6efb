//! SOHO polling cycle.

use async_trait::async_trait;
use space2obs_core::Endpoint;
use space2obs_fetch::{CycleOutcome, FetchError, Tool, ToolContext};
use space2obs_store::Artifact;
use tracing::{info, instrument, warn};

use super::cameras::{Camera, select_cameras};
use crate::config::ToolConfig;
use crate::error::ToolError;

/// SOHO image host.
const SOHO_BASE: &str = "https://soho.nascom.nasa.gov";

const IMAGE_CONTENT_TYPES: &[&str] = &["image/jpeg"];

/// One camera with its endpoint and artifact.
#[derive(Debug)]
struct Feed {
    camera: Camera,
    endpoint: Endpoint,
    image: Artifact,
}

/// Polls the selected SOHO cameras one after another.
#[derive(Debug)]
pub struct SohoTool {
    feeds: Vec<Feed>,
}

impl SohoTool {
    /// Builds the tool against the SOHO host.
    pub async fn build(config: ToolConfig) -> Result<Self, ToolError> {
        Self::with_base_url(config, SOHO_BASE).await
    }

    /// Builds the tool against another host.
    pub async fn with_base_url(config: ToolConfig, base_url: &str) -> Result<Self, ToolError> {
        let base_url = base_url.trim_end_matches('/');
        let mut feeds = Vec::new();

        for camera in select_cameras(&config.options.soho.cameras)? {
            feeds.push(Feed {
                camera,
                endpoint: Endpoint::new(
                    camera.name,
                    &format!("{base_url}{}", camera.latest_image_path()),
                    IMAGE_CONTENT_TYPES,
                )?,
                image: Artifact::open(&config.cache_dir, camera.artifact_name()).await,
            });
        }

        Ok(Self { feeds })
    }

    /// Returns the ids of the polled cameras.
    pub fn camera_ids(&self) -> Vec<&'static str> {
        self.feeds.iter().map(|f| f.camera.id).collect()
    }
}

#[async_trait]
impl Tool for SohoTool {
    fn id(&self) -> &str {
        "soho"
    }

    /// Polls every camera once.
    ///
    /// A failing camera gets its own retry wait and the cycle moves on to
    /// the next one.
    #[instrument(skip_all)]
    async fn run_cycle(&mut self, ctx: &ToolContext) -> Result<CycleOutcome, FetchError> {
        let mut changed = false;

        for feed in &mut self.feeds {
            info!("downloading {} image", feed.camera.name);

            let image = match ctx.fetch(&feed.endpoint).await {
                Ok(image) => image,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!("{e}");
                    ctx.retry_idle().await;
                    continue;
                }
            };

            if !feed.image.has_changed(&image.bytes) {
                info!("no change");
                continue;
            }

            match feed.image.write(&image.bytes).await {
                Ok(()) => changed = true,
                Err(e) => {
                    warn!("{e}");
                    ctx.retry_idle().await;
                }
            }
        }

        Ok(if changed {
            CycleOutcome::Changed
        } else {
            CycleOutcome::Unchanged
        })
    }
}

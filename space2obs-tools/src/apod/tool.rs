//! APOD polling cycle.

use async_trait::async_trait;
use space2obs_core::{Endpoint, Template};
use space2obs_fetch::{CycleOutcome, FetchError, RateLimit, Tool, ToolContext};
use space2obs_store::Artifact;
use tracing::{info, instrument, warn};

use super::ApodOptions;
use super::parser::ApodEntry;
use crate::config::ToolConfig;
use crate::error::{ToolError, artifact_error};

// ============================================================================
// Constants
// ============================================================================

/// APOD API base URL.
const APOD_API_BASE: &str = "https://api.nasa.gov";

/// APOD endpoint path.
const APOD_PATH: &str = "/planetary/apod";

/// Public key used when no `nasa_api_key` secret is configured.
const DEMO_API_KEY: &str = "DEMO_KEY";

/// Secret holding the NASA API key.
pub(crate) const API_KEY_SECRET: &str = "nasa_api_key";

const DATA_CONTENT_TYPES: &[&str] = &["application/json"];
const IMAGE_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];

// ============================================================================
// Tool
// ============================================================================

/// Polls the APOD API.
#[derive(Debug)]
pub struct ApodTool {
    endpoint: Endpoint,
    template: Template,
    max_explanation_length: usize,
    data: Artifact,
    image: Artifact,
    text: Artifact,
}

impl ApodTool {
    /// Builds the tool against the public API.
    pub async fn build(config: ToolConfig) -> Result<Self, ToolError> {
        Self::with_base_url(config, APOD_API_BASE).await
    }

    /// Builds the tool against another API host.
    pub async fn with_base_url(config: ToolConfig, base_url: &str) -> Result<Self, ToolError> {
        let ToolConfig {
            cache_dir,
            secrets,
            options,
        } = config;
        let ApodOptions {
            max_explanation_length,
            text_template,
        } = options.apod;

        let api_key = secrets.get(API_KEY_SECRET).unwrap_or_else(|| {
            warn!("no {API_KEY_SECRET} in secrets, using {DEMO_API_KEY}");
            DEMO_API_KEY
        });

        let endpoint = Endpoint::with_query(
            "data",
            &format!("{}{APOD_PATH}", base_url.trim_end_matches('/')),
            &[("count", "1"), ("api_key", api_key)],
            DATA_CONTENT_TYPES,
        )?;

        Ok(Self {
            endpoint,
            template: Template::new(&text_template),
            max_explanation_length,
            data: Artifact::open(&cache_dir, "apod_last_data").await,
            image: Artifact::open(&cache_dir, "apod_last_image").await,
            text: Artifact::open(&cache_dir, "apod_last_text").await,
        })
    }

    /// Returns the data endpoint.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl Tool for ApodTool {
    fn id(&self) -> &str {
        "apod"
    }

    #[instrument(skip_all)]
    async fn run_cycle(&mut self, ctx: &ToolContext) -> Result<CycleOutcome, FetchError> {
        info!("downloading data");
        let data = ctx.fetch(&self.endpoint).await?;
        RateLimit::check(&data.headers)?;

        if !self.data.has_changed(&data.bytes) {
            info!("same as before");
            return Ok(CycleOutcome::Unchanged);
        }

        let entry = ApodEntry::from_payload(&data.bytes)?;
        if let Some(reason) = entry.rejection() {
            return Ok(CycleOutcome::Rejected(reason));
        }

        // Both downloads must succeed before anything is replaced.
        info!("downloading image");
        let image_url = entry.url.as_deref().unwrap_or_default();
        let image = ctx
            .fetch(&Endpoint::new("image", image_url, IMAGE_CONTENT_TYPES)?)
            .await?;

        let text = self
            .template
            .render(&entry.template_fields(self.max_explanation_length));

        self.image.write(&image.bytes).await.map_err(artifact_error)?;
        self.text.write(text.as_bytes()).await.map_err(artifact_error)?;
        self.data.write(&data.bytes).await.map_err(artifact_error)?;

        Ok(CycleOutcome::Changed)
    }
}

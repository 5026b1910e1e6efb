//! EONET polling cycle.

use async_trait::async_trait;
use space2obs_core::{Endpoint, Template};
use space2obs_fetch::{CycleOutcome, FetchError, RateLimit, Tool, ToolContext};
use space2obs_store::Artifact;
use tracing::{info, instrument};

use super::EonetOptions;
use super::parser::EventsDocument;
use crate::config::ToolConfig;
use crate::error::{ToolError, artifact_error};

/// EONET API base URL.
const EONET_API_BASE: &str = "https://eonet.gsfc.nasa.gov";

/// Events endpoint path.
const EVENTS_PATH: &str = "/api/v3/events";

const DATA_CONTENT_TYPES: &[&str] = &["application/json"];

/// Polls the EONET events feed.
#[derive(Debug)]
pub struct EonetTool {
    endpoint: Endpoint,
    template: Template,
    data: Artifact,
    text: Artifact,
}

impl EonetTool {
    /// Builds the tool against the public API.
    pub async fn build(config: ToolConfig) -> Result<Self, ToolError> {
        Self::with_base_url(config, EONET_API_BASE).await
    }

    /// Builds the tool against another API host.
    pub async fn with_base_url(config: ToolConfig, base_url: &str) -> Result<Self, ToolError> {
        let EonetOptions {
            status,
            limit,
            text_template,
        } = config.options.eonet;

        if limit == 0 {
            return Err(ToolError::Config("event limit must be at least 1".into()));
        }

        let endpoint = Endpoint::with_query(
            "events",
            &format!("{}{EVENTS_PATH}", base_url.trim_end_matches('/')),
            &[("status", status.as_str()), ("limit", limit.to_string().as_str())],
            DATA_CONTENT_TYPES,
        )?;

        Ok(Self {
            endpoint,
            template: Template::new(&text_template),
            data: Artifact::open(&config.cache_dir, "eonet_last_data").await,
            text: Artifact::open(&config.cache_dir, "eonet_last_text").await,
        })
    }

    /// Returns the events endpoint.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl Tool for EonetTool {
    fn id(&self) -> &str {
        "eonet"
    }

    #[instrument(skip_all)]
    async fn run_cycle(&mut self, ctx: &ToolContext) -> Result<CycleOutcome, FetchError> {
        info!("downloading events");
        let data = ctx.fetch(&self.endpoint).await?;
        RateLimit::check(&data.headers)?;

        if !self.data.has_changed(&data.bytes) {
            info!("no change");
            return Ok(CycleOutcome::Unchanged);
        }

        let document: EventsDocument = data.json()?;
        let text = document.render(&self.template);

        self.text.write(text.as_bytes()).await.map_err(artifact_error)?;
        self.data.write(&data.bytes).await.map_err(artifact_error)?;

        Ok(CycleOutcome::Changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eonet::EonetStatus;

    #[tokio::test]
    async fn test_endpoint_query() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut config = ToolConfig::new(temp_dir.path());
        config.options.eonet.status = EonetStatus::Open;
        config.options.eonet.limit = 5;

        let tool = EonetTool::build(config).await.unwrap();
        assert_eq!(
            tool.endpoint().url().as_str(),
            "https://eonet.gsfc.nasa.gov/api/v3/events?status=open&limit=5"
        );
    }

    #[tokio::test]
    async fn test_zero_limit_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut config = ToolConfig::new(temp_dir.path());
        config.options.eonet.limit = 0;

        let err = EonetTool::build(config).await.unwrap_err();
        assert!(matches!(err, ToolError::Config(_)));
    }
}

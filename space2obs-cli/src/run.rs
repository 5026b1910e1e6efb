//! Startup and the daemon run.

use anyhow::{Context, Result};
use space2obs_fetch::{Daemon, FetchError, ToolContext};
use space2obs_store::{Secrets, default_cache_dir, default_secrets_path, require_dir, require_file};
use space2obs_tools::{ToolConfig, ToolRegistry};
use tracing::{debug, error, info};

use crate::shutdown::wait_for_signal;
use crate::terminal::CursorGuard;
use crate::{Cli, ExitCode};

/// Validates paths, loads secrets and collects the tool options.
///
/// # Errors
/// Returns an error for a missing cache directory, a missing or malformed
/// secrets file and invalid options.
pub async fn tool_config(cli: &Cli) -> Result<ToolConfig> {
    let cache_dir = cli.cache_dir.clone().unwrap_or_else(default_cache_dir);
    let cache_dir = require_dir(&cache_dir).context("cache directory")?;

    let secrets_file = cli
        .secrets_file
        .clone()
        .unwrap_or_else(default_secrets_path);
    let secrets_file = require_file(&secrets_file).context("secrets file")?;
    let secrets = Secrets::load(&secrets_file)
        .await
        .with_context(|| format!("failed to load secrets from {}", secrets_file.display()))?;

    Ok(ToolConfig::new(cache_dir)
        .with_secrets(secrets)
        .with_options(cli.tool_options()?))
}

/// Runs the selected tool until interrupted or a fatal error occurs.
pub async fn run(cli: &Cli) -> ExitCode {
    let Some(descriptor) = ToolRegistry::get_by_cli_name(&cli.tool) else {
        error!("unknown tool: {}", cli.tool);
        return ExitCode::ConfigError;
    };

    let daemon = match prepare(cli, descriptor).await {
        Ok(daemon) => daemon,
        Err(e) => {
            error!("{e:#}");
            return ExitCode::ConfigError;
        }
    };

    let _cursor = CursorGuard::hide();

    tokio::select! {
        result = daemon.run() => match result {
            Ok(never) => match never {},
            Err(FetchError::QuotaExceeded { .. }) => ExitCode::QuotaExceeded,
            Err(e) => {
                error!("{e}");
                ExitCode::ConfigError
            }
        },
        signal = wait_for_signal() => {
            if let Err(e) = signal {
                error!("{e:#}");
                return ExitCode::ConfigError;
            }
            // The spinner may still own the current line.
            println!();
            info!("[quit]");
            ExitCode::Success
        }
    }
}

async fn prepare(
    cli: &Cli,
    descriptor: &'static space2obs_tools::ToolDescriptor,
) -> Result<Daemon> {
    let config = tool_config(cli).await?;

    println!("-=[ space2obs :: {} ]=-", descriptor.cli_name());
    println!();
    debug!(
        "{} from {}",
        descriptor.display_name(),
        descriptor.metadata.source_url
    );

    let tool = descriptor
        .build(config)
        .await
        .with_context(|| format!("failed to set up {}", descriptor.cli_name()))?;
    let ctx = ToolContext::new(cli.schedule()).context("failed to set up HTTP client")?;

    Ok(Daemon::new(tool, ctx))
}

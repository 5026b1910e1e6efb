//! Interrupt handling.

use anyhow::{Context, Result};

/// Waits for Ctrl+C or, on unix, SIGTERM.
///
/// # Errors
/// Returns an error if signal handlers cannot be registered.
pub async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm =
            signal(SignalKind::terminate()).context("failed to register SIGTERM handler")?;
        let mut sigint =
            signal(SignalKind::interrupt()).context("failed to register SIGINT handler")?;

        tokio::select! {
            _ = sigterm.recv() => tracing::debug!("received SIGTERM"),
            _ = sigint.recv() => tracing::debug!("received SIGINT"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .context("failed to register Ctrl+C handler")?;
        tracing::debug!("received Ctrl+C");
    }

    Ok(())
}

// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! space2obs CLI - polls a space data feed into flat cache files.
//!
//! # Examples
//!
//! ```bash
//! # Astronomy Picture of the Day, every 5 minutes
//! space2obs apod
//!
//! # Day/night map without the earth texture, every minute
//! space2obs dnmap --dnmap-simple -i 60
//!
//! # Open EONET events only
//! space2obs eonet --eonet-status open --eonet-limit 20
//!
//! # Two SOHO cameras into a custom cache directory
//! space2obs soho --soho-cameras c2,c3 -c ./cache
//! ```

mod logging;
mod run;
mod shutdown;
mod terminal;

use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Command, CommandFactory, FromArgMatches, Parser};
use space2obs_core::{
    DEFAULT_INTERVAL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RETRY_DELAY_SECS, ScheduleParams,
};
use space2obs_tools::soho::{ALL_CAMERAS, CAMERAS};
use space2obs_tools::{
    ApodOptions, DnmapOptions, EonetOptions, EonetStatus, SohoOptions, ToolOptions, ToolRegistry,
    apod, eonet,
};

// ============================================================================
// CLI Definition
// ============================================================================

/// space2obs - space data poller.
#[derive(Parser, Debug)]
#[command(name = "space2obs")]
#[command(about = "Polls public astronomy and space data feeds into flat cache files")]
#[command(long_about = r"
space2obs polls one data source forever and keeps its latest result in the
cache directory. Files are only rewritten when the fetched payload changed.")]
#[command(version)]
pub struct Cli {
    /// Tool to run.
    #[arg(value_parser = PossibleValuesParser::new(ToolRegistry::cli_names()))]
    pub tool: String,

    /// Directory receiving the artifacts. Must exist.
    #[arg(long, short = 'c', help_heading = "Shared")]
    pub cache_dir: Option<PathBuf>,

    /// JSON file holding the secrets. Must exist.
    #[arg(long, short = 's', help_heading = "Shared")]
    pub secrets_file: Option<PathBuf>,

    /// Seconds to wait after a successful cycle.
    #[arg(long, short = 'i', default_value_t = DEFAULT_INTERVAL_SECS, help_heading = "Shared")]
    pub interval: u64,

    /// Seconds to wait after a failed or rejected cycle.
    #[arg(long, short = 'r', default_value_t = DEFAULT_RETRY_DELAY_SECS, help_heading = "Shared")]
    pub retry_delay: u64,

    /// Seconds before a single request is abandoned.
    #[arg(long, short = 't', default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS, help_heading = "Shared")]
    pub request_timeout: u64,

    /// Verbose output (show debug info).
    #[arg(long, short, help_heading = "Shared")]
    pub verbose: bool,

    /// Quiet mode (warnings and errors only).
    #[arg(long, short, help_heading = "Shared")]
    pub quiet: bool,

    /// Maximum explanation length in characters.
    #[arg(long, default_value_t = apod::DEFAULT_MAX_EXPLANATION_LENGTH, help_heading = "apod")]
    pub apod_max_explanation_length: usize,

    /// Text artifact template.
    #[arg(long, default_value = apod::DEFAULT_TEXT_TEMPLATE, help_heading = "apod")]
    pub apod_text_template: String,

    /// Map without the earth texture.
    #[arg(long, help_heading = "dnmap")]
    pub dnmap_simple: bool,

    /// Event status filter.
    #[arg(
        long,
        default_value = "all",
        value_parser = PossibleValuesParser::new(EonetStatus::CHOICES),
        help_heading = "eonet"
    )]
    pub eonet_status: String,

    /// Maximum number of events.
    #[arg(long, default_value_t = eonet::DEFAULT_LIMIT, help_heading = "eonet")]
    pub eonet_limit: u32,

    /// Line template.
    #[arg(long, default_value = eonet::DEFAULT_TEXT_TEMPLATE, help_heading = "eonet")]
    pub eonet_text_template: String,

    /// Cameras to poll, comma-separated.
    #[arg(
        long,
        num_args = 1..,
        value_delimiter = ',',
        default_value = ALL_CAMERAS,
        value_parser = PossibleValuesParser::new(camera_choices()),
        help_heading = "soho"
    )]
    pub soho_cameras: Vec<String>,
}

/// Builds the command line, completing the help from the tool registry.
pub fn command() -> Command {
    Cli::command()
        .after_long_help(tools_help())
        .mut_arg("apod_text_template", |arg| {
            arg.help(template_help("Text artifact template.", apod::TEXT_TEMPLATE_FIELDS))
        })
        .mut_arg("eonet_text_template", |arg| {
            arg.help(template_help("Line template.", eonet::TEXT_TEMPLATE_FIELDS))
        })
}

fn template_help(summary: &str, fields: &[&str]) -> String {
    let fields: Vec<String> = fields.iter().map(|f| format!("{{{f}}}")).collect();
    format!("{summary} Fields: {}.", fields.join(" "))
}

fn tools_help() -> String {
    let mut help = String::from("Tools:\n");
    for desc in ToolRegistry::all() {
        let meta = &desc.metadata;
        let _ = writeln!(help, "  {:<6} {}", desc.cli_name(), meta.display_name);
        let _ = writeln!(help, "         {}", meta.description);
        let _ = writeln!(help, "         source:  {}", meta.source_url);
        let _ = writeln!(help, "         writes:  {}", meta.artifacts.join(", "));
        if !meta.secrets.is_empty() {
            let _ = writeln!(help, "         secrets: {}", meta.secrets.join(", "));
        }
        if meta.quota_guarded {
            let _ = writeln!(help, "         stops when the rate limit is used up");
        }
    }
    help
}

fn camera_choices() -> Vec<&'static str> {
    std::iter::once(ALL_CAMERAS)
        .chain(CAMERAS.iter().map(|c| c.id))
        .collect()
}

impl Cli {
    /// Returns the schedule parameters.
    pub fn schedule(&self) -> ScheduleParams {
        ScheduleParams::from_secs(self.interval, self.retry_delay, self.request_timeout)
    }

    /// Collects the per-tool options.
    ///
    /// # Errors
    /// Returns an error if an option value is out of range.
    pub fn tool_options(&self) -> anyhow::Result<ToolOptions> {
        let status = self
            .eonet_status
            .parse::<EonetStatus>()
            .map_err(anyhow::Error::msg)?;

        Ok(ToolOptions {
            apod: ApodOptions {
                max_explanation_length: self.apod_max_explanation_length,
                text_template: self.apod_text_template.clone(),
            },
            dnmap: DnmapOptions {
                simple: self.dnmap_simple,
            },
            eonet: EonetOptions {
                status,
                limit: self.eonet_limit,
                text_template: self.eonet_text_template.clone(),
            },
            soho: SohoOptions {
                cameras: self.soho_cameras.clone(),
            },
        })
    }
}

/// CLI exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Normal exit or interrupt.
    Success = 0,
    /// Bad paths, unreadable secrets or invalid tool options.
    ConfigError = 1,
    /// The rate limit of a quota-guarded source is used up.
    QuotaExceeded = 10,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> std::process::ExitCode {
    if std::env::args_os().len() <= 1 {
        let _ = command().print_help();
        return ExitCode::Success.into();
    }

    let matches = command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.format(&mut command()).exit());
    logging::setup_logging(cli.verbose, cli.quiet);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("failed to start runtime: {e}");
            return ExitCode::ConfigError.into();
        }
    };

    runtime.block_on(run::run(&cli)).into()
}

// ============================================================================
// Tests
// ============================================================================

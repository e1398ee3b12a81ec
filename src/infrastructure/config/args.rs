//! Command-line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments, merged over the configuration file.
#[derive(Debug, Parser)]
#[command(
    name = "persona-photos",
    version,
    about = "Resolve persona photos from a remote CDN with bundled fallbacks",
    long_about = None
)]
pub struct CliArgs {
    /// Persona codes to resolve.
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Remote photo base URL. Pass an empty string to disable the remote tier.
    #[arg(long, value_name = "URL")]
    pub assets_base: Option<String>,

    /// Backend API base URL.
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Host name used to detect the backend API base.
    #[arg(long, value_name = "HOST")]
    pub api_host: Option<String>,

    /// Directory holding bundled persona photos.
    #[arg(long, value_name = "DIR")]
    pub photo_dir: Option<PathBuf>,

    /// Probe timeout in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Only list candidates, do not load them.
    #[arg(long)]
    pub no_probe: bool,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,
}

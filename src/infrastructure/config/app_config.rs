//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::entities::RemoteBase;

use super::args::CliArgs;

const APP_NAME: &str = "persona-photos";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "persona-photos";

/// Environment variable holding the remote photo base URL.
pub const ASSETS_BASE_ENV: &str = "PERSONA_ASSETS_BASE";

/// Environment variable holding the backend API base URL.
pub const API_BASE_ENV: &str = "PERSONA_API_BASE";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from `config.toml` and overridden by
/// the environment and CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Remote photo base URL. Unset or empty disables the remote tier.
    #[serde(default)]
    pub assets_base: Option<String>,

    /// Backend API base URL. Detected from the host name when unset.
    #[serde(default)]
    pub api_base: Option<String>,

    /// Directory holding the bundled persona photos.
    #[serde(default = "default_photo_dir")]
    pub photo_dir: PathBuf,

    /// Probe configuration.
    #[serde(default)]
    pub probe: ProbeConfig,
}

/// Candidate probe configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with remote requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Largest remote body accepted, in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_photo_dir() -> PathBuf {
    PathBuf::from("photo")
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_max_body_bytes() -> u64 {
    10 * 1024 * 1024
}

fn default_user_agent() -> String {
    format!("{APP_NAME}/{}", env!("CARGO_PKG_VERSION"))
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(assets_base) = &args.assets_base {
            self.assets_base = Some(assets_base.clone());
        }
        if let Some(api_base) = &args.api_base {
            self.api_base = Some(api_base.clone());
        }
        if let Some(photo_dir) = &args.photo_dir {
            self.photo_dir = photo_dir.clone();
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.probe.timeout_secs = timeout_secs;
        }
    }

    /// Applies environment overrides through `lookup`.
    pub fn merge_with_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(assets_base) = lookup(ASSETS_BASE_ENV) {
            self.assets_base = Some(assets_base);
        }
        if let Some(api_base) = lookup(API_BASE_ENV) {
            self.api_base = Some(api_base);
        }
    }

    /// Returns the remote tier base.
    #[must_use]
    pub fn remote_base(&self) -> RemoteBase {
        RemoteBase::from_option(self.assets_base.as_deref())
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("persona-photos.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            assets_base: None,
            api_base: None,
            photo_dir: default_photo_dir(),
            probe: ProbeConfig::default(),
        }
    }
}

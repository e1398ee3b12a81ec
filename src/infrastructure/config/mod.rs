//! Application configuration.

pub mod api_base;
pub mod app_config;
pub mod args;
pub mod storage;

pub use api_base::{LOCAL_API_BASE, resolve_api_base};
pub use app_config::{API_BASE_ENV, ASSETS_BASE_ENV, AppConfig, LogLevel, ProbeConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};

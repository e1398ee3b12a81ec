//! Infrastructure layer with filesystem, HTTP and configuration adapters.

/// Bundled photo registry.
pub mod assets;
/// Application configuration.
pub mod config;
/// Candidate probing.
pub mod probe;

pub use assets::LocalAssetIndex;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager, resolve_api_base};
pub use probe::ImageProbe;

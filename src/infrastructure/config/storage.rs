//! Configuration file storage.

use super::app_config::AppConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Reads and writes `config.toml` in the configuration directory.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = AppConfig::default_config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Ensures the configuration directory exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> Result<(), ConfigError> {
        if !self.config_dir.exists() {
            info!("Creating configuration directory at {:?}", self.config_dir);
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Loads the application configuration, writing defaults if the file is missing.
    ///
    /// A file that fails to parse is left untouched and defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the defaults cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            std::path::Path::to_path_buf,
        );

        if !config_path.exists() {
            info!(
                "Config file not found at {:?}, creating default.",
                config_path
            );
            let default_config = AppConfig::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&config_path, &default_config)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path)?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Failed to parse config file: {}. Using defaults.", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Saves the application configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save_config(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.ensure_config_dir()?;
        Self::save_to_file(&self.config_dir.join(CONFIG_FILE_NAME), config)
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_config_dir_creates_directory() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("persona-photos");
        let manager = StorageManager::with_dir(config_path.clone());

        assert!(!config_path.exists());
        manager.ensure_config_dir().unwrap();
        assert!(config_path.exists());
    }

    #[test]
    fn test_load_config_creates_default_if_missing() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.photo_dir, PathBuf::from("photo"));

        let config_file = dir.path().join(CONFIG_FILE_NAME);
        assert!(config_file.exists());
    }

    #[test]
    fn test_load_config_handles_malformed_file() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_file, "assets_base = [").unwrap();

        let config = manager.load_config(None).unwrap();
        assert!(config.assets_base.is_none());
        let content = fs::read_to_string(&config_file).unwrap();
        assert_eq!(content, "assets_base = [");
    }

    #[test]
    fn test_load_config_from_override_path() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");

        fs::write(&custom, "assets_base = \"https://cdn.x.com\"\n").unwrap();

        let config = manager.load_config(Some(&custom)).unwrap();
        assert_eq!(config.assets_base.as_deref(), Some("https://cdn.x.com"));
        assert!(!dir.path().join("unused").exists());
    }

    #[test]
    fn test_override_path_needs_no_config_dir() {
        let dir = tempdir().unwrap();
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "photo_dir = \"static/photo\"\n").unwrap();

        let manager = StorageManager::with_dir(PathBuf::new());
        let config = manager.load_config(Some(&custom)).unwrap();

        assert_eq!(config.photo_dir, PathBuf::from("static/photo"));
    }

    #[test]
    fn test_default_dir_matches_app_config() {
        if let (Ok(manager), Some(dir)) = (StorageManager::new(), AppConfig::default_config_dir()) {
            assert_eq!(manager.config_dir, dir);
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let config = AppConfig {
            assets_base: Some("https://cdn.x.com".to_string()),
            ..AppConfig::default()
        };
        manager.save_config(&config).unwrap();

        let loaded = manager.load_config(None).unwrap();
        assert_eq!(loaded.assets_base.as_deref(), Some("https://cdn.x.com"));
    }
}

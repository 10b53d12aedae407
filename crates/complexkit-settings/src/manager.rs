//! Locates and loads the configuration file.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, SettingsError};

const APP_DIR: &str = "complexkit";
const CONFIG_FILE: &str = "config.json";

/// Entry point for finding the platform configuration file.
pub struct SettingsManager;

impl SettingsManager {
    /// Platform configuration directory for ComplexKit.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("No platform config directory".to_string())
            })
    }

    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load `path` if it exists; fall back to defaults when it is missing or
    /// invalid.
    pub fn load_or_default(path: &Path) -> Config {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Config::default();
        }

        match Config::load_from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded settings from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Load the configuration from the platform location.
    pub fn load() -> Config {
        match Self::config_file_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                tracing::warn!("{}", e);
                Config::default()
            }
        }
    }
}

//! Configuration for ComplexKit
//!
//! Supports JSON and TOML files, selected by extension. Every section has
//! defaults, so a partial file only overrides what it names.

use complexkit_core::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Largest accepted canvas or window dimension in pixels.
pub const MAX_DIMENSION_PX: u32 = 16_384;

/// Drawing surface settings
///
/// The plane is always drawn at a fixed 40 px per unit; only the surface
/// size is configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Surface width in pixels
    pub canvas_width: u32,
    /// Surface height in pixels
    pub canvas_height: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

/// Main window preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_width: 960,
            window_height: 560,
            window_title: "Complex Plane Rotation".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub view: ViewSettings,
    pub ui: UiSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let dimensions = [
            ("view.canvas_width", self.view.canvas_width),
            ("view.canvas_height", self.view.canvas_height),
            ("ui.window_width", self.ui.window_width),
            ("ui.window_height", self.ui.window_height),
        ];

        for (key, value) in dimensions {
            if value == 0 || value > MAX_DIMENSION_PX {
                return Err(ConfigError::OutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }
}

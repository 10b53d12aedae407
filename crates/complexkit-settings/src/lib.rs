//! ComplexKit Settings Crate
//!
//! Handles application configuration: the drawing surface geometry and the
//! main window preferences. The application only reads configuration at
//! startup; [`Config::save_to_file`] writes a file for tooling and tests, and
//! no session state is ever persisted.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, UiSettings, ViewSettings};
pub use error::{ConfigError, SettingsError};
pub use manager::SettingsManager;

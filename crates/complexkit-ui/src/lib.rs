//! # ComplexKit UI
//!
//! GTK-based user interface for ComplexKit.

pub mod gtk_app;
pub mod ui;

pub use complexkit_settings::{Config, SettingsManager, UiSettings, ViewSettings};

//! # ComplexKit
//!
//! An interactive visualization of complex-number rotation and
//! multiplication on the complex plane.
//!
//! ## Architecture
//!
//! ComplexKit is organized as a workspace with multiple crates:
//!
//! 1. **complexkit-core** - Complex type, arithmetic, input parsing, errors
//! 2. **complexkit-visualizer** - Plane transform, recorded scenes, renderer
//! 3. **complexkit-workbench** - Session state and the action controller
//! 4. **complexkit-settings** - Configuration files
//! 5. **complexkit-ui** - GTK window, inputs, and cairo painting
//! 6. **complexkit** - Main binary that integrates all crates

pub use complexkit_core::{degrees_to_radians, multiply, rotate, Complex, InputError, InputField};
pub use complexkit_settings::{Config, SettingsManager};
pub use complexkit_visualizer::{PlaneRenderer, PlaneTransform, Scene};
pub use complexkit_workbench::{OutputField, SessionState, WorkbenchController};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.as_str()));

    // Windows GUI builds have no console, so log next to the executable.
    #[cfg(all(target_os = "windows", not(debug_assertions)))]
    {
        use std::fs::OpenOptions;

        let log_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| std::path::PathBuf::from("."));

        let log_file = log_dir.join("complexkit.log");

        match OpenOptions::new().create(true).append(true).open(&log_file) {
            Ok(file) => {
                let fmt_layer = fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .try_init()?;
            }
            Err(_) => {
                tracing_subscriber::registry().with(env_filter).try_init()?;
            }
        }
    }

    #[cfg(not(all(target_os = "windows", not(debug_assertions))))]
    {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

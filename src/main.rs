// On Windows, hide the console window for GUI applications
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use complexkit::{init_logging, SettingsManager};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    tracing::info!("ComplexKit {} (built {})", complexkit::VERSION, complexkit::BUILD_DATE);
    let config = SettingsManager::load();

    let code = complexkit_ui::gtk_app::main(config);
    if code != glib::ExitCode::SUCCESS {
        anyhow::bail!("GTK application exited with {:?}", code);
    }

    Ok(())
}

use gtk4::prelude::*;
use gtk4::{ApplicationWindow, CssProvider, HeaderBar};
use libadwaita::Application as AdwApplication;

use complexkit_settings::Config;

use crate::ui::gtk::WorkbenchView;

const APP_ID: &str = "io.github.complexkit.ComplexKit";

/// Run the GTK application until its last window closes.
pub fn main(config: Config) -> glib::ExitCode {
    let app = AdwApplication::builder().application_id(APP_ID).build();

    app.connect_startup(|_| {
        load_css();
    });

    app.connect_activate(move |app| {
        tracing::info!(
            "Opening workbench with {}x{} canvas",
            config.view.canvas_width,
            config.view.canvas_height
        );

        let window = ApplicationWindow::builder()
            .application(app)
            .title(config.ui.window_title.as_str())
            .default_width(config.ui.window_width as i32)
            .default_height(config.ui.window_height as i32)
            .build();

        let header = HeaderBar::new();
        window.set_titlebar(Some(&header));

        let workbench = WorkbenchView::new(&config.view);
        window.set_child(Some(&workbench.widget));

        window.present();
    });

    app.run()
}

fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(include_str!("ui/gtk/style.css"));

    let Some(display) = gtk4::gdk::Display::default() else {
        tracing::warn!("No display available; skipping stylesheet");
        return;
    };

    gtk4::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

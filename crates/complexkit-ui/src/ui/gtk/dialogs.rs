//! Modal message helpers.

use gtk4::prelude::*;
use gtk4::{ButtonsType, MessageDialog, MessageType, Widget};

/// Try to obtain the parent `gtk4::Window` from any widget.
pub fn parent_window(widget: &impl IsA<Widget>) -> Option<gtk4::Window> {
    widget
        .root()
        .and_then(|r| r.downcast::<gtk4::Window>().ok())
}

/// Show a blocking warning alert with a single OK button.
///
/// If a parent window is provided the dialog is set as transient and modal.
/// The dialog destroys itself when dismissed.
pub fn show_alert(message: &str, parent: Option<&gtk4::Window>) {
    let mut builder = MessageDialog::builder()
        .message_type(MessageType::Warning)
        .buttons(ButtonsType::Ok)
        .text(message)
        .modal(true);

    if let Some(win) = parent {
        builder = builder.transient_for(win);
    }

    let dialog = builder.build();
    dialog.connect_response(|d, _| d.destroy());
    dialog.present();
}

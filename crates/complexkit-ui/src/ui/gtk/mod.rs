//! GTK widgets for the workbench window.

pub mod dialogs;
pub mod plane_view;
pub mod workbench;

pub use plane_view::{paint_scene, PlaneView};
pub use workbench::WorkbenchView;

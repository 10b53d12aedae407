//! # ComplexKit Workbench
//!
//! Toolkit-independent interaction state for the complex plane workbench:
//! the confirmed session number, the input form (values, locks and focus),
//! the read-only result panel, and the controller that wires the four user
//! actions to validation, arithmetic and a full scene redraw.

pub mod controller;
pub mod form;
pub mod info;
pub mod session;

pub use controller::WorkbenchController;
pub use form::{InputForm, Trigger};
pub use info::{InfoPanel, OutputField};
pub use session::SessionState;

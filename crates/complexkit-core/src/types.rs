//! Type aliases for commonly used shared types.
//!
//! The GTK front end shares its controller and widgets between signal
//! handlers on the main thread; these aliases name those patterns.
//!
//! ```rust,ignore
//! use complexkit_core::types::*;
//!
//! // Instead of: Rc<RefCell<Controller>>
//! let controller: Shared<Controller> = shared(Controller::new(view));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in [`Shared`].
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

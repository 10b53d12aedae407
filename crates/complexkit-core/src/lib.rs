//! # ComplexKit Core
//!
//! Core types and pure functions for ComplexKit.
//! Provides the complex number value type, rotation and multiplication
//! arithmetic, numeric input validation, and the shared error types.

pub mod arithmetic;
pub mod complex;
pub mod constants;
pub mod error;
pub mod input;
pub mod types;

pub use arithmetic::{degrees_to_radians, magnitude, multiply, radians_to_degrees, rotate};
pub use complex::Complex;
pub use error::InputError;
pub use input::{parse_number, InputField};
pub use types::{shared, Shared};

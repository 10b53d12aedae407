//! Shared constants used across ComplexKit crates.

/// Pixels per plane unit.
pub const PIXELS_PER_UNIT: f64 = 40.0;

/// Default drawing surface size in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 600;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;

/// Length of each arrowhead stroke in pixels.
pub const ARROW_LENGTH_PX: f64 = 8.0;
/// Angle between an arrowhead stroke and its shaft.
pub const ARROW_HALF_ANGLE_RAD: f64 = std::f64::consts::PI / 6.0;

/// Arcs are skipped for vectors at or below this magnitude.
pub const MIN_ARC_RADIUS: f64 = 0.01;

/// A multiplier is drawn only when one of its parts exceeds this.
pub const MULTIPLIER_DRAW_THRESHOLD: f64 = 1e-6;

/// Default text for the five input fields.
pub const DEFAULT_REAL: &str = "1";
pub const DEFAULT_IMAGINARY: &str = "1";
pub const DEFAULT_ANGLE: &str = "45";
pub const DEFAULT_MULTIPLIER_REAL: &str = "0";
pub const DEFAULT_MULTIPLIER_IMAGINARY: &str = "1";

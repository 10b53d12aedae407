//! Mapping between plane coordinates and surface pixels.

use complexkit_core::constants::PIXELS_PER_UNIT;
use serde::{Deserialize, Serialize};

use crate::scene::Point;

/// Maps plane coordinates (real, imaginary) to surface pixels.
///
/// The origin sits at the exact center of the surface and one plane unit
/// spans `scale` pixels. Pixel y grows downward, so the imaginary axis is
/// inverted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneTransform {
    width: f64,
    height: f64,
    scale: f64,
}

impl PlaneTransform {
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    /// Surface of the given size at the standard 40 px per unit.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self::new(width, height, PIXELS_PER_UNIT)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    #[inline]
    pub fn to_canvas_x(&self, x: f64) -> f64 {
        self.center_x() + x * self.scale
    }

    #[inline]
    pub fn to_canvas_y(&self, y: f64) -> f64 {
        self.center_y() - y * self.scale
    }

    /// Pixel position of the plane point `(x, y)`.
    #[inline]
    pub fn to_canvas(&self, x: f64, y: f64) -> Point {
        Point::new(self.to_canvas_x(x), self.to_canvas_y(y))
    }

    /// Largest whole unit visible on the real axis either side of the origin.
    pub fn real_tick_extent(&self) -> i64 {
        (self.center_x() / self.scale).floor() as i64
    }

    /// Largest whole unit visible on the imaginary axis either side of the origin.
    pub fn imaginary_tick_extent(&self) -> i64 {
        (self.center_y() / self.scale).floor() as i64
    }
}

impl Default for PlaneTransform {
    fn default() -> Self {
        use complexkit_core::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
        Self::with_size(DEFAULT_CANVAS_WIDTH as f64, DEFAULT_CANVAS_HEIGHT as f64)
    }
}

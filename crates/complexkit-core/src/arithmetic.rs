//! Closed-form complex arithmetic.
//!
//! All functions are pure and total over finite inputs. NaN propagates per
//! IEEE rules; callers validate input before reaching this module.

use std::f64::consts::PI;

/// Rotate the point `(x, y)` counter-clockwise about the origin.
///
/// Negative angles rotate clockwise.
#[inline]
pub fn rotate(x: f64, y: f64, angle_rad: f64) -> (f64, f64) {
    let (sin_t, cos_t) = angle_rad.sin_cos();
    (x * cos_t - y * sin_t, x * sin_t + y * cos_t)
}

/// Product of `(a_re + a_im·i)` and `(b_re + b_im·i)`.
#[inline]
pub fn multiply(a_re: f64, a_im: f64, b_re: f64, b_im: f64) -> (f64, f64) {
    (a_re * b_re - a_im * b_im, a_re * b_im + a_im * b_re)
}

/// Euclidean norm of `(x, y)`.
#[inline]
pub fn magnitude(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

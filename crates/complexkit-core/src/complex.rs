//! Complex number value type.
//!
//! A complex number is an ordered pair of `f64` values. It has no identity
//! beyond its value and is never mutated once computed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

use crate::arithmetic;

/// A complex number `re + im·i`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// The imaginary unit.
    pub const I: Complex = Complex::new(0.0, 1.0);

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Euclidean norm of the pair.
    pub fn magnitude(&self) -> f64 {
        arithmetic::magnitude(self.re, self.im)
    }

    /// Rotate counter-clockwise about the origin by `angle_rad`.
    pub fn rotated(&self, angle_rad: f64) -> Self {
        let (re, im) = arithmetic::rotate(self.re, self.im, angle_rad);
        Self { re, im }
    }

    /// True when either part exceeds `threshold` in absolute value.
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.re.abs() > threshold || self.im.abs() > threshold
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let (re, im) = arithmetic::multiply(self.re, self.im, other.re, other.im);
        Self { re, im }
    }
}

/// Formats as `"a.aa + b.bbi"`.
///
/// The separator is always `+`, so a negative imaginary part prints as
/// `"1.00 + -2.00i"`.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {}i",
            format_fixed(self.re, 2),
            format_fixed(self.im, 2)
        )
    }
}

/// Fractional digits needed to write any `f64` exactly (2^-1074).
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Magnitudes from here on print in exponent form.
const EXPONENT_FORM_THRESHOLD: f64 = 1e21;

/// Fixed-point formatting with `decimals` digits after the point.
///
/// Rounds the exact binary value half away from zero, so `0.125` prints as
/// `0.13` while `1.005` (stored just below the tie) prints as `1.00`.
/// Negative zero prints without a sign. Magnitudes of 1e21 and above print
/// as `1e+21`, and non-finite values as `NaN`, `Infinity` or `-Infinity`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value.abs() >= EXPONENT_FORM_THRESHOLD {
        return format!("{:e}", value).replacen('e', "e+", 1);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(decimals))
        .collect();
    if fraction.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - decimals;
    let mut text = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        text.push('-');
    }
    text.extend(digits[..split].iter().map(|&d| d as char));
    if decimals > 0 {
        text.push('.');
        text.extend(digits[split..].iter().map(|&d| d as char));
    }
    text
}

/// Add one unit in the last place of an ASCII digit string.
fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

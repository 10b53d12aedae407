//! Numeric input fields and lenient number parsing.
//!
//! Parsing mirrors the forgiving behaviour users expect from web forms:
//! leading whitespace is ignored and the longest numeric prefix is taken,
//! so `"12abc"` reads as `12`. Text with no numeric prefix, or whose value
//! is not finite, is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants;
use crate::error::InputError;

/// The five numeric text inputs of the workbench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Real,
    Imaginary,
    Angle,
    MultiplierReal,
    MultiplierImaginary,
}

impl InputField {
    /// All fields in display order.
    pub const ALL: [InputField; 5] = [
        InputField::Real,
        InputField::Imaginary,
        InputField::Angle,
        InputField::MultiplierReal,
        InputField::MultiplierImaginary,
    ];

    /// Text restored into the field on reset.
    pub fn default_text(&self) -> &'static str {
        match self {
            Self::Real => constants::DEFAULT_REAL,
            Self::Imaginary => constants::DEFAULT_IMAGINARY,
            Self::Angle => constants::DEFAULT_ANGLE,
            Self::MultiplierReal => constants::DEFAULT_MULTIPLIER_REAL,
            Self::MultiplierImaginary => constants::DEFAULT_MULTIPLIER_IMAGINARY,
        }
    }

    /// Index into [`InputField::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Real => 0,
            Self::Imaginary => 1,
            Self::Angle => 2,
            Self::MultiplierReal => 3,
            Self::MultiplierImaginary => 4,
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Imaginary => write!(f, "imaginary"),
            Self::Angle => write!(f, "angle"),
            Self::MultiplierReal => write!(f, "multiplier real"),
            Self::MultiplierImaginary => write!(f, "multiplier imaginary"),
        }
    }
}

/// Parse the text of `field` as a finite `f64`.
pub fn parse_number(field: InputField, text: &str) -> Result<f64, InputError> {
    let invalid = || InputError::InvalidNumericInput {
        field,
        value: text.to_string(),
    };

    let trimmed = text.trim_start();
    let len = numeric_prefix_len(trimmed);
    if len == 0 {
        tracing::debug!("No numeric prefix in {} input {:?}", field, text);
        return Err(invalid());
    }

    let value: f64 = trimmed[..len].parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        tracing::debug!("Non-finite {} input {:?}", field, text);
        return Err(invalid());
    }
    Ok(value)
}

/// Length in bytes of the longest prefix of `s` that forms a decimal number
/// (`[+-]digits[.digits][(e|E)[+-]digits]`), or 0 when there is none.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let frac_digits = j - frac_start;
        if mantissa_digits + frac_digits > 0 {
            i = j;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<f64, InputError> {
        parse_number(InputField::Real, text)
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse("1"), Ok(1.0));
        assert_eq!(parse("-2.5"), Ok(-2.5));
        assert_eq!(parse("+3"), Ok(3.0));
        assert_eq!(parse(".5"), Ok(0.5));
        assert_eq!(parse("5."), Ok(5.0));
        assert_eq!(parse("1e2"), Ok(100.0));
        assert_eq!(parse("2.5E-1"), Ok(0.25));
    }

    #[test]
    fn test_leading_whitespace_and_trailing_garbage() {
        assert_eq!(parse("  7"), Ok(7.0));
        assert_eq!(parse("12abc"), Ok(12.0));
        assert_eq!(parse("3.14.15"), Ok(3.14));
        assert_eq!(parse("1e"), Ok(1.0));
        assert_eq!(parse("1e+"), Ok(1.0));
        assert_eq!(parse("45°"), Ok(45.0));
    }

    #[test]
    fn test_rejects_non_numeric() {
        for text in ["", "   ", "abc", "-", ".", "+.", "e5", "NaN", "Infinity"] {
            let err = parse(text).unwrap_err();
            assert_eq!(
                err,
                InputError::InvalidNumericInput {
                    field: InputField::Real,
                    value: text.to_string()
                },
                "input {:?}",
                text
            );
        }
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(parse("1e400").is_err());
    }

    #[test]
    fn test_error_names_field() {
        let err = parse_number(InputField::MultiplierImaginary, "x").unwrap_err();
        assert_eq!(err.field(), Some(InputField::MultiplierImaginary));
    }

    #[test]
    fn test_defaults() {
        let defaults: Vec<_> = InputField::ALL.iter().map(|f| f.default_text()).collect();
        assert_eq!(defaults, vec!["1", "1", "45", "0", "1"]);
        for (i, field) in InputField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }
}

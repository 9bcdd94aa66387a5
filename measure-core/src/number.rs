//! Numeric literal parsing and rounding
//!
//! Quantities are plain `f64`. A literal is an integer, a decimal, or a
//! single fraction `a/b` where either side may be a decimal.

use thiserror::Error;

/// Error type for number parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("More than one fraction separator in: {0}")]
    TooManySeparators(String),

    #[error("Overflow: result too large")]
    Overflow,
}

/// Decimal places conversions are rounded to unless configured otherwise
pub const DEFAULT_PRECISION: u32 = 5;

/// Largest precision honored; anything above is clamped
pub const MAX_PRECISION: u32 = 15;

/// Clamp a requested precision into `0..=MAX_PRECISION`
pub fn clamp_precision(places: u32) -> u32 {
    places.min(MAX_PRECISION)
}

/// Parse a real number: "32", "3.25", "-1.5", ".5"
///
/// Infinities and NaN are rejected.
pub fn parse_real(s: &str) -> Result<f64, NumberError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NumberError::ParseError(s.to_string()));
    }

    let value: f64 = s.parse()
        .map_err(|_| NumberError::ParseError(s.to_string()))?;

    if !value.is_finite() {
        return Err(NumberError::ParseError(s.to_string()));
    }
    Ok(value)
}

/// Parse a quantity literal, allowing one fraction separator
///
/// Supports: "12", "3.25", "12/8", "27/5.4"
pub fn parse_quantity(s: &str) -> Result<f64, NumberError> {
    let s = s.trim();

    match s.matches('/').count() {
        0 => parse_real(s),
        1 => {
            let (num_str, den_str) = s.split_once('/')
                .ok_or_else(|| NumberError::ParseError(s.to_string()))?;

            let num = parse_real(num_str)?;
            let den = parse_real(den_str)?;

            if den == 0.0 {
                return Err(NumberError::DivisionByZero);
            }
            let quotient = num / den;
            if !quotient.is_finite() {
                return Err(NumberError::Overflow);
            }
            Ok(quotient)
        }
        _ => Err(NumberError::TooManySeparators(s.to_string())),
    }
}

/// Round to `places` decimal digits (at most `MAX_PRECISION`)
///
/// Halves round away from zero: up for positive quantities, so
/// `-0.000005` becomes `-0.00001` at 5 places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(clamp_precision(places) as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() { rounded } else { value }
}

//! Measure Core - Fundamental types
//!
//! This crate provides the core types used throughout Measure:
//! - `ConvertError`: Tagged parse/convert failures with literal marker strings
//! - `MeasureError`: Structured errors for plugin callers
//! - `Value`: Runtime values (numbers, text, objects, errors)
//! - number parsing and rounding helpers

mod number;
mod value;
mod error;

pub use number::{NumberError, DEFAULT_PRECISION, MAX_PRECISION, clamp_precision, parse_real, parse_quantity, round_to};
pub use value::Value;
pub use error::{ConvertError, MeasureError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConvertError, MeasureError, Value};
    pub use crate::error::codes;
}

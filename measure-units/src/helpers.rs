//! Argument extraction shared by the plugin functions

use measure_core::{MeasureError, Value, MAX_PRECISION};
use crate::Unit;

/// Extract a Number from a Value, returning error context
pub fn extract_number(value: &Value, func: &str, arg: &str) -> Result<f64, MeasureError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Error(e) => Err(e.clone()),
        other => Err(MeasureError::arg_type(func, arg, "Number", other.type_name())),
    }
}

/// Extract a Text string from a Value
pub fn extract_text<'a>(value: &'a Value, func: &str, arg: &str) -> Result<&'a str, MeasureError> {
    match value {
        Value::Text(s) => Ok(s),
        Value::Error(e) => Err(e.clone()),
        other => Err(MeasureError::arg_type(func, arg, "Text", other.type_name())),
    }
}

/// Extract a unit token and validate it
pub fn extract_unit(value: &Value, func: &str, arg: &str) -> Result<Unit, MeasureError> {
    let token = extract_text(value, func, arg)?;
    Unit::parse(token).map_err(|e| MeasureError::from(e).with_input(token))
}

/// Extract an optional decimal-places argument, falling back to `default`
pub fn extract_places(args: &[Value], index: usize, func: &str, default: u32) -> Result<u32, MeasureError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => {
            let n = extract_number(v, func, "places")?;
            if n.fract() != 0.0 || !(0.0..=MAX_PRECISION as f64).contains(&n) {
                let expected = format!("integer 0-{}", MAX_PRECISION);
                return Err(MeasureError::arg_type(func, "places", &expected, &n.to_string()));
            }
            Ok(n as u32)
        }
    }
}

/// Fail with ARG_COUNT unless at least `expected` arguments were given
pub fn require_args(args: &[Value], expected: usize, func: &str) -> Result<(), MeasureError> {
    if args.len() < expected {
        return Err(MeasureError::arg_count(func, expected, args.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use measure_core::{codes, ConvertError};

    #[test]
    fn test_extract_number() {
        assert_eq!(extract_number(&Value::Number(4.0), "f", "x"), Ok(4.0));
        let err = extract_number(&Value::from("4"), "f", "x").unwrap_err();
        assert_eq!(err.code, codes::ARG_TYPE);
    }

    #[test]
    fn test_extract_text_passes_errors_through() {
        let upstream = MeasureError::from(ConvertError::InvalidNumber);
        let err = extract_text(&Value::Error(upstream.clone()), "f", "x").unwrap_err();
        assert_eq!(err, upstream);
    }

    #[test]
    fn test_extract_unit() {
        assert_eq!(extract_unit(&Value::from("KM"), "f", "unit"), Ok(Unit::Kilometer));
        let err = extract_unit(&Value::from("furlong"), "f", "unit").unwrap_err();
        assert_eq!(err.code, codes::INVALID_UNIT);
        assert_eq!(err.input.as_deref(), Some("furlong"));
    }

    #[test]
    fn test_extract_places() {
        assert_eq!(extract_places(&[], 0, "f", 5), Ok(5));
        assert_eq!(extract_places(&[Value::Null], 0, "f", 5), Ok(5));
        assert_eq!(extract_places(&[Value::Number(2.0)], 0, "f", 5), Ok(2));
        assert!(extract_places(&[Value::Number(2.5)], 0, "f", 5).is_err());
        assert!(extract_places(&[Value::Number(-1.0)], 0, "f", 5).is_err());
    }

    #[test]
    fn test_require_args() {
        assert!(require_args(&[Value::Null], 1, "f").is_ok());
        assert_eq!(require_args(&[], 1, "f").unwrap_err().code, codes::ARG_COUNT);
    }
}

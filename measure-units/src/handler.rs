//! Conversion facade - the operations a request handler calls

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use measure_core::{clamp_precision, ConvertError, Value, DEFAULT_PRECISION};
use tracing::{debug, trace};
use crate::Unit;
use crate::parse;

/// Outcome of converting one raw input such as "3.1mi"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub init_num: f64,
    pub init_unit: Unit,
    pub return_num: f64,
    pub return_unit: Unit,
    pub string: String,
}

impl ConversionResult {
    /// Object value keyed like the serialized form
    pub fn to_value(&self) -> Value {
        let mut obj = HashMap::new();
        obj.insert("initNum".to_string(), Value::Number(self.init_num));
        obj.insert("initUnit".to_string(), Value::from(self.init_unit));
        obj.insert("returnNum".to_string(), Value::Number(self.return_num));
        obj.insert("returnUnit".to_string(), Value::from(self.return_unit));
        obj.insert("string".to_string(), Value::Text(self.string.clone()));
        Value::Object(obj)
    }
}

impl From<Unit> for Value {
    fn from(unit: Unit) -> Self {
        Value::Text(unit.symbol().to_string())
    }
}

/// Stateless converter. Only the rounding precision is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertHandler {
    precision: u32,
}

impl ConvertHandler {
    pub fn new() -> Self {
        Self { precision: DEFAULT_PRECISION }
    }

    /// Decimal places `convert` rounds to, clamped to `MAX_PRECISION`
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = clamp_precision(precision);
        self
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn get_num(&self, input: &str) -> Result<f64, ConvertError> {
        parse::get_num(input)
    }

    pub fn get_unit(&self, input: &str) -> Result<Unit, ConvertError> {
        parse::get_unit(input)
    }

    pub fn get_return_unit(&self, init_unit: &str) -> Result<Unit, ConvertError> {
        Ok(Unit::parse(init_unit)?.paired())
    }

    pub fn spell_out_unit(&self, unit: &str) -> Result<&'static str, ConvertError> {
        Ok(Unit::parse(unit)?.spelled())
    }

    pub fn convert(&self, num: f64, unit: &str) -> Result<f64, ConvertError> {
        let unit = Unit::parse(unit)?;
        let result = self.checked_convert(num, unit)?;
        trace!(num, from = %unit, to = %unit.paired(), result, "converted");
        Ok(result)
    }

    // Quantities near f64::MAX overflow when scaled up
    fn checked_convert(&self, num: f64, unit: Unit) -> Result<f64, ConvertError> {
        let result = unit.convert(num, self.precision);
        if result.is_finite() {
            Ok(result)
        } else {
            debug!(num, unit = %unit, "conversion overflowed");
            Err(ConvertError::InvalidNumber)
        }
    }

    /// "3.1 miles converts to 4.98895 kilometers"
    pub fn get_string(&self, init_num: f64, init_unit: Unit, return_num: f64, return_unit: Unit) -> String {
        format!(
            "{} {} converts to {} {}",
            init_num,
            init_unit.spelled(),
            return_num,
            return_unit.spelled()
        )
    }

    /// Parse and convert a raw input in one step.
    ///
    /// When both parts are bad the error is `InvalidNumberAndUnit`.
    pub fn convert_input(&self, input: &str) -> Result<ConversionResult, ConvertError> {
        let num = self.get_num(input);
        let unit = self.get_unit(input);

        let (init_num, init_unit) = match (num, unit) {
            (Ok(n), Ok(u)) => (n, u),
            (n, u) => {
                return Err(ConvertError::combine(n.is_err(), u.is_err())
                    .unwrap_or(ConvertError::InvalidNumberAndUnit));
            }
        };

        let return_unit = init_unit.paired();
        let return_num = self.checked_convert(init_num, init_unit)?;
        let string = self.get_string(init_num, init_unit, return_num, return_unit);
        trace!(input, %string, "converted input");

        Ok(ConversionResult {
            init_num,
            init_unit,
            return_num,
            return_unit,
            string,
        })
    }

    /// Map a tagged result to the marker-string boundary: the value on
    /// success, the literal `"invalid number"`/`"invalid unit"` text on
    /// failure.
    pub fn boundary<T: Into<Value>>(result: Result<T, ConvertError>) -> Value {
        match result {
            Ok(v) => v.into(),
            Err(e) => Value::Text(e.as_str().to_string()),
        }
    }
}

impl Default for ConvertHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use measure_core::MAX_PRECISION;
    use crate::{GAL_TO_L, LBS_TO_KG};

    fn approx(actual: f64, expected: f64, tolerance: f64) -> bool {
        (actual - expected).abs() <= tolerance
    }

    #[test]
    fn test_get_return_unit() {
        let h = ConvertHandler::new();
        let inputs = ["gal", "L", "mi", "km", "lbs", "kg"];
        let expected = ["L", "gal", "km", "mi", "kg", "lbs"];
        for (input, want) in inputs.iter().zip(expected.iter()) {
            assert_eq!(h.get_return_unit(input).unwrap().symbol(), *want);
        }
    }

    #[test]
    fn test_get_return_unit_is_involutive() {
        let h = ConvertHandler::new();
        for input in ["GAL", "l", "Mi", "KM", "lbs", "kG"] {
            let there = h.get_return_unit(input).unwrap();
            let back = h.get_return_unit(there.symbol()).unwrap();
            assert_eq!(back, h.get_unit(input).unwrap());
        }
    }

    #[test]
    fn test_spell_out_unit() {
        let h = ConvertHandler::new();
        let inputs = ["gal", "l", "mi", "km", "lbs", "kg", "GAL", "L", "MI", "KM", "LBS", "KG"];
        let expected = [
            "gallons", "litres", "miles", "kilometers", "pounds", "kilograms",
            "gallons", "litres", "miles", "kilometers", "pounds", "kilograms",
        ];
        for (input, want) in inputs.iter().zip(expected.iter()) {
            assert_eq!(h.spell_out_unit(input), Ok(*want));
        }
    }

    #[test]
    fn test_convert_reference_values() {
        let h = ConvertHandler::new();
        let cases = [
            ("gal", 18.9271),
            ("L", 1.32086),
            ("mi", 8.04672),
            ("km", 3.10686),
            ("lbs", 2.26796),
            ("kg", 11.0231),
        ];
        for (unit, expected) in cases {
            let result = h.convert(5.0, unit).unwrap();
            assert!(approx(result, expected, 0.1), "{} -> {}", unit, result);
        }
    }

    #[test]
    fn test_convert_round_trip() {
        let h = ConvertHandler::new();
        for unit in Unit::ALL {
            let x = 42.0;
            let there = h.convert(x, unit.symbol()).unwrap();
            let back = h.convert(there, unit.paired().symbol()).unwrap();
            assert!(((back - x) / x).abs() <= 1e-3);
        }
    }

    #[test]
    fn test_convert_precision() {
        let h = ConvertHandler::new().with_precision(2);
        assert_eq!(h.precision(), 2);
        assert_eq!(h.convert(5.0, "gal"), Ok(18.93));
        assert_eq!(ConvertHandler::default().precision(), 5);
    }

    #[test]
    fn test_precision_is_clamped() {
        let h = ConvertHandler::new().with_precision(u32::MAX);
        assert_eq!(h.precision(), MAX_PRECISION);
        assert_eq!(h.convert(5.0, "gal").unwrap(), 5.0 * GAL_TO_L);
        assert_eq!(h.convert(1.5, "kg").unwrap(), 1.5 / LBS_TO_KG);
    }

    #[test]
    fn test_overflowing_quantity_is_invalid_number() {
        let h = ConvertHandler::new();
        assert_eq!(h.convert(f64::MAX, "gal"), Err(ConvertError::InvalidNumber));
        assert!(h.convert(f64::MAX, "L").unwrap().is_finite());

        let input = format!("1{}gal", "0".repeat(308));
        assert_eq!(h.convert_input(&input), Err(ConvertError::InvalidNumber));
        let input = format!("1{}/0.{}1gal", "0".repeat(300), "0".repeat(300));
        assert_eq!(h.convert_input(&input), Err(ConvertError::InvalidNumber));
    }

    #[test]
    fn test_unvalidated_units_are_rejected() {
        let h = ConvertHandler::new();
        assert_eq!(h.convert(1.0, "stone"), Err(ConvertError::InvalidUnit));
        assert_eq!(h.get_return_unit("pints"), Err(ConvertError::InvalidUnit));
        assert_eq!(h.spell_out_unit(""), Err(ConvertError::InvalidUnit));
    }

    #[test]
    fn test_get_string() {
        let h = ConvertHandler::new();
        let s = h.get_string(3.1, Unit::Mile, 4.98895, Unit::Kilometer);
        assert_eq!(s, "3.1 miles converts to 4.98895 kilometers");

        let s = h.get_string(5.0, Unit::Gallon, 18.92705, Unit::Litre);
        assert_eq!(s, "5 gallons converts to 18.92705 litres");
    }

    #[test]
    fn test_convert_input() {
        let h = ConvertHandler::new();
        let result = h.convert_input("10L").unwrap();
        assert_eq!(result.init_num, 10.0);
        assert_eq!(result.init_unit, Unit::Litre);
        assert_eq!(result.return_unit, Unit::Gallon);
        assert_eq!(result.return_num, 2.64172);
        assert_eq!(result.string, "10 litres converts to 2.64172 gallons");
    }

    #[test]
    fn test_convert_input_errors() {
        let h = ConvertHandler::new();
        assert_eq!(h.convert_input("32g"), Err(ConvertError::InvalidUnit));
        assert_eq!(h.convert_input("3/7.2/4kg"), Err(ConvertError::InvalidNumber));
        assert_eq!(h.convert_input("3/7.2/4kilomegagram"), Err(ConvertError::InvalidNumberAndUnit));
    }

    #[test]
    fn test_convert_input_without_number() {
        let h = ConvertHandler::new();
        let result = h.convert_input("kg").unwrap();
        assert_eq!(result.init_num, 1.0);
        assert_eq!(result.return_unit, Unit::Pound);
        assert_eq!(result.return_num, 2.20462);
    }

    #[test]
    fn test_result_serialization() {
        let h = ConvertHandler::new();
        let result = h.convert_input("1gal").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({
            "initNum": 1.0,
            "initUnit": "gal",
            "returnNum": 3.78541,
            "returnUnit": "L",
            "string": "1 gallons converts to 3.78541 litres",
        }));

        let back: ConversionResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_to_value() {
        let h = ConvertHandler::new();
        let value = h.convert_input("5mi").unwrap().to_value();
        assert_eq!(value.get("initUnit"), Value::from("mi"));
        assert_eq!(value.get("returnUnit"), Value::from("km"));
        assert_eq!(value.get("returnNum"), Value::Number(8.0467));
    }

    #[test]
    fn test_boundary_markers() {
        let h = ConvertHandler::new();
        assert_eq!(ConvertHandler::boundary(h.get_num("3/7.2/4L")), Value::from("invalid number"));
        assert_eq!(ConvertHandler::boundary(h.get_unit("12.5 pounds")), Value::from("invalid unit"));
        assert_eq!(ConvertHandler::boundary(h.get_num("32L")), Value::Number(32.0));
        assert_eq!(ConvertHandler::boundary(h.get_unit("l")), Value::from("L"));
        assert_eq!(ConvertHandler::boundary(h.spell_out_unit("GAL")), Value::from("gallons"));
    }
}

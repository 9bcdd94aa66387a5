//! Input scanning - split "3.1mi" or "1/2 gal" into quantity and unit

use measure_core::{parse_quantity, ConvertError};
use tracing::{debug, trace};
use crate::Unit;

/// Scanner position relative to the number/unit boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    InNumber,
    InUnit,
}

/// Raw input split once at the first letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    /// Everything before the first letter, trimmed
    pub number: &'a str,
    /// The first letter and everything after it, trimmed
    pub unit: &'a str,
}

impl<'a> ParsedInput<'a> {
    pub fn scan(input: &'a str) -> Self {
        let mut state = ScanState::InNumber;
        let mut split = input.len();

        for (i, c) in input.char_indices() {
            match state {
                ScanState::InNumber => {
                    if c.is_alphabetic() {
                        split = i;
                        state = ScanState::InUnit;
                    }
                }
                ScanState::InUnit => break,
            }
        }

        ParsedInput {
            number: input[..split].trim(),
            unit: input[split..].trim(),
        }
    }
}

/// Extract the quantity from an input like "3.1mi"
///
/// - no numeric part ("kg") means 1
/// - one `/` is a fraction, either side may be a decimal ("27/5.4mi" → 5)
/// - more than one `/`, a zero denominator, or anything that is not a real
///   number is `InvalidNumber`
pub fn get_num(input: &str) -> Result<f64, ConvertError> {
    let parsed = ParsedInput::scan(input);

    if parsed.number.is_empty() {
        trace!(input, "no quantity, defaulting to 1");
        return Ok(1.0);
    }

    match parse_quantity(parsed.number) {
        Ok(n) => {
            trace!(input, value = n, "parsed quantity");
            Ok(n)
        }
        Err(e) => {
            debug!(input, number = parsed.number, error = %e, "rejected quantity");
            Err(ConvertError::InvalidNumber)
        }
    }
}

/// Extract and canonicalize the unit from an input like "3.1MI"
pub fn get_unit(input: &str) -> Result<Unit, ConvertError> {
    let parsed = ParsedInput::scan(input);

    Unit::parse(parsed.unit).map_err(|e| {
        debug!(input, unit = parsed.unit, "rejected unit");
        e
    })
}

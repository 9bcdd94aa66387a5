//! Evaluation Context

use measure_core::{clamp_precision, DEFAULT_PRECISION};

/// Evaluation context passed to plugins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalContext {
    /// Decimal places conversion results are rounded to
    pub precision: u32,
}

impl EvalContext {
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }

    /// Builder: set rounding precision, at most `MAX_PRECISION`
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = clamp_precision(precision);
        self
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

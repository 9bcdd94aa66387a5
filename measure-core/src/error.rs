//! Conversion errors
//!
//! Malformed input never crashes the converter. Failures come back as a
//! tagged `ConvertError`, whose display form is the literal marker string
//! callers compare against (`"invalid number"`, `"invalid unit"`). The
//! structured `MeasureError` carries the same failures, plus argument and
//! lookup errors, through the plugin layer.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const INVALID_UNIT: &str = "INVALID_UNIT";
    pub const INVALID_NUMBER_AND_UNIT: &str = "INVALID_NUMBER_AND_UNIT";
    pub const UNDEFINED_FUNC: &str = "UNDEFINED_FUNC";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const ARG_TYPE: &str = "ARG_TYPE";
}

/// Tagged failure of a parse or conversion step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConvertError {
    #[error("invalid number")]
    InvalidNumber,

    #[error("invalid unit")]
    InvalidUnit,

    #[error("invalid number and unit")]
    InvalidNumberAndUnit,
}

impl ConvertError {
    /// The literal marker string seen by callers
    pub fn as_str(&self) -> &'static str {
        match self {
            ConvertError::InvalidNumber => "invalid number",
            ConvertError::InvalidUnit => "invalid unit",
            ConvertError::InvalidNumberAndUnit => "invalid number and unit",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::InvalidNumber => codes::INVALID_NUMBER,
            ConvertError::InvalidUnit => codes::INVALID_UNIT,
            ConvertError::InvalidNumberAndUnit => codes::INVALID_NUMBER_AND_UNIT,
        }
    }

    /// Recognize a marker string coming back from a caller
    pub fn from_marker(s: &str) -> Option<Self> {
        match s {
            "invalid number" => Some(ConvertError::InvalidNumber),
            "invalid unit" => Some(ConvertError::InvalidUnit),
            "invalid number and unit" => Some(ConvertError::InvalidNumberAndUnit),
            _ => None,
        }
    }

    /// Merge the outcome of the number and unit steps of one input
    pub fn combine(number_failed: bool, unit_failed: bool) -> Option<Self> {
        match (number_failed, unit_failed) {
            (true, true) => Some(ConvertError::InvalidNumberAndUnit),
            (true, false) => Some(ConvertError::InvalidNumber),
            (false, true) => Some(ConvertError::InvalidUnit),
            (false, false) => None,
        }
    }
}

impl Serialize for ConvertError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ConvertError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ConvertError::from_marker(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown error marker: {}", s)))
    }
}

/// Structured error for plugin callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Raw input that was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl MeasureError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            input: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: record the rejected input
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn undefined_func(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FUNC, format!("Unknown function: {}", name))
    }

    pub fn arg_count(func: &str, expected: usize, got: usize) -> Self {
        Self::new(codes::ARG_COUNT,
            format!("{}() expects {} arguments, got {}", func, expected, got))
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(codes::ARG_TYPE,
            format!("{}() argument '{}': expected {}, got {}", func, arg, expected, got))
    }
}

impl From<ConvertError> for MeasureError {
    fn from(err: ConvertError) -> Self {
        let suggestion = match err {
            ConvertError::InvalidNumber => "Use a whole number, decimal, or single fraction like 3/4",
            ConvertError::InvalidUnit => "Use one of: gal, L, mi, km, lbs, kg",
            ConvertError::InvalidNumberAndUnit => "Check both the number and the unit",
        };
        Self::new(err.code(), err.as_str()).with_suggestion(suggestion)
    }
}

impl std::fmt::Display for MeasureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for MeasureError {}

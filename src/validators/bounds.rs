//! Numeric bound validators
//!
//! Thresholds apply to the numeric value for numbers and to the length for
//! strings and sequences:
//!
//! - [`Min`] / [`Max`] measure strings by character count and numbers by
//!   value, unconditionally.
//! - [`Greater`] / [`Less`] first try to read the value as a number (a
//!   numeric string like `"15"` compares numerically) and fall back to
//!   length for everything else.
//!
//! String length is measured in Unicode scalar values.

use serde_json::Value;

use crate::foundation::ValidationError;
use crate::validators::types::parse_finite;

/// Measures a value for `min`/`max`: numbers by value, strings by
/// character count, sequences by element count.
fn measured(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => Some(s.chars().count() as f64),
        Value::Array(items) => Some(items.len() as f64),
        _ => None,
    }
}

/// Measures a value for `greater`/`less`: anything that reads as a finite
/// number compares numerically, the rest by length.
fn numeric_or_measured(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => parse_finite(s).or_else(|| Some(s.chars().count() as f64)),
        other => measured(other),
    }
}

crate::validator! {
    /// Validates that a value measures at least `limit`.
    #[derive(Copy, PartialEq)]
    pub Min { limit: f64 } for Value;
    rule(self, input) { measured(input).is_some_and(|m| m >= self.limit) }
    error(self, input) {
        ValidationError::new("min", format!("Value must be at least {}", self.limit))
            .with_param("limit", self.limit.to_string())
    }
    fn min(limit: f64);
}

crate::validator! {
    /// Validates that a value measures at most `limit`.
    #[derive(Copy, PartialEq)]
    pub Max { limit: f64 } for Value;
    rule(self, input) { measured(input).is_some_and(|m| m <= self.limit) }
    error(self, input) {
        ValidationError::new("max", format!("Value must be at most {}", self.limit))
            .with_param("limit", self.limit.to_string())
    }
    fn max(limit: f64);
}

crate::validator! {
    /// Validates that a value is strictly greater than `limit`.
    #[derive(Copy, PartialEq)]
    pub Greater { limit: f64 } for Value;
    rule(self, input) { numeric_or_measured(input).is_some_and(|m| m > self.limit) }
    error(self, input) {
        ValidationError::new("greater", format!("Value must be greater than {}", self.limit))
            .with_param("limit", self.limit.to_string())
    }
    fn greater(limit: f64);
}

crate::validator! {
    /// Validates that a value is strictly less than `limit`.
    #[derive(Copy, PartialEq)]
    pub Less { limit: f64 } for Value;
    rule(self, input) { numeric_or_measured(input).is_some_and(|m| m < self.limit) }
    error(self, input) {
        ValidationError::new("less", format!("Value must be less than {}", self.limit))
            .with_param("limit", self.limit.to_string())
    }
    fn less(limit: f64);
}

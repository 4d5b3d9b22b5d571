//! Type-shape validators
//!
//! Validators for checking the shape of a dynamic value: number, sequence,
//! boolean. `number()` follows parse semantics rather than strict typing:
//! a string holding a finite number counts as numeric.

use serde_json::Value;

use crate::foundation::ValidationError;

/// Parses a string as a finite `f64`, trimming surrounding whitespace.
///
/// Rejects the empty string, `NaN`, and infinities, so `"12.5"` and
/// `" 3 "` parse while `""`, `"inf"`, and `"12px"` do not.
pub(crate) fn parse_finite(s: &str) -> Option<f64> {
    let n: f64 = s.trim().parse().ok()?;
    n.is_finite().then_some(n)
}

crate::validator! {
    /// Validates that a value is numeric.
    ///
    /// Passes for JSON numbers and for strings that parse as a finite
    /// number. Everything else fails.
    pub IsNumber for Value;
    rule(input) {
        match input {
            Value::Number(_) => true,
            Value::String(s) => parse_finite(s).is_some(),
            _ => false,
        }
    }
    error(input) { ValidationError::new("number", "Value must be a number") }
    fn number();
}

crate::validator! {
    /// Validates that a value is a sequence.
    pub IsArray for Value;
    rule(input) { input.is_array() }
    error(input) { ValidationError::new("array", "Value must be a sequence") }
    fn array();
}

crate::validator! {
    /// Validates that a value is exactly a boolean.
    pub IsBoolean for Value;
    rule(input) { input.is_boolean() }
    error(input) { ValidationError::new("boolean", "Value must be a boolean") }
    fn boolean();
}

//! Equality and membership validators
//!
//! Validators comparing a value to a fixed target, a set of alternatives, or
//! checking containment. Numbers compare by numeric value, so `0` and `0.0`
//! are equal.

use serde_json::Value;

use crate::foundation::ValidationError;

/// Compares two values, treating all numbers as f64.
///
/// `serde_json` distinguishes integer and float representations in `==`; for
/// validation purposes `1` and `1.0` must be the same value.
pub(crate) fn value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

crate::validator! {
    /// Validates that a value equals a fixed target.
    pub Equals { target: Value } for Value;
    rule(self, input) { value_eq(input, &self.target) }
    error(self, input) {
        ValidationError::new("equals", "Value does not match the expected value")
            .with_param("expected", self.target.to_string())
    }
    fn equals(target: Value);
}

crate::validator! {
    /// Validates that a value is one of a set of alternatives.
    pub OneOf { choices: Vec<Value> } for Value;
    rule(self, input) { self.choices.iter().any(|choice| value_eq(input, choice)) }
    error(self, input) {
        ValidationError::new("one_of", "Value is not one of the allowed values")
    }
    fn one_of(choices: Vec<Value>);
}

crate::validator! {
    /// Validates containment.
    ///
    /// For strings, the item must be a string and a substring of the input.
    /// For sequences, the item must appear as an element. Other input types
    /// fail.
    pub Contains { item: Value } for Value;
    rule(self, input) {
        match input {
            Value::String(s) => self.item.as_str().is_some_and(|needle| s.contains(needle)),
            Value::Array(elements) => elements.iter().any(|element| value_eq(element, &self.item)),
            _ => false,
        }
    }
    error(self, input) {
        ValidationError::new("contains", "Value does not contain the expected item")
            .with_param("item", self.item.to_string())
    }
    fn contains(item: Value);
}

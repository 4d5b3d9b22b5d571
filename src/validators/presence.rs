//! Presence validator
//!
//! [`Required`] decides whether a value counts as "present": nulls are
//! absent, strings must have non-whitespace content, sequences must be
//! non-empty. Other scalars (numbers, booleans) are always present, so
//! `0` and `false` satisfy a required field.

use serde_json::Value;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is present and non-empty.
    pub Required for Value;
    rule(input) {
        match input {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => true,
        }
    }
    error(input) { ValidationError::new("required", "Value is required and cannot be empty") }
    fn required();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::json;

    #[test]
    fn null_is_absent() {
        assert!(required().validate(&json!(null)).is_err());
    }

    #[test]
    fn strings_trim_before_checking() {
        assert!(required().validate(&json!("hello")).is_ok());
        assert!(required().validate(&json!("")).is_err());
        assert!(required().validate(&json!("   ")).is_err());
    }

    #[test]
    fn sequences_must_be_non_empty() {
        assert!(required().validate(&json!([1])).is_ok());
        assert!(required().validate(&json!([])).is_err());
    }

    #[test]
    fn falsy_scalars_are_present() {
        assert!(required().validate(&json!(0)).is_ok());
        assert!(required().validate(&json!(false)).is_ok());
    }
}

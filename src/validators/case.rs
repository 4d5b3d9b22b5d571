//! Letter case validators
//!
//! Validators for checking that a string holds a given letter case. A string
//! with no cased characters at all passes both, since converting it changes
//! nothing.

use serde_json::Value;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is entirely lowercase.
    ///
    /// Non-string values fail.
    pub Lowercase for Value;
    rule(input) { input.as_str().is_some_and(|s| s.to_lowercase() == *s) }
    error(input) { ValidationError::new("lowercase", "Value must be lowercase") }
    fn lowercase();
}

crate::validator! {
    /// Validates that a string is entirely uppercase.
    ///
    /// Non-string values fail.
    pub Uppercase for Value;
    rule(input) { input.as_str().is_some_and(|s| s.to_uppercase() == *s) }
    error(input) { ValidationError::new("uppercase", "Value must be uppercase") }
    fn uppercase();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::json;

    #[test]
    fn lowercase_strings() {
        let validator = lowercase();
        assert!(validator.validate(&json!("hello world")).is_ok());
        assert!(validator.validate(&json!("Hello")).is_err());
        assert!(validator.validate(&json!("HELLO")).is_err());
    }

    #[test]
    fn uppercase_strings() {
        let validator = uppercase();
        assert!(validator.validate(&json!("HELLO WORLD")).is_ok());
        assert!(validator.validate(&json!("Hello")).is_err());
        assert!(validator.validate(&json!("hello")).is_err());
    }

    #[test]
    fn caseless_strings_pass_both() {
        assert!(lowercase().validate(&json!("123-456")).is_ok());
        assert!(uppercase().validate(&json!("123-456")).is_ok());
        assert!(lowercase().validate(&json!("")).is_ok());
    }

    #[test]
    fn non_strings_fail() {
        assert!(lowercase().validate(&json!(42)).is_err());
        assert!(uppercase().validate(&json!(null)).is_err());
        assert!(uppercase().validate(&json!([])).is_err());
    }

    #[test]
    fn unicode_case() {
        assert!(lowercase().validate(&json!("straße")).is_ok());
        assert!(uppercase().validate(&json!("ÅNGSTRÖM")).is_ok());
        assert!(lowercase().validate(&json!("Straße")).is_err());
    }
}

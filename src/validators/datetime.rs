//! Date and time validators
//!
//! Validators for checking that values represent calendar dates, either in a
//! caller-supplied strftime format or in a small set of common formats.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

/// Formats tried in order when no explicit format is given.
const FALLBACK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d",
];

// ============================================================================
// DATE VALIDATOR
// ============================================================================

/// Validates that a value parses as a date.
///
/// Strings are checked against the configured strftime format, or against
/// RFC 3339 plus a handful of common formats when none is set. Numbers are
/// treated as Unix timestamps in milliseconds.
#[derive(Debug, Clone, Default)]
pub struct ParsesAsDate {
    /// Optional strftime format the value must match exactly.
    pub format: Option<String>,
}

impl ParsesAsDate {
    /// Creates a validator accepting any recognized date format.
    #[must_use]
    pub fn new() -> Self {
        Self { format: None }
    }

    /// Creates a validator requiring a specific strftime format.
    #[must_use]
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
        }
    }

    fn is_date(&self, input: &Value) -> bool {
        match input {
            Value::String(s) => match &self.format {
                Some(fmt) => {
                    NaiveDateTime::parse_from_str(s, fmt).is_ok()
                        || NaiveDate::parse_from_str(s, fmt).is_ok()
                }
                None => {
                    DateTime::parse_from_rfc3339(s).is_ok()
                        || FALLBACK_FORMATS.iter().any(|fmt| {
                            NaiveDateTime::parse_from_str(s, fmt).is_ok()
                                || NaiveDate::parse_from_str(s, fmt).is_ok()
                        })
                }
            },
            Value::Number(n) => n
                .as_i64()
                .is_some_and(|ms| DateTime::from_timestamp_millis(ms).is_some()),
            _ => false,
        }
    }
}

impl Validate for ParsesAsDate {
    type Input = Value;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.is_date(input) {
            Ok(())
        } else {
            let mut error = ValidationError::new("date", "Value must be a valid date");
            if let Some(fmt) = &self.format {
                error = error.with_param("format", fmt.clone());
            }
            Err(error)
        }
    }
}

/// Creates a date validator accepting any recognized format.
#[must_use]
pub fn date() -> ParsesAsDate {
    ParsesAsDate::new()
}

/// Creates a date validator requiring a specific strftime format.
#[must_use]
pub fn date_format(format: impl Into<String>) -> ParsesAsDate {
    ParsesAsDate::with_format(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_rfc3339() {
        let validator = date();
        assert!(validator.validate(&json!("2024-06-01T12:30:00Z")).is_ok());
        assert!(validator.validate(&json!("2024-06-01T12:30:00+02:00")).is_ok());
    }

    #[test]
    fn accepts_common_formats() {
        let validator = date();
        assert!(validator.validate(&json!("2024-06-01")).is_ok());
        assert!(validator.validate(&json!("2024-06-01 12:30:00")).is_ok());
        assert!(validator.validate(&json!("2024-06-01T12:30:00.123")).is_ok());
    }

    #[test]
    fn accepts_millisecond_timestamps() {
        let validator = date();
        assert!(validator.validate(&json!(1717243800000i64)).is_ok());
        assert!(validator.validate(&json!(0)).is_ok());
    }

    #[test]
    fn rejects_garbage() {
        let validator = date();
        assert!(validator.validate(&json!("not a date")).is_err());
        assert!(validator.validate(&json!("2024-13-45")).is_err());
        assert!(validator.validate(&json!(true)).is_err());
        assert!(validator.validate(&json!(null)).is_err());
    }

    #[test]
    fn explicit_format_is_enforced() {
        let validator = date_format("%d/%m/%Y");
        assert!(validator.validate(&json!("01/06/2024")).is_ok());
        assert!(validator.validate(&json!("2024-06-01")).is_err());

        let err = validator.validate(&json!("nope")).unwrap_err();
        assert_eq!(err.code, "date");
        assert_eq!(err.param("format"), Some("%d/%m/%Y"));
    }

    #[test]
    fn explicit_datetime_format() {
        let validator = date_format("%Y-%m-%d %H:%M");
        assert!(validator.validate(&json!("2024-06-01 12:30")).is_ok());
        assert!(validator.validate(&json!("2024-06-01")).is_err());
    }
}

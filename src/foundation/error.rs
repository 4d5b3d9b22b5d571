//! Error types for validation failures
//!
//! This module provides a structured error type that carries an error code
//! (the name of the violated rule), a human-readable message, an optional
//! field path, and parameterized details.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// The `code` names the violated rule (`"min"`, `"email"`, `"depend"`, ...),
/// which is what the rule evaluator's diagnostics are built on: the first
/// constraint to fail determines the code.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::foundation::ValidationError;
///
/// let error = ValidationError::new("min", "Value must be at least 4")
///     .with_field("username")
///     .with_param("limit", "4");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Error code naming the violated rule.
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Optional field name for schema-level validation.
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the message, as ordered key-value pairs.
    ///
    /// Example: `[("limit", "4"), ("actual", "3")]`
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors.
///
/// Used when several fields of a schema can each fail independently.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_error() {
        let error = ValidationError::new("min", "Too small");
        assert_eq!(error.code, "min");
        assert_eq!(error.message, "Too small");
    }

    #[test]
    fn error_with_field() {
        let error = ValidationError::new("required", "Field is required").with_field("email");
        assert_eq!(error.field.as_deref(), Some("email"));
    }

    #[test]
    fn error_with_params() {
        let error = ValidationError::new("min", "Too small")
            .with_param("limit", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("limit"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn zero_alloc_static_strings() {
        let error = ValidationError::new("required", "This field is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn error_collection() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("one", "First error"));
        errors.add(ValidationError::new("two", "Second error"));

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());
    }

    #[test]
    fn display_includes_field_and_params() {
        let error = ValidationError::new("min", "Too small")
            .with_field("age")
            .with_param("limit", "18");
        assert_eq!(error.to_string(), "[age] min: Too small (limit=18)");
    }
}

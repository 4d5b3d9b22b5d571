//! CODE combinator - relabeled error diagnostics
//!
//! Replaces the error code (and optionally the message) a validator
//! produces. The rule evaluator wraps generic validators in [`WithCode`]
//! so a violated constraint is always reported under its own name: the
//! `valid` constraint is an [`Equals`](crate::validators::Equals) check
//! underneath, but its failure must read `"valid"`, not `"equals"`.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error code of a validator, keeping its input semantics.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::prelude::*;
/// use serde_json::json;
///
/// let validator = with_code(equals(json!("yes")), "valid");
/// let err = validator.validate(&json!("no")).unwrap_err();
/// assert_eq!(err.code, "valid");
/// ```
#[derive(Debug, Clone)]
pub struct WithCode<V> {
    inner: V,
    code: Cow<'static, str>,
    message: Option<Cow<'static, str>>,
}

impl<V> WithCode<V> {
    /// Creates a new `WithCode` combinator with a replacement code.
    pub fn new(inner: V, code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            code: code.into(),
            message: None,
        }
    }

    /// Also replaces the error message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the replacement code.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl<V> Validate for WithCode<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|mut error| {
            error.code = self.code.clone();
            if let Some(message) = &self.message {
                error.message = message.clone();
            }
            error
        })
    }
}

/// Creates a `WithCode` combinator from a validator and a code.
pub fn with_code<V: Validate>(validator: V, code: impl Into<Cow<'static, str>>) -> WithCode<V> {
    WithCode::new(validator, code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::not;
    use crate::validators::equals;
    use serde_json::json;

    #[test]
    fn relabels_code() {
        let validator = with_code(equals(json!(1)), "valid");
        let err = validator.validate(&json!(2)).unwrap_err();
        assert_eq!(err.code, "valid");
    }

    #[test]
    fn keeps_inner_message_by_default() {
        let validator = with_code(equals(json!(1)), "valid");
        let err = validator.validate(&json!(2)).unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[test]
    fn replaces_message_when_asked() {
        let validator =
            with_code(not(equals(json!(1))), "invalid").with_message("Value is forbidden");
        let err = validator.validate(&json!(1)).unwrap_err();
        assert_eq!(err.code, "invalid");
        assert_eq!(err.message, "Value is forbidden");
    }

    #[test]
    fn passes_through_success() {
        let validator = with_code(equals(json!(1)), "valid");
        assert!(validator.validate(&json!(1)).is_ok());
    }
}

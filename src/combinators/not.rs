//! NOT combinator - logical negation of validators
//!
//! Provides the [`Not`] combinator which inverts the result of a validator:
//! it succeeds when the inner validator fails and vice versa. The rule
//! evaluator uses it to express exclusion constraints (`invalid`, `is_not`,
//! `contains_not`).

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator with logical NOT.
///
/// - If the inner validator succeeds, `Not` fails
/// - If the inner validator fails, `Not` succeeds
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::prelude::*;
/// use serde_json::json;
///
/// // Value must not be one of the blocked names
/// let validator = not(one_of(vec![json!("admin"), json!("root")]));
/// assert!(validator.validate(&json!("alice")).is_ok());
/// assert!(validator.validate(&json!("admin")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Not<V> {
    /// The inner validator to invert.
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Value matches a condition it must not match",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V: Validate>(validator: V) -> Not<V> {
    Not::new(validator)
}

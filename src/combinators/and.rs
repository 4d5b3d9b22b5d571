//! AND combinator - logical conjunction of validators
//!
//! Combines two validators with logical AND semantics - both validators
//! must pass for the combined validator to succeed.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// Errors are returned from the first failing validator.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::prelude::*;
/// use serde_json::json;
///
/// let validator = min(5.0).and(max(10.0));
/// assert!(validator.validate(&json!(7)).is_ok());
/// assert!(validator.validate(&json!(3)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{max, min};
    use serde_json::json;

    #[test]
    fn and_passes_when_both_pass() {
        let validator = and(min(3.0), max(10.0));
        assert!(validator.validate(&json!(5)).is_ok());
    }

    #[test]
    fn and_fails_on_left() {
        let validator = min(3.0).and(max(10.0));
        let err = validator.validate(&json!(1)).unwrap_err();
        assert_eq!(err.code, "min");
    }

    #[test]
    fn and_fails_on_right() {
        let validator = min(3.0).and(max(10.0));
        let err = validator.validate(&json!(99)).unwrap_err();
        assert_eq!(err.code, "max");
    }
}

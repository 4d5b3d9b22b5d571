//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must
//! implement.

use crate::combinators::{And, Not};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// This trait is generic over the input type, allowing for compile-time
/// type safety while maintaining flexibility. All validators return
/// `Result<(), ValidationError>` for a consistent API.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::foundation::{Validate, ValidationError};
/// use serde_json::Value;
///
/// struct NotNull;
///
/// impl Validate for NotNull {
///     type Input = Value;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.is_null() {
///             Err(ValidationError::new("not_null", "Value cannot be null"))
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` if validation succeeds, `Err(ValidationError)`
    /// if it fails. Validators never panic on unexpected input types;
    /// a type mismatch is a failure like any other.
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;

    /// Returns the name of this validator.
    ///
    /// Used for debugging and error messages.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// [`Validate`], providing a fluent API for composing validators.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::prelude::*;
///
/// let validator = min(3.0).and(max(20.0));
/// let forbidden = contains(json!("admin")).not();
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass for the combined validator to succeed.
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    ///
    /// The combined validator succeeds if the original validator fails,
    /// and vice versa.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

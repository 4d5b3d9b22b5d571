//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Validators are generic over their input type and return
//! `Result<(), ValidationError>`: invalidity is an `Err`, never a panic.
//! Composition happens through [`ValidateExt`] and the combinators in
//! [`crate::combinators`].

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

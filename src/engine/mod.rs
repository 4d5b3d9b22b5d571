//! Rule evaluation engine
//!
//! A [`Constraints`] value describes every rule a field must satisfy;
//! [`check`] and [`evaluate`] run those rules in a fixed order against a
//! dynamic value.

pub mod constraints;
pub mod evaluator;

pub use constraints::Constraints;
pub use evaluator::{check, evaluate, is_empty_value};

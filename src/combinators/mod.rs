//! Logical composition of validators
//!
//! Combinators wrap one or more validators to build larger ones:
//!
//! - [`And`] - both validators must pass (short-circuits on first failure)
//! - [`Not`] - inverts a validator; the rule evaluator's negative-membership
//!   group (`invalid`, `is_not`, `contains_not`) is built on it
//! - [`WithCode`] - relabels the error a validator produces, so diagnostics
//!   always report the violated constraint under its own name

pub mod and;
pub mod code;
pub mod not;

pub use and::{And, and};
pub use code::{WithCode, with_code};
pub use not::{Not, not};

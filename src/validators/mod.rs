//! Built-in validators: the rule-predicate library
//!
//! A fixed catalog of named, stateless boolean predicates over
//! [`serde_json::Value`]. Each predicate is pure: invalidity is an `Err`
//! return, never a panic, and each completes in time bounded by the input
//! size.
//!
//! # Categories
//!
//! - **Bounds**: [`Min`], [`Max`], [`Greater`], [`Less`]
//! - **Presence**: [`Required`]
//! - **Types**: [`IsNumber`], [`IsArray`], [`IsBoolean`]
//! - **Content**: [`Email`], [`MatchesRegex`]
//! - **Dates**: [`ParsesAsDate`]
//! - **Case**: [`Uppercase`], [`Lowercase`]
//! - **Membership**: [`Equals`], [`OneOf`], [`Contains`]
//!
//! Exclusion predicates (`invalid`, `is_not`, `contains_not`) are the same
//! validators wrapped in [`Not`](crate::combinators::Not).
//!
//! # Examples
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//! use serde_json::json;
//!
//! assert!(min(4.0).validate(&json!("abcd")).is_ok());      // length for strings
//! assert!(email().validate(&json!("a@b.co")).is_ok());
//! assert!(one_of(vec![json!("a"), json!("b")]).validate(&json!("a")).is_ok());
//! ```

pub mod bounds;
pub mod case;
pub mod content;
pub mod datetime;
pub mod presence;
pub mod sets;
pub mod types;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use bounds::{Greater, Less, Max, Min, greater, less, max, min};

pub use presence::{Required, required};

pub use types::{IsArray, IsBoolean, IsNumber, array, boolean, number};

pub use content::{Email, MatchesRegex, email, matches_regex};

pub use datetime::{ParsesAsDate, date, date_format};

pub use case::{Lowercase, Uppercase, lowercase, uppercase};

pub use sets::{Contains, Equals, OneOf, contains, equals, one_of};

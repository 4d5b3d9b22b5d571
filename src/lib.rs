//! # formcheck
//!
//! A declarative field-validation engine with a reactive form adapter.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//! use serde_json::json;
//!
//! // Describe a field's constraints once, evaluate anywhere.
//! let password = Constraints::new().required().min(8.0);
//! assert!(!evaluate(&password, &json!("short")));
//! assert!(evaluate(&password, &json!("long enough")));
//! ```
//!
//! ## Architecture
//!
//! - [`validators`] - the predicate library: stateless boolean checks over
//!   [`serde_json::Value`] (`min`, `email`, `one_of`, ...).
//! - [`engine`] - the rule evaluator: applies a [`Constraints`](engine::Constraints)
//!   descriptor to a value in a fixed precedence order, short-circuiting on
//!   the first violated rule.
//! - [`form`] - the reactive adapter: per-field state (value, error flag,
//!   default), and schema-wide aggregation with cross-field dependencies.
//!
//! The engine is a pure function of its inputs: no shared state, no panics,
//! safe to call from any thread.
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.

pub mod combinators;
pub mod engine;
pub mod form;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

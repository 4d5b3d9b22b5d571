//! Form adapter
//!
//! Mutable per-field state on top of the evaluation engine, plus a schema
//! holding many fields with cross-field dependency tracking.

pub mod field;
pub mod schema;

pub use field::FieldState;
pub use schema::{Schema, SchemaError};

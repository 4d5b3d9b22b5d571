//! Convenience re-exports
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//! ```

pub use crate::combinators::{And, Not, WithCode, and, not, with_code};
pub use crate::engine::{Constraints, check, evaluate, is_empty_value};
pub use crate::form::{FieldState, Schema, SchemaError};
pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};
pub use crate::validators::{
    Contains, Email, Equals, Greater, IsArray, IsBoolean, IsNumber, Less, Lowercase, MatchesRegex,
    Max, Min, OneOf, ParsesAsDate, Required, Uppercase, array, boolean, contains, date,
    date_format, email, equals, greater, less, lowercase, matches_regex, max, min, number, one_of,
    required, uppercase,
};

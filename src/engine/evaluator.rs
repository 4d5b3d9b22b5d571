//! Ordered rule evaluation
//!
//! Runs the rules of a [`Constraints`] against a value in a fixed order and
//! stops at the first violation. Two rules sit outside the ordinary chain:
//! an empty value on a non-required field passes unconditionally, and an
//! active depend rule replaces every other rule.

use serde_json::Value;
use tracing::trace;

use crate::combinators::{not, with_code};
use crate::engine::Constraints;
use crate::foundation::{Validate, ValidationError};
use crate::validators::{
    Email, IsArray, IsBoolean, IsNumber, Lowercase, MatchesRegex, ParsesAsDate, Required,
    Uppercase, contains, equals, greater, less, max, min, one_of,
};

/// Whether a value counts as empty for the presence rules.
///
/// Null, the empty string, and the empty sequence are empty. A whitespace
/// string is not, although [`Required`] still rejects it.
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(elements) => elements.is_empty(),
        _ => false,
    }
}

/// Checks `value` against `constraints`, reporting the first violated rule.
///
/// The returned error's `code` names the rule that failed, in the fixed
/// evaluation order. [`evaluate`] is the boolean shorthand.
pub fn check(constraints: &Constraints, value: &Value) -> Result<(), ValidationError> {
    // An optional field with nothing in it has nothing to check.
    if !constraints.required && is_empty_value(value) {
        trace!("empty optional value, skipping rules");
        return Ok(());
    }

    // A depend rule replaces every other rule.
    if let Some(snapshot) = &constraints.depend {
        return with_code(equals(snapshot.clone()), "depend").validate(value);
    }

    if let Some(limit) = constraints.min {
        min(limit).validate(value)?;
    }
    if let Some(limit) = constraints.max {
        max(limit).validate(value)?;
    }
    if constraints.array {
        IsArray.validate(value)?;
    }
    if constraints.number {
        IsNumber.validate(value)?;
    }
    if constraints.required {
        Required.validate(value)?;
    }
    if constraints.email {
        Email::new().validate(value)?;
    }
    if constraints.boolean {
        IsBoolean.validate(value)?;
    }
    if let Some(pattern) = &constraints.pattern {
        MatchesRegex::new(pattern.clone()).validate(value)?;
    }
    if constraints.date {
        let validator = match &constraints.date_format {
            Some(fmt) => ParsesAsDate::with_format(fmt.clone()),
            None => ParsesAsDate::new(),
        };
        validator.validate(value)?;
    }
    if let Some(limit) = constraints.greater {
        greater(limit).validate(value)?;
    }
    if let Some(limit) = constraints.less {
        less(limit).validate(value)?;
    }
    if constraints.lowercase {
        Lowercase.validate(value)?;
    }
    if constraints.uppercase {
        Uppercase.validate(value)?;
    }
    if let Some(target) = &constraints.valid {
        with_code(equals(target.clone()), "valid").validate(value)?;
    }
    if let Some(choices) = &constraints.is_in {
        with_code(one_of(choices.clone()), "is").validate(value)?;
    }
    if let Some(item) = &constraints.contains {
        contains(item.clone()).validate(value)?;
    }
    if let Some(target) = &constraints.invalid {
        with_code(not(equals(target.clone())), "invalid")
            .with_message("Value matches a forbidden value")
            .validate(value)?;
    }
    if let Some(choices) = &constraints.not_in {
        with_code(not(one_of(choices.clone())), "is_not")
            .with_message("Value is one of the forbidden values")
            .validate(value)?;
    }
    if let Some(item) = &constraints.contains_not {
        with_code(not(contains(item.clone())), "contains_not")
            .with_message("Value contains a forbidden item")
            .validate(value)?;
    }

    Ok(())
}

/// Whether `value` satisfies every rule in `constraints`.
#[must_use]
pub fn evaluate(constraints: &Constraints, value: &Value) -> bool {
    check(constraints, value).is_ok()
}

//! Per-field state
//!
//! A [`FieldState`] pairs an immutable [`Constraints`] descriptor with the
//! mutable parts of a form field: its current value, its error flag, and
//! whether it accepts input at all.

use serde_json::Value;
use tracing::{debug, trace};

use crate::engine::{Constraints, evaluate};

/// One form field: its rules, its current value, and its validation state.
///
/// The error flag is tri-state. `None` means the field has not been
/// validated yet, `Some(true)` means the last validation failed,
/// `Some(false)` means it passed.
#[derive(Debug, Clone)]
pub struct FieldState {
    name: String,
    constraints: Constraints,
    value: Value,
    default_value: Value,
    error: Option<bool>,
    disabled: bool,
    depends_on: Option<String>,
}

impl FieldState {
    /// Creates a field with a null value and no validation state.
    #[must_use]
    pub fn new(name: impl Into<String>, constraints: Constraints) -> Self {
        Self {
            name: name.into(),
            constraints,
            value: Value::Null,
            default_value: Value::Null,
            error: None,
            disabled: false,
            depends_on: None,
        }
    }

    /// Sets the initial value without validating it.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    /// Sets the value restored by [`reset`](Self::reset). Also fills the
    /// current value when none has been set yet.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default(mut self, default_value: Value) -> Self {
        if self.value.is_null() {
            self.value = default_value.clone();
        }
        self.default_value = default_value;
        self
    }

    /// Ties this field's validity to another field's value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_depends_on(mut self, field: impl Into<String>) -> Self {
        self.depends_on = Some(field.into());
        self
    }

    /// Marks the field as rejecting all input.
    #[must_use = "builder methods must be chained or built"]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Replaces the value and re-validates. Returns `false` without touching
    /// anything when the field is disabled.
    pub fn set_value(&mut self, value: Value) -> bool {
        self.set_value_with_depend(value, None)
    }

    pub(crate) fn set_value_with_depend(&mut self, value: Value, depend: Option<&Value>) -> bool {
        if self.disabled {
            debug!(field = %self.name, "ignoring value for disabled field");
            return false;
        }
        self.value = value;
        self.revalidate(depend);
        true
    }

    /// Re-runs validation against the current value, with an optional
    /// snapshot of the depended-on field's value.
    pub fn revalidate(&mut self, depend: Option<&Value>) {
        let constraints = match depend {
            Some(snapshot) => self.constraints.clone().depend(snapshot.clone()),
            None => self.constraints.clone(),
        };
        let ok = evaluate(&constraints, &self.value);
        trace!(field = %self.name, valid = ok, "validated");
        self.error = Some(!ok);
    }

    /// Restores the default value and clears the validation state.
    pub fn reset(&mut self) {
        self.value = self.default_value.clone();
        self.error = None;
    }

    /// The field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The value restored on reset.
    #[must_use]
    pub fn default_value(&self) -> &Value {
        &self.default_value
    }

    /// The tri-state error flag.
    #[must_use]
    pub fn error(&self) -> Option<bool> {
        self.error
    }

    /// Whether the last validation failed. An unvalidated field is not
    /// invalid.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.error == Some(true)
    }

    /// Whether the field rejects input.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The field this one depends on, if any.
    #[must_use]
    pub fn depends_on(&self) -> Option<&str> {
        self.depends_on.as_deref()
    }

    /// The field's rules.
    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }
}

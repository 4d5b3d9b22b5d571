//! Form schema
//!
//! A [`Schema`] holds named fields in insertion order, routes value changes
//! to them, and re-validates dependent fields when the field they depend on
//! changes.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::engine::{check, evaluate};
use crate::form::FieldState;
use crate::foundation::ValidationErrors;

/// Errors from schema operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The named field does not exist.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A field with this name was already inserted.
    #[error("duplicate field: {0}")]
    DuplicateField(String),

    /// A field declares a dependency on a field that does not exist.
    #[error("field {field} depends on unknown field {depends_on}")]
    UnknownDependency {
        /// The field declaring the dependency.
        field: String,
        /// The missing dependency target.
        depends_on: String,
    },
}

/// An ordered collection of form fields.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, FieldState>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field. Fields keep their insertion order.
    ///
    /// A field arriving with a non-empty value is validated immediately, so
    /// pre-filled forms start with a correct error flag. Dependencies must
    /// point at fields already inserted.
    pub fn insert(&mut self, field: FieldState) -> Result<(), SchemaError> {
        if self.fields.contains_key(field.name()) {
            return Err(SchemaError::DuplicateField(field.name().to_string()));
        }
        if let Some(target) = field.depends_on() {
            if !self.fields.contains_key(target) {
                return Err(SchemaError::UnknownDependency {
                    field: field.name().to_string(),
                    depends_on: target.to_string(),
                });
            }
        }

        let mut field = field;
        if !crate::engine::is_empty_value(field.value()) {
            let snapshot = field
                .depends_on()
                .and_then(|target| self.fields.get(target))
                .map(|dep| dep.value().clone());
            field.revalidate(snapshot.as_ref());
        }

        debug!(field = %field.name(), "field registered");
        self.fields.insert(field.name().to_string(), field);
        Ok(())
    }

    /// Sets a field's value and re-validates it, then re-validates every
    /// field that depends on it against the new value.
    ///
    /// Returns whether the value was accepted; a disabled field returns
    /// `Ok(false)` and nothing changes.
    pub fn set_value(&mut self, name: &str, value: Value) -> Result<bool, SchemaError> {
        let snapshot = {
            let field = self
                .fields
                .get(name)
                .ok_or_else(|| SchemaError::UnknownField(name.to_string()))?;
            field
                .depends_on()
                .and_then(|target| self.fields.get(target))
                .map(|dep| dep.value().clone())
        };

        let accepted = {
            let field = self
                .fields
                .get_mut(name)
                .ok_or_else(|| SchemaError::UnknownField(name.to_string()))?;
            field.set_value_with_depend(value, snapshot.as_ref())
        };
        if !accepted {
            return Ok(false);
        }

        // The change may invalidate fields depending on this one.
        let new_snapshot = self
            .fields
            .get(name)
            .map(|field| field.value().clone());
        let dependents: Vec<String> = self
            .fields
            .values()
            .filter(|field| field.depends_on() == Some(name))
            .map(|field| field.name().to_string())
            .collect();
        for dependent in dependents {
            if let Some(field) = self.fields.get_mut(&dependent) {
                field.revalidate(new_snapshot.as_ref());
            }
        }

        Ok(true)
    }

    /// Validates every field and returns the names of the failing ones, in
    /// insertion order.
    ///
    /// Each field is evaluated fresh against its current value and its
    /// dependency snapshot, so fields never touched since insertion are
    /// covered too.
    pub fn validate_all(&self) -> Result<Vec<String>, SchemaError> {
        let mut failing = Vec::new();
        for field in self.fields.values() {
            let constraints = match field.depends_on() {
                Some(target) => {
                    let dep = self.fields.get(target).ok_or_else(|| {
                        SchemaError::UnknownDependency {
                            field: field.name().to_string(),
                            depends_on: target.to_string(),
                        }
                    })?;
                    field.constraints().clone().depend(dep.value().clone())
                }
                None => field.constraints().clone(),
            };
            if field.is_invalid() || !evaluate(&constraints, field.value()) {
                failing.push(field.name().to_string());
            }
        }
        debug!(failing = failing.len(), "schema validated");
        Ok(failing)
    }

    /// Validates every field and collects the full diagnostics, each error
    /// tagged with its field name.
    ///
    /// Where [`validate_all`](Self::validate_all) only names the failing
    /// fields, this reports which rule each field violated.
    pub fn check_all(&self) -> Result<ValidationErrors, SchemaError> {
        let mut errors = ValidationErrors::new();
        for field in self.fields.values() {
            let constraints = match field.depends_on() {
                Some(target) => {
                    let dep = self.fields.get(target).ok_or_else(|| {
                        SchemaError::UnknownDependency {
                            field: field.name().to_string(),
                            depends_on: target.to_string(),
                        }
                    })?;
                    field.constraints().clone().depend(dep.value().clone())
                }
                None => field.constraints().clone(),
            };
            if let Err(error) = check(&constraints, field.value()) {
                errors.add(error.with_field(field.name().to_string()));
            }
        }
        Ok(errors)
    }

    /// Resets every field to its default value and clears all error flags.
    pub fn reset_all(&mut self) {
        debug!(fields = self.fields.len(), "resetting schema");
        for field in self.fields.values_mut() {
            field.reset();
        }
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    /// Iterates over fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.values()
    }

    /// The number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

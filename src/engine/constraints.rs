//! Constraint descriptors
//!
//! An immutable description of the rules a single field must satisfy. Built
//! once with the fluent methods, then handed to the evaluator; a rule is
//! active exactly when it has been set, so `min(0.0)` is a real bound and
//! absent rules cost nothing.

use regex::Regex;
use serde_json::Value;

/// The full set of rules for one field.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::engine::Constraints;
///
/// let constraints = Constraints::new()
///     .required()
///     .min(3.0)
///     .max(64.0)
///     .email();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub(crate) required: bool,
    pub(crate) number: bool,
    pub(crate) array: bool,
    pub(crate) boolean: bool,
    pub(crate) email: bool,
    pub(crate) date: bool,
    pub(crate) lowercase: bool,
    pub(crate) uppercase: bool,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
    pub(crate) greater: Option<f64>,
    pub(crate) less: Option<f64>,
    pub(crate) pattern: Option<Regex>,
    pub(crate) date_format: Option<String>,
    pub(crate) valid: Option<Value>,
    pub(crate) invalid: Option<Value>,
    pub(crate) is_in: Option<Vec<Value>>,
    pub(crate) not_in: Option<Vec<Value>>,
    pub(crate) contains: Option<Value>,
    pub(crate) contains_not: Option<Value>,
    pub(crate) depend: Option<Value>,
}

impl Constraints {
    /// Creates an empty descriptor with no active rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value must be present: not null, not an empty or blank string,
    /// not an empty sequence.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The value's magnitude must be at least `limit`. Numbers and numeric
    /// strings compare numerically, other strings by character count,
    /// sequences by element count.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, limit: f64) -> Self {
        self.min = Some(limit);
        self
    }

    /// The value's magnitude must be at most `limit`.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, limit: f64) -> Self {
        self.max = Some(limit);
        self
    }

    /// The value's magnitude must be strictly greater than `limit`.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater(mut self, limit: f64) -> Self {
        self.greater = Some(limit);
        self
    }

    /// The value's magnitude must be strictly less than `limit`.
    #[must_use = "builder methods must be chained or built"]
    pub fn less(mut self, limit: f64) -> Self {
        self.less = Some(limit);
        self
    }

    /// The value must be a number or a numeric string.
    #[must_use = "builder methods must be chained or built"]
    pub fn number(mut self) -> Self {
        self.number = true;
        self
    }

    /// The value must be a sequence.
    #[must_use = "builder methods must be chained or built"]
    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    /// The value must be a boolean.
    #[must_use = "builder methods must be chained or built"]
    pub fn boolean(mut self) -> Self {
        self.boolean = true;
        self
    }

    /// The value must be a string matching the fixed email pattern.
    #[must_use = "builder methods must be chained or built"]
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// The value must be a string matching `pattern`.
    #[must_use = "builder methods must be chained or built"]
    pub fn regex(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// The value must parse as a date in any recognized format.
    #[must_use = "builder methods must be chained or built"]
    pub fn date(mut self) -> Self {
        self.date = true;
        self
    }

    /// The value must parse as a date in the given strftime format.
    /// Implies [`date`](Self::date).
    #[must_use = "builder methods must be chained or built"]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date = true;
        self.date_format = Some(format.into());
        self
    }

    /// The value must be an entirely lowercase string.
    #[must_use = "builder methods must be chained or built"]
    pub fn lowercase(mut self) -> Self {
        self.lowercase = true;
        self
    }

    /// The value must be an entirely uppercase string.
    #[must_use = "builder methods must be chained or built"]
    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// The value must equal `target`.
    #[must_use = "builder methods must be chained or built"]
    pub fn valid(mut self, target: Value) -> Self {
        self.valid = Some(target);
        self
    }

    /// The value must not equal `target`.
    #[must_use = "builder methods must be chained or built"]
    pub fn invalid(mut self, target: Value) -> Self {
        self.invalid = Some(target);
        self
    }

    /// The value must be one of `choices`.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_in(mut self, choices: Vec<Value>) -> Self {
        self.is_in = Some(choices);
        self
    }

    /// The value must not be any of `choices`.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_in(mut self, choices: Vec<Value>) -> Self {
        self.not_in = Some(choices);
        self
    }

    /// The value must contain `item`, as a substring or sequence element.
    #[must_use = "builder methods must be chained or built"]
    pub fn contains(mut self, item: Value) -> Self {
        self.contains = Some(item);
        self
    }

    /// The value must not contain `item`.
    #[must_use = "builder methods must be chained or built"]
    pub fn contains_not(mut self, item: Value) -> Self {
        self.contains_not = Some(item);
        self
    }

    /// The value must equal `snapshot`, overriding every other rule. Used by
    /// the form layer to tie one field's validity to another's value.
    #[must_use = "builder methods must be chained or built"]
    pub fn depend(mut self, snapshot: Value) -> Self {
        self.depend = Some(snapshot);
        self
    }

    /// Whether the required rule is active.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether any rule at all is active.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        !(self.required
            || self.number
            || self.array
            || self.boolean
            || self.email
            || self.date
            || self.lowercase
            || self.uppercase)
            && self.min.is_none()
            && self.max.is_none()
            && self.greater.is_none()
            && self.less.is_none()
            && self.pattern.is_none()
            && self.valid.is_none()
            && self.invalid.is_none()
            && self.is_in.is_none()
            && self.not_in.is_none()
            && self.contains.is_none()
            && self.contains_not.is_none()
            && self.depend.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_trivial() {
        let constraints = Constraints::new();
        assert!(constraints.is_trivial());
        assert!(!constraints.is_required());
    }

    #[test]
    fn builder_activates_rules() {
        let constraints = Constraints::new().required().min(3.0).valid(json!("ok"));
        assert!(constraints.is_required());
        assert!(!constraints.is_trivial());
        assert_eq!(constraints.min, Some(3.0));
        assert_eq!(constraints.valid, Some(json!("ok")));
    }

    #[test]
    fn zero_bound_is_active() {
        let constraints = Constraints::new().min(0.0);
        assert!(!constraints.is_trivial());
    }

    #[test]
    fn date_format_implies_date() {
        let constraints = Constraints::new().date_format("%Y-%m-%d");
        assert!(constraints.date);
        assert_eq!(constraints.date_format.as_deref(), Some("%Y-%m-%d"));
    }
}

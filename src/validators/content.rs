//! String content validators
//!
//! Validators for checking string content against patterns.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

// The fixed email pattern. Identical character classes and alternations as
// the historical form-validation pattern; `[` and the closing `]` of the
// IP-literal branch carry extra escapes the regex crate requires, with no
// semantic change.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is a valid regex")
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    ///
    /// Uses a fixed, conservative RFC-like pattern. Only strings can be
    /// emails; any other value type fails.
    pub Email { pattern: Regex } for Value;
    rule(self, input) { input.as_str().is_some_and(|s| self.pattern.is_match(s)) }
    error(self, input) { ValidationError::new("email", "Value must be a valid email address") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

/// Validates that a string matches a regular expression.
///
/// The pattern is compiled once, at construction; evaluating against a
/// non-string value fails without panicking.
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    /// The compiled pattern to match against.
    pub pattern: Regex,
}

impl MatchesRegex {
    /// Creates a validator from an already-compiled pattern.
    #[must_use]
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl Validate for MatchesRegex {
    type Input = Value;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.as_str().is_some_and(|s| self.pattern.is_match(s)) {
            Ok(())
        } else {
            Err(
                ValidationError::new("regex", "Value does not match the expected pattern")
                    .with_param("pattern", self.pattern.as_str().to_string()),
            )
        }
    }
}

/// Creates a regex validator from a pattern string.
///
/// Fails with the underlying [`regex::Error`] when the pattern does not
/// compile.
pub fn matches_regex(pattern: &str) -> Result<MatchesRegex, regex::Error> {
    Ok(MatchesRegex::new(Regex::new(pattern)?))
}

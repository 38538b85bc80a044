//! Field validators.
//!
//! A validator looks at every value bound to a field and reports one
//! HTML-escaped message per offending value. Message text comes from the
//! [`Messages`] table of the field being validated.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FormError;
use crate::messages::{interpolate, Messages};
use crate::widgets::html_escape;

/// Conservative email pattern, matched case-insensitively.
pub const EMAIL_PATTERN: &str = r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates the values, returning the escaped messages on failure.
    fn validate(&self, values: &[String], messages: &Messages) -> Result<(), Vec<String>>;

    /// Validates the values as a `(valid, messages)` pair.
    fn is_valid(&self, values: &[String], messages: &Messages) -> (bool, Vec<String>) {
        match self.validate(values, messages) {
            Ok(()) => (true, Vec::new()),
            Err(errors) => (false, errors),
        }
    }
}

/// Applies `check` to every value and collects a message for each failure.
fn check_each(
    values: &[String],
    check: impl Fn(&str) -> bool,
    message: impl Fn(&str) -> String,
) -> Result<(), Vec<String>> {
    let errors: Vec<String> = values
        .iter()
        .filter(|value| !check(value.as_str()))
        .map(|value| html_escape(&message(value.as_str())))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Requires the first value to be present and non-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Validator for Required {
    fn validate(&self, values: &[String], messages: &Messages) -> Result<(), Vec<String>> {
        if values.first().is_some_and(|v| !v.is_empty()) {
            Ok(())
        } else {
            Err(vec![html_escape(&messages.required)])
        }
    }
}

/// Requires every value to match a regular expression.
///
/// The match is unanchored; use `^` and `$` for a full match. An empty
/// pattern rejects everything.
#[derive(Debug, Clone)]
pub struct Regexp {
    pattern: String,
    regex: Option<Regex>,
}

impl Regexp {
    /// Compiles the pattern.
    pub fn new(pattern: &str) -> Result<Self, FormError> {
        let regex = if pattern.is_empty() {
            None
        } else {
            Some(
                Regex::new(pattern).map_err(|source| FormError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })?,
            )
        };

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Returns the source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Validator for Regexp {
    fn validate(&self, values: &[String], messages: &Messages) -> Result<(), Vec<String>> {
        check_each(
            values,
            |value| self.regex.as_ref().is_some_and(|re| re.is_match(value)),
            |_| interpolate(&messages.no_match_pattern, &self.pattern),
        )
    }
}

/// Requires every value to look like an email address.
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl Validator for Email {
    fn validate(&self, values: &[String], messages: &Messages) -> Result<(), Vec<String>> {
        check_each(
            values,
            |value| EMAIL_REGEX.is_match(value),
            |value| interpolate(&messages.incorrect_email, value),
        )
    }
}

/// Requires every value to be at least `min` characters long.
#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    /// Minimum number of characters.
    pub min: usize,
}

impl MinLength {
    /// Creates a new MinLength validator.
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Validator for MinLength {
    fn validate(&self, values: &[String], messages: &Messages) -> Result<(), Vec<String>> {
        check_each(
            values,
            |value| value.chars().count() >= self.min,
            |_| interpolate(&messages.incorrect_min_length, self.min),
        )
    }
}

/// Requires every value to be at most `max` characters long.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    /// Maximum number of characters.
    pub max: usize,
}

impl MaxLength {
    /// Creates a new MaxLength validator.
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Validator for MaxLength {
    fn validate(&self, values: &[String], messages: &Messages) -> Result<(), Vec<String>> {
        check_each(
            values,
            |value| value.chars().count() <= self.max,
            |_| interpolate(&messages.incorrect_max_length, self.max),
        )
    }
}

/// Requires every value to be one of an allowed set.
#[derive(Debug, Clone, Default)]
pub struct InSlice {
    /// Allowed values.
    pub values: Vec<String>,
}

impl InSlice {
    /// Creates a new InSlice validator.
    pub fn new(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for InSlice {
    fn validate(&self, values: &[String], messages: &Messages) -> Result<(), Vec<String>> {
        check_each(
            values,
            |value| self.values.iter().any(|allowed| allowed == value),
            |value| interpolate(&messages.value_not_found, value),
        )
    }
}

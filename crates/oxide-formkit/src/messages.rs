//! Translation table for validation messages.
//!
//! Every form carries a [`Messages`] value instead of reading a global
//! table, so two forms in the same process can speak different languages.
//! Templates hold at most one `%s` or `%d` placeholder.
//!
//! ```rust
//! use oxide_formkit::Messages;
//!
//! let messages = Messages::from_json(r#"{"REQUIRED": "Pole jest wymagane"}"#).unwrap();
//! assert_eq!(messages.required, "Pole jest wymagane");
//! // Keys missing from the JSON keep their built-in text.
//! assert_eq!(messages.get("INCORRECT_EMAIL"), Messages::default().get("INCORRECT_EMAIL"));
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Message templates keyed by symbolic name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Messages {
    /// Empty value for a required field.
    pub required: String,
    /// Value is not an email address. Placeholder: the value.
    pub incorrect_email: String,
    /// More than one value for a single-value field.
    pub incorrect_multi_val: String,
    /// Value too short. Placeholder: the minimum length.
    pub incorrect_min_length: String,
    /// Value too long. Placeholder: the maximum length.
    pub incorrect_max_length: String,
    /// Value does not match a pattern. Placeholder: the pattern.
    pub no_match_pattern: String,
    /// Value is not one of the allowed values. Placeholder: the value.
    pub value_not_found: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: "This field can't be empty".to_string(),
            incorrect_email: "Entered value \"%s\" is not correct email address".to_string(),
            incorrect_multi_val: "You supplied more than one value for this field".to_string(),
            incorrect_min_length: "Entered value need to be at least %d chars long".to_string(),
            incorrect_max_length: "Entered value need to be at max %d chars long".to_string(),
            no_match_pattern: "Value doesn't match pattern \"%s\"".to_string(),
            value_not_found: "Value \"%s\" not found in allowed values".to_string(),
        }
    }
}

impl Messages {
    /// Creates the built-in English table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a table from JSON. Keys absent from the document keep their
    /// built-in templates.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Looks a template up by its symbolic name, e.g. `"REQUIRED"`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let template = match key {
            "REQUIRED" => &self.required,
            "INCORRECT_EMAIL" => &self.incorrect_email,
            "INCORRECT_MULTI_VAL" => &self.incorrect_multi_val,
            "INCORRECT_MIN_LENGTH" => &self.incorrect_min_length,
            "INCORRECT_MAX_LENGTH" => &self.incorrect_max_length,
            "NO_MATCH_PATTERN" => &self.no_match_pattern,
            "VALUE_NOT_FOUND" => &self.value_not_found,
            _ => return None,
        };
        Some(template)
    }

    /// Builder method to override a single template.
    #[must_use]
    pub fn with(mut self, key: &str, template: impl Into<String>) -> Self {
        let slot = match key {
            "REQUIRED" => &mut self.required,
            "INCORRECT_EMAIL" => &mut self.incorrect_email,
            "INCORRECT_MULTI_VAL" => &mut self.incorrect_multi_val,
            "INCORRECT_MIN_LENGTH" => &mut self.incorrect_min_length,
            "INCORRECT_MAX_LENGTH" => &mut self.incorrect_max_length,
            "NO_MATCH_PATTERN" => &mut self.no_match_pattern,
            "VALUE_NOT_FOUND" => &mut self.value_not_found,
            _ => {
                tracing::warn!(key, "Ignoring unknown message key");
                return self;
            }
        };
        *slot = template.into();
        self
    }
}

/// Substitutes the first `%s` or `%d` placeholder in `template`.
pub fn interpolate(template: &str, arg: impl Display) -> String {
    let placeholder = ["%s", "%d"]
        .iter()
        .filter_map(|p| template.find(p))
        .min();

    match placeholder {
        Some(at) => format!("{}{arg}{}", &template[..at], &template[at + 2..]),
        None => template.to_string(),
    }
}

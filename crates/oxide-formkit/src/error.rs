//! Error types for forms.

use std::collections::HashMap;
use thiserror::Error;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// Validation failed with errors.
    #[error("validation errors: {0:?}")]
    Invalid(ValidationErrors),

    /// A `Regexp` validator was given a pattern that does not compile.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A translation table could not be parsed.
    #[error("failed to parse messages: {0}")]
    Messages(#[from] serde_json::Error),
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Returns all errors as a flat list.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |msg| (field.as_str(), msg.as_str()))
            })
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<_> = self.errors.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));
        for (field, messages) in fields {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_groups_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "bad address");
        errors.add("email", "too long");
        errors.add("name", "required");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email").map(Vec::len), Some(2));
        assert_eq!(errors.all_errors().len(), 3);
        assert!(errors.get("age").is_none());
    }

    #[test]
    fn test_display_is_sorted_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add("zeta", "z");
        errors.add("alpha", "a");

        assert_eq!(errors.to_string(), "alpha: a\nzeta: z\n");
    }

    #[test]
    fn test_invalid_pattern_message() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = FormError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid pattern \"(\""));
    }
}

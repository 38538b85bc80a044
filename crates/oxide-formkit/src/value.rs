//! Initial and cleaned field values.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Value shown by a field before any data is bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialValue {
    /// A single value.
    Scalar(String),
    /// Several values, e.g. pre-selected choices.
    List(Vec<String>),
}

impl InitialValue {
    /// Converts a JSON value, decided once at assignment time.
    ///
    /// Strings, numbers and booleans become scalars. Arrays keep the
    /// elements that convert and log the rest. `null`, objects and nested
    /// arrays are logged and yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Self::List(
                items
                    .iter()
                    .filter_map(|item| {
                        let converted = scalar_to_string(item);
                        if converted.is_none() {
                            warn!(value = %item, "Skipping unsupported initial value element");
                        }
                        converted
                    })
                    .collect(),
            )),
            other => {
                let converted = scalar_to_string(other).map(Self::Scalar);
                if converted.is_none() {
                    warn!(value = %other, "Ignoring unsupported initial value");
                }
                converted
            }
        }
    }

    /// Normalizes the value to a list of strings.
    pub fn to_values(&self) -> Vec<String> {
        match self {
            Self::Scalar(value) => vec![value.clone()],
            Self::List(values) => values.clone(),
        }
    }
}

impl From<&str> for InitialValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for InitialValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for InitialValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for InitialValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

/// A field value after its type has cleaned it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CleanedValue {
    /// Text from single-value inputs.
    Text(String),
    /// Raw values from multi-value types.
    List(Vec<String>),
    /// Integer from a number input.
    Int(i64),
    /// Float from a number input.
    Float(f64),
    /// Checkbox state.
    Bool(bool),
    /// The value could not be coerced.
    Null,
}

impl CleanedValue {
    /// Returns the text, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns whether this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for CleanedValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CleanedValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Cleaned values keyed by field name.
pub type CleanedData = HashMap<String, CleanedValue>;

/// Initial values keyed by field name.
pub type InitialData = HashMap<String, Value>;

/// Converts a JSON scalar to the string a form would have received.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initial_from_json_scalars() {
        assert_eq!(
            InitialValue::from_json(&json!("spam")),
            Some(InitialValue::Scalar("spam".to_string()))
        );
        assert_eq!(
            InitialValue::from_json(&json!(42)),
            Some(InitialValue::Scalar("42".to_string()))
        );
        assert_eq!(
            InitialValue::from_json(&json!(true)),
            Some(InitialValue::Scalar("true".to_string()))
        );
    }

    #[test]
    fn test_initial_from_json_skips_unsupported() {
        assert_eq!(InitialValue::from_json(&json!(null)), None);
        assert_eq!(InitialValue::from_json(&json!({"a": 1})), None);
        assert_eq!(
            InitialValue::from_json(&json!(["a", 1, {"x": 2}, ["b"], null])),
            Some(InitialValue::List(vec!["a".to_string(), "1".to_string()]))
        );
    }

    #[test]
    fn test_initial_to_values() {
        assert_eq!(InitialValue::from("x").to_values(), vec!["x".to_string()]);
        assert_eq!(
            InitialValue::from(vec!["a", "b"]).to_values(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_cleaned_value_serializes_untagged() {
        let mut data = CleanedData::new();
        data.insert("name".to_string(), CleanedValue::from("Foo"));
        data.insert("age".to_string(), CleanedValue::Int(30));
        data.insert("agree".to_string(), CleanedValue::Bool(true));
        data.insert("missing".to_string(), CleanedValue::Null);

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            json!({"name": "Foo", "age": 30, "agree": true, "missing": null})
        );
    }
}

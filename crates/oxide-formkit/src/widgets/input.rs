//! Single-line `<input>` types.

use super::{render_input, Choice, FieldType};
use crate::field::Field;
use crate::value::CleanedValue;

/// The `type` attribute of a plain input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputKind {
    /// `text`
    #[default]
    Text,
    /// `email`
    Email,
    /// `password`
    Password,
    /// `date`
    Date,
    /// `time`
    Time,
    /// `datetime-local`
    DateTime,
    /// `month`
    Month,
    /// `week`
    Week,
    /// `url`
    Url,
    /// `tel`
    Tel,
    /// `search`
    Search,
}

impl InputKind {
    /// Returns the value of the `type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime-local",
            Self::Month => "month",
            Self::Week => "week",
            Self::Url => "url",
            Self::Tel => "tel",
            Self::Search => "search",
        }
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Basic input. The default type of every field.
///
/// The default kind renders the standard `type="text"`; there is no
/// generic `type="input"` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Input {
    /// The HTML input type.
    pub kind: InputKind,
}

impl Input {
    /// Creates a text input.
    pub const fn new() -> Self {
        Self::with_kind(InputKind::Text)
    }

    /// Creates an input of the given kind.
    pub const fn with_kind(kind: InputKind) -> Self {
        Self { kind }
    }

    /// Creates an email input.
    pub const fn email() -> Self {
        Self::with_kind(InputKind::Email)
    }

    /// Creates a password input.
    pub const fn password() -> Self {
        Self::with_kind(InputKind::Password)
    }

    /// Creates a date input.
    pub const fn date() -> Self {
        Self::with_kind(InputKind::Date)
    }

    /// Creates a time input.
    pub const fn time() -> Self {
        Self::with_kind(InputKind::Time)
    }

    /// Creates a `datetime-local` input.
    pub const fn datetime() -> Self {
        Self::with_kind(InputKind::DateTime)
    }

    /// Creates a month input.
    pub const fn month() -> Self {
        Self::with_kind(InputKind::Month)
    }

    /// Creates a week input.
    pub const fn week() -> Self {
        Self::with_kind(InputKind::Week)
    }

    /// Creates a URL input.
    pub const fn url() -> Self {
        Self::with_kind(InputKind::Url)
    }

    /// Creates a telephone input.
    pub const fn tel() -> Self {
        Self::with_kind(InputKind::Tel)
    }

    /// Creates a search input.
    pub const fn search() -> Self {
        Self::with_kind(InputKind::Search)
    }
}

impl FieldType for Input {
    fn input_type(&self) -> &str {
        self.kind.as_str()
    }

    fn render(&self, field: &Field, _choices: &[Choice], values: &[String]) -> String {
        render_input(&field.attrs, &field.name, self.kind.as_str(), values)
    }
}

/// Numeric input, cleaned to an integer or a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputNumber;

impl FieldType for InputNumber {
    fn input_type(&self) -> &str {
        "number"
    }

    fn clean_data(&self, values: &[String]) -> CleanedValue {
        let [value] = values else {
            return CleanedValue::Null;
        };

        if let Ok(int) = value.parse::<i64>() {
            CleanedValue::Int(int)
        } else if let Ok(float) = value.parse::<f64>() {
            CleanedValue::Float(float)
        } else {
            CleanedValue::Null
        }
    }

    fn render(&self, field: &Field, _choices: &[Choice], values: &[String]) -> String {
        render_input(&field.attrs, &field.name, "number", values)
    }
}

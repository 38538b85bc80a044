//! Forms: binding, validation and cleaned data.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::data::FormData;
use crate::error::{FormError, Result, ValidationErrors};
use crate::field::Field;
use crate::messages::Messages;
use crate::value::{CleanedData, InitialData, InitialValue};
use crate::widgets::Attributes;

/// A set of named fields validated together.
///
/// Each [`Form::is_valid`] call is an independent pass: errors and
/// cleaned data from the previous pass are discarded first.
#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<Field>,
    /// Attributes of the `<form>` tag.
    pub attrs: Attributes,
    incoming: Option<FormData>,
    cleaned: Option<CleanedData>,
    initial: InitialData,
    messages: Option<Arc<Messages>>,
}

impl Form {
    /// Assembles a form, naming each field after its key.
    pub fn new<K>(fields: impl IntoIterator<Item = (K, Field)>, attrs: Attributes) -> Self
    where
        K: Into<String>,
    {
        let mut form = Self {
            attrs,
            ..Self::default()
        };
        for (name, field) in fields {
            form.insert(name, field);
        }
        form
    }

    /// Adds a field under `name`, replacing any field already using it.
    pub fn insert(&mut self, name: impl Into<String>, field: Field) {
        let mut field = field.name(name);
        if let Some(messages) = &self.messages {
            field.set_messages(Arc::clone(messages));
        }

        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    /// Uses `messages` for every field of this form, including fields
    /// added later.
    ///
    /// Without a form-wide table each field keeps its own.
    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        let messages = Arc::new(messages);
        for field in &mut self.fields {
            field.set_messages(Arc::clone(&messages));
        }
        self.messages = Some(messages);
        self
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns a field by name, mutably.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Returns the cleaned data of the last pass, if it succeeded.
    pub fn cleaned_data(&self) -> Option<&CleanedData> {
        self.cleaned.as_ref()
    }

    /// Returns the data given to the last pass.
    pub fn incoming_data(&self) -> Option<&FormData> {
        self.incoming.as_ref()
    }

    /// Returns the initial data set with [`Form::set_initial`].
    pub fn initial_data(&self) -> &InitialData {
        &self.initial
    }

    /// Discards cleaned data and every field's errors.
    pub fn clear(&mut self) {
        self.cleaned = None;
        for field in &mut self.fields {
            field.errors.clear();
        }
    }

    /// Stores initial data and hands each entry to the matching field.
    ///
    /// Fields without an entry keep whatever initial value they had.
    pub fn set_initial(&mut self, data: InitialData) {
        for field in &mut self.fields {
            if let Some(value) = data.get(&field.name) {
                field.initial = InitialValue::from_json(value);
            }
        }
        self.initial = data;
    }

    /// Binds `data` to the fields and validates every one of them.
    ///
    /// Cleaned data is kept only when all fields pass.
    pub fn is_valid(&mut self, data: &FormData) -> bool {
        self.clear();
        self.incoming = Some(data.clone());

        let mut valid = true;
        let mut cleaned = CleanedData::new();

        for field in &mut self.fields {
            let values = data.get_list(&field.name).unwrap_or_default();
            field.value = data.get_list(&field.name).map(<[String]>::to_vec);

            if field.is_valid(values) {
                cleaned.insert(field.name.clone(), field.clean_data(values));
            } else {
                debug!(field = %field.name, errors = field.errors.len(), "Field failed validation");
                valid = false;
            }
        }

        if valid {
            self.cleaned = Some(cleaned);
        }
        debug!(valid, fields = self.fields.len(), "Validated form");

        valid
    }

    /// Validates a JSON-style map where values are scalars or arrays.
    pub fn is_valid_map(&mut self, values: &HashMap<String, Value>) -> bool {
        self.is_valid(&FormData::from_json_map(values))
    }

    /// Validates `data`, returning the cleaned data or the collected errors.
    pub fn validate(&mut self, data: &FormData) -> Result<&CleanedData> {
        let valid = self.is_valid(data);
        match self.cleaned.as_ref() {
            Some(cleaned) if valid => Ok(cleaned),
            _ => Err(FormError::Invalid(self.errors())),
        }
    }

    /// Returns the errors of every field that has any.
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for field in self.fields.iter().filter(|f| f.has_errors()) {
            for message in &field.errors {
                errors.add(&field.name, message.as_str());
            }
        }
        errors
    }

    /// Returns whether any field has errors.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(Field::has_errors)
    }

    /// Renders the opening `<form>` tag.
    pub fn open_tag(&self) -> String {
        format!("<form{}>", self.attrs.to_html(&[]))
    }

    /// Renders the closing `</form>` tag.
    pub fn close_tag(&self) -> &'static str {
        "</form>"
    }
}

/// A builder for assembling forms field by field.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<(String, Field)>,
    attrs: Attributes,
    messages: Option<Messages>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    /// Sets a `<form>` attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Sets the translation table.
    #[must_use]
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Builds the form.
    pub fn build(self) -> Form {
        let form = Form::new(self.fields, self.attrs);
        match self.messages {
            Some(messages) => form.with_messages(messages),
            None => form,
        }
    }
}

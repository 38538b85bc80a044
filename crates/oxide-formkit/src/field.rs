//! A single form field.

use std::fmt;
use std::sync::Arc;

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Li;
use tracing::debug;

use crate::messages::Messages;
use crate::validation::Validator;
use crate::value::{CleanedValue, InitialValue};
use crate::widgets::{html_escape, Attributes, Choice, FieldType, Input};

/// A named field: its type, validators, bound values and errors.
pub struct Field {
    /// Field name, stamped by the form from its key.
    pub name: String,
    /// Label text.
    pub label: String,
    /// Attributes of the `<label>` tag.
    pub label_attrs: Attributes,
    /// Options for choice-based types.
    pub choices: Vec<Choice>,
    /// Values bound during the last validation pass.
    pub value: Option<Vec<String>>,
    /// Value rendered when nothing is bound.
    pub initial: Option<InitialValue>,
    /// How values are cleaned and rendered.
    pub field_type: Box<dyn FieldType>,
    /// Attributes of the rendered input.
    pub attrs: Attributes,
    /// Validators run on every pass.
    pub validators: Vec<Box<dyn Validator>>,
    /// Errors collected since the last reset.
    pub errors: Vec<String>,
    messages: Arc<Messages>,
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("field_type", &self.field_type)
            .field("value", &self.value)
            .field("initial", &self.initial)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl Default for Field {
    fn default() -> Self {
        Self {
            name: String::new(),
            label: String::new(),
            label_attrs: Attributes::new(),
            choices: Vec::new(),
            value: None,
            initial: None,
            field_type: Box::new(Input::new()),
            attrs: Attributes::new(),
            validators: Vec::new(),
            errors: Vec::new(),
            messages: Arc::new(Messages::default()),
        }
    }
}

impl Field {
    /// Creates an unnamed text field without validators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a text field with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().name(name)
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets a label attribute.
    #[must_use]
    pub fn label_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.label_attrs.set(key, value);
        self
    }

    /// Sets the field type.
    #[must_use]
    pub fn field_type(mut self, field_type: impl FieldType + 'static) -> Self {
        self.field_type = Box::new(field_type);
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Sets an input attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Adds a choice.
    #[must_use]
    pub fn choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices.push(Choice::new(value, label));
        self
    }

    /// Sets the initial value.
    #[must_use]
    pub fn initial(mut self, initial: impl Into<InitialValue>) -> Self {
        self.initial = Some(initial.into());
        self
    }

    /// Sets the translation table used for error messages.
    #[must_use]
    pub fn messages(mut self, messages: Arc<Messages>) -> Self {
        self.messages = messages;
        self
    }

    pub(crate) fn set_messages(&mut self, messages: Arc<Messages>) {
        self.messages = messages;
    }

    /// Validates `values`, appending any messages to [`Field::errors`].
    ///
    /// A single-value type given several values fails straight away
    /// without running the validators.
    pub fn is_valid(&mut self, values: &[String]) -> bool {
        if !self.field_type.is_multi_value() && values.len() > 1 {
            debug!(field = %self.name, count = values.len(), "Too many values");
            self.errors.push(html_escape(&self.messages.incorrect_multi_val));
            return false;
        }

        let mut valid = true;
        for validator in &self.validators {
            if let Err(messages) = validator.validate(values, &self.messages) {
                self.errors.extend(messages);
                valid = false;
            }
        }

        valid
    }

    /// Cleans raw values with the field's type.
    pub fn clean_data(&self, values: &[String]) -> CleanedValue {
        self.field_type.clean_data(values)
    }

    /// Values to render: bound values, else the initial value.
    pub fn render_values(&self) -> Vec<String> {
        match (&self.value, &self.initial) {
            (Some(values), _) => values.clone(),
            (None, Some(initial)) => initial.to_values(),
            (None, None) => Vec::new(),
        }
    }

    /// Renders the field's input markup.
    pub fn render(&self) -> String {
        let values = self.render_values();
        self.field_type.render(self, &self.choices, &values)
    }

    /// Renders `<label for="f_<name>">`.
    pub fn render_label(&self) -> String {
        let id = format!("f_{}", self.name);
        self.label_attrs
            .renderable(&["for"])
            .fold(html! { label.for_(#id) }, |label, (key, value)| {
                label.attr(key.to_string(), value)
            })
            .text(&self.label)
            .render()
    }

    /// Returns whether the last pass recorded errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Renders errors as `<ul class="errors">`, or nothing without errors.
    pub fn render_errors(&self) -> String {
        if !self.has_errors() {
            return String::new();
        }

        // messages are escaped when recorded
        html! { ul.class("errors") }
            .children(&self.errors, |error, li: Element<Li>| li.raw(error))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{MinLength, Required};
    use crate::widgets::{Checkbox, Radio};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_field_no_validation() {
        let mut field = Field::new();
        assert!(field.is_valid(&strings(&[""])));
        assert!(field.is_valid(&strings(&["anything"])));
        assert!(field.is_valid(&[]));
        assert!(!field.has_errors());
    }

    #[test]
    fn test_field_basic_validation() {
        let mut field = Field::new().validator(Required);
        assert!(!field.is_valid(&strings(&[""])));
        assert_eq!(field.errors, vec![html_escape(&Messages::default().required)]);
    }

    #[test]
    fn test_field_default_type() {
        let field = Field::new();
        assert_eq!(field.field_type.input_type(), "text");
        assert!(!field.field_type.is_multi_value());
    }

    #[test]
    fn test_field_multi_value_short_circuits() {
        let mut field = Field::new().validator(MinLength::new(5));
        assert!(!field.is_valid(&strings(&["a", "b"])));
        assert_eq!(field.errors, vec![Messages::default().incorrect_multi_val]);
    }

    #[test]
    fn test_field_multi_value_allowed_for_radio() {
        let mut field = Field::new().field_type(Radio);
        assert!(field.is_valid(&strings(&["a", "b"])));
    }

    #[test]
    fn test_field_collects_messages_from_all_validators() {
        let mut field = Field::new()
            .validator(Required)
            .validator(MinLength::new(2));
        assert!(!field.is_valid(&strings(&[""])));
        assert_eq!(field.errors.len(), 2);
    }

    #[test]
    fn test_field_uses_own_messages() {
        let messages = Arc::new(Messages::default().with("REQUIRED", "Wymagane"));
        let mut field = Field::new().validator(Required).messages(messages);
        assert!(!field.is_valid(&[]));
        assert_eq!(field.errors, vec!["Wymagane".to_string()]);
    }

    #[test]
    fn test_field_render_label() {
        let field = Field::named("test")
            .label("Test label")
            .label_attr("v", "asd")
            .label_attr("id", "test")
            .label_attr("attr", "value");
        let label = field.render_label();
        assert_eq!(
            label,
            r#"<label for="f_test" attr="value" id="test" v="asd">Test label</label>"#
        );

        let field = Field::named("test").label("Test label").label_attr("for", "asd");
        let label = field.render_label();
        assert_eq!(label, r#"<label for="f_test">Test label</label>"#);
    }

    #[test]
    fn test_field_render_label_escapes() {
        let field = Field::named("q")
            .label("Fish & <chips>")
            .label_attr("title", r#"say "hi""#)
            .label_attr("x onclick", "evil");
        assert_eq!(
            field.render_label(),
            r#"<label for="f_q" title="say &quot;hi&quot;">Fish &amp; &lt;chips&gt;</label>"#
        );
    }

    #[test]
    fn test_field_render_prefers_bound_value() {
        let mut field = Field::named("title").initial("Initial");
        assert!(field.render().contains(r#"value="Initial""#));

        field.value = Some(strings(&["Bound"]));
        let html = field.render();
        assert!(html.contains(r#"value="Bound""#));
        assert!(!html.contains("Initial"));
    }

    #[test]
    fn test_field_render_initial_list() {
        let field = Field::named("color")
            .field_type(Radio)
            .choice("r", "Red")
            .choice("g", "Green")
            .initial(vec!["g"]);
        let html = field.render();
        assert_eq!(html.matches(r#"checked="checked""#).count(), 1);
        assert!(html.contains(r#"checked="checked" id="c_color_g""#));
    }

    #[test]
    fn test_field_render_checkbox_initial() {
        let field = Field::named("agree").field_type(Checkbox).initial("on");
        assert!(field.render().contains("checked"));
    }

    #[test]
    fn test_field_render_errors() {
        let mut field = Field::named("f");
        assert_eq!(field.render_errors(), "");

        field.errors.push("first".to_string());
        field.errors.push("second &amp; more".to_string());
        let html = field.render_errors();
        assert!(html.starts_with("<ul"));
        assert!(html.contains(r#"class="errors""#));
        assert!(html.contains("<li>first</li>"));
        assert!(html.contains("<li>second &amp; more</li>"));
        assert!(html.ends_with("</ul>"));
    }

    #[test]
    fn test_field_clean_data_delegates() {
        let field = Field::new().field_type(Checkbox);
        assert_eq!(field.clean_data(&strings(&["on"])), CleanedValue::Bool(true));
    }
}

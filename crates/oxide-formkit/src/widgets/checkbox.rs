//! Single checkbox.

use super::{render_input, Choice, FieldType};
use crate::field::Field;
use crate::value::CleanedValue;

/// Checkbox, cleaned to a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Checkbox;

impl FieldType for Checkbox {
    fn input_type(&self) -> &str {
        "checkbox"
    }

    fn clean_data(&self, values: &[String]) -> CleanedValue {
        CleanedValue::Bool(matches!(values, [value] if !value.is_empty()))
    }

    fn render(&self, field: &Field, _choices: &[Choice], values: &[String]) -> String {
        let checked = values.first().is_some_and(|v| !v.is_empty());
        if checked {
            let attrs = field.attrs.clone().with("checked", "checked");
            render_input(&attrs, &field.name, "checkbox", &[])
        } else {
            render_input(&field.attrs, &field.name, "checkbox", &[])
        }
    }
}

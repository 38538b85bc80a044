//! Multi-line text.

use super::{html_escape, with_default_id, Choice, FieldType, RESERVED_ATTRS};
use crate::field::Field;

/// `<textarea>` holding a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Textarea;

impl FieldType for Textarea {
    fn input_type(&self) -> &str {
        "textarea"
    }

    fn render(&self, field: &Field, _choices: &[Choice], values: &[String]) -> String {
        let attrs = with_default_id(&field.attrs, &field.name);
        let content = values.first().map(|v| html_escape(v)).unwrap_or_default();

        format!(
            r#"<textarea name="{}"{}>{content}</textarea>"#,
            html_escape(&field.name),
            attrs.to_html(RESERVED_ATTRS)
        )
    }
}

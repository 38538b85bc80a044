//! Field types: value multiplicity, cleaning and HTML rendering.

mod checkbox;
mod input;
mod radio;
mod textarea;

pub use checkbox::Checkbox;
pub use input::{Input, InputKind, InputNumber};
pub use radio::Radio;
pub use textarea::Textarea;

use std::collections::BTreeMap;
use std::fmt;

use tracing::warn;

use crate::field::Field;
use crate::value::CleanedValue;

/// Attributes the tag structure owns; callers cannot override them.
pub const RESERVED_ATTRS: &[&str] = &["type", "name", "value"];

/// Attributes that can be applied to a tag.
///
/// Serialized in key order so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    /// HTML attributes.
    pub attrs: BTreeMap<String, String>,
}

impl Attributes {
    /// Creates new empty attributes.
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Returns whether an attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Returns whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterates over renderable attributes, skipping `deny` and any
    /// name that is not a valid HTML attribute name.
    pub fn renderable<'a>(
        &'a self,
        deny: &'a [&'a str],
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.attrs
            .iter()
            .filter(|(k, _)| !deny.contains(&k.as_str()))
            .filter(|(k, _)| {
                let valid = is_attr_name(k);
                if !valid {
                    warn!(attr = %k, "Skipping invalid attribute name");
                }
                valid
            })
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders attributes as ` key="value"` pairs, skipping `deny`.
    pub fn to_html(&self, deny: &[&str]) -> String {
        self.renderable(deny)
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attrs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// A selectable option. Order in a list is render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Submitted value.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

impl Choice {
    /// Creates a new choice.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// How a field accepts, cleans and renders its values.
///
/// The provided methods describe a plain single-value input; variants
/// override what differs.
pub trait FieldType: Send + Sync + fmt::Debug {
    /// Returns the HTML type this renders, e.g. `"email"`.
    fn input_type(&self) -> &str;

    /// Whether the field may receive more than one value.
    fn is_multi_value(&self) -> bool {
        false
    }

    /// Converts validated raw values into the value handed to the caller.
    fn clean_data(&self, values: &[String]) -> CleanedValue {
        CleanedValue::Text(values.first().cloned().unwrap_or_default())
    }

    /// Renders the field's markup for the given values.
    fn render(&self, field: &Field, choices: &[Choice], values: &[String]) -> String;
}

/// Renders an `<input>` tag; `id` defaults to `f_<name>`.
pub(crate) fn render_input(
    attrs: &Attributes,
    name: &str,
    input_type: &str,
    values: &[String],
) -> String {
    let attrs = with_default_id(attrs, name);
    let value_attr = values
        .first()
        .filter(|v| !v.is_empty())
        .map(|v| format!(r#" value="{}""#, html_escape(v)))
        .unwrap_or_default();

    format!(
        r#"<input name="{}" type="{input_type}"{}{value_attr} />"#,
        html_escape(name),
        attrs.to_html(RESERVED_ATTRS)
    )
}

/// Copies `attrs`, adding `id="f_<name>"` unless an id was supplied.
pub(crate) fn with_default_id(attrs: &Attributes, name: &str) -> Attributes {
    let mut attrs = attrs.clone();
    if !attrs.contains("id") {
        attrs.set("id", format!("f_{name}"));
    }
    attrs
}

/// Returns whether `name` can be written as an attribute name as-is.
fn is_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/')
        })
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("can't"), "can&#x27;t");
    }

    #[test]
    fn test_attributes_skip_denied() {
        let attrs: Attributes = [
            ("v", "asd"),
            ("id", "test"),
            ("attr", "value"),
            ("name", "value"),
            ("forbidden", "value"),
        ]
        .into_iter()
        .collect();

        let html = attrs.to_html(&["name", "forbidden"]);
        assert_eq!(html, r#" attr="value" id="test" v="asd""#);
    }

    #[test]
    fn test_attributes_escape_values() {
        let attrs = Attributes::new().with("title", r#"say "hi""#);
        assert_eq!(attrs.to_html(&[]), r#" title="say &quot;hi&quot;""#);
    }

    #[test]
    fn test_attributes_skip_invalid_names() {
        let attrs = Attributes::new()
            .with(r#"onx="1" data-y"#, "v")
            .with("a<b", "v")
            .with("", "v")
            .with("data-ok", "v");
        assert_eq!(attrs.to_html(&[]), r#" data-ok="v""#);

        let html = render_input(&attrs, "f", "text", &[]);
        assert_eq!(html, r#"<input name="f" type="text" data-ok="v" id="f_f" />"#);
    }

    #[test]
    fn test_render_input_default_id() {
        let html = render_input(&Attributes::new(), "field", "text", &[]);
        assert_eq!(html, r#"<input name="field" type="text" id="f_field" />"#);
    }

    #[test]
    fn test_render_input_keeps_structure() {
        let attrs = Attributes::new()
            .with("id", "custom")
            .with("type", "hidden")
            .with("name", "other")
            .with("value", "sneaky");
        let html = render_input(&attrs, "field", "text", &["Foo".to_string()]);
        assert_eq!(
            html,
            r#"<input name="field" type="text" id="custom" value="Foo" />"#
        );
    }

    #[test]
    fn test_render_input_empty_value_omitted() {
        let html = render_input(&Attributes::new(), "f", "text", &[String::new()]);
        assert!(!html.contains("value="));
    }
}

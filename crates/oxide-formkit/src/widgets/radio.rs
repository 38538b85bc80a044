//! Radio button group.

use super::{html_escape, render_input, Choice, FieldType};
use crate::field::Field;
use crate::value::CleanedValue;

/// One radio button per choice, each wrapped in its own label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Radio;

impl FieldType for Radio {
    fn input_type(&self) -> &str {
        "radio"
    }

    fn is_multi_value(&self) -> bool {
        true
    }

    fn clean_data(&self, values: &[String]) -> CleanedValue {
        CleanedValue::List(values.to_vec())
    }

    fn render(&self, field: &Field, choices: &[Choice], values: &[String]) -> String {
        let mut html = String::new();

        for choice in choices {
            let id = format!("c_{}_{}", field.name, choice.value);
            let mut attrs = field.attrs.clone();
            attrs.set("id", &id);
            if values.contains(&choice.value) {
                attrs.set("checked", "checked");
            }

            let input = render_input(
                &attrs,
                &field.name,
                "radio",
                std::slice::from_ref(&choice.value),
            );
            html.push_str(&format!(
                "<label for=\"{}\">{input} {}</label>\n",
                html_escape(&id),
                html_escape(&choice.label)
            ));
        }

        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Vec<Choice> {
        vec![
            Choice::new("r", "Red"),
            Choice::new("g", "Green"),
            Choice::new("b", "Blue"),
        ]
    }

    #[test]
    fn test_radio_contract() {
        let radio = Radio;
        assert!(radio.is_multi_value());
        assert_eq!(radio.input_type(), "radio");

        let values = vec!["a".to_string(), "b".to_string()];
        assert_eq!(radio.clean_data(&values), CleanedValue::List(values.clone()));
        assert_eq!(radio.clean_data(&[]), CleanedValue::List(Vec::new()));
    }

    #[test]
    fn test_radio_render_without_value() {
        let field = Field::named("color");
        let html = Radio.render(&field, &colors(), &[]);

        assert_eq!(html.matches(r#"type="radio""#).count(), 3);
        assert_eq!(html.matches("<label").count(), 3);
        for value in ["r", "g", "b"] {
            let id = format!("c_color_{value}");
            assert_eq!(html.matches(&format!(r#"id="{id}""#)).count(), 1);
            assert!(html.contains(&format!(r#"<label for="{id}">"#)));
        }
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_radio_render_line() {
        let field = Field::named("color");
        let html = Radio.render(&field, &colors()[..1], &[]);
        assert_eq!(
            html,
            "<label for=\"c_color_r\"><input name=\"color\" type=\"radio\" id=\"c_color_r\" value=\"r\" /> Red</label>\n"
        );
    }

    #[test]
    fn test_radio_marks_bound_value_checked() {
        let field = Field::named("color").attr("class", "pick");
        let html = Radio.render(&field, &colors(), &["g".to_string()]);

        assert_eq!(html.matches(r#"checked="checked""#).count(), 1);
        assert!(html.contains(r#"checked="checked" class="pick" id="c_color_g""#));
        assert_eq!(html.matches(r#"class="pick""#).count(), 3);
    }
}

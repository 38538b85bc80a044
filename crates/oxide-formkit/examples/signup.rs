//! Validates a signup form submission and prints the resulting markup.
//!
//! Run with `cargo run -p oxide-formkit --example signup`.

use oxide_formkit::validation::{Email, MinLength, Required};
use oxide_formkit::widgets::{Checkbox, Input};
use oxide_formkit::{Field, FormBuilder, FormData};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut form = FormBuilder::new()
        .attr("method", "post")
        .attr("action", "/signup")
        .field(
            "email",
            Field::new()
                .label("Email")
                .field_type(Input::email())
                .validator(Required)
                .validator(Email),
        )
        .field(
            "password",
            Field::new()
                .label("Password")
                .field_type(Input::password())
                .validator(Required)
                .validator(MinLength::new(8)),
        )
        .field("terms", Field::new().label("I accept the terms").field_type(Checkbox))
        .build();

    let body = "email=ann%40example&password=short&terms=on";
    if form.is_valid(&FormData::parse_urlencoded(body)) {
        info!("Form accepted");
    } else {
        info!(errors = %form.errors(), "Form rejected");
    }

    println!("{}", form.open_tag());
    for field in form.fields() {
        println!("  {}", field.render_label());
        println!("  {}", field.render());
        if field.has_errors() {
            println!("  {}", field.render_errors());
        }
    }
    println!("{}", form.close_tag());

    let body = "email=ann%40example.com&password=correct-horse&terms=on";
    let cleaned = form.validate(&FormData::parse_urlencoded(body))?;
    println!("{}", serde_json::to_string_pretty(cleaned)?);

    Ok(())
}

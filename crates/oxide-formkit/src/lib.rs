//! # oxide-formkit
//!
//! Django-like HTML forms without a web framework.
//!
//! This crate provides:
//! - Fields with pluggable types and validators
//! - Binding of submitted form data and per-field error messages
//! - Cleaned, typed data once the whole form is valid
//! - Rendering of inputs, labels and error lists
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_formkit::{Field, FormBuilder, FormData};
//! use oxide_formkit::validation::{Email, Required};
//! use oxide_formkit::widgets::Input;
//!
//! let mut form = FormBuilder::new()
//!     .attr("method", "post")
//!     .field("name", Field::new().label("Name").validator(Required))
//!     .field(
//!         "email",
//!         Field::new()
//!             .label("Email")
//!             .field_type(Input::email())
//!             .validator(Required)
//!             .validator(Email),
//!     )
//!     .build();
//!
//! let data = FormData::parse_urlencoded("name=Ann&email=ann%40example.com");
//! assert!(form.is_valid(&data));
//!
//! let cleaned = form.cleaned_data().unwrap();
//! assert_eq!(cleaned["email"].as_str(), Some("ann@example.com"));
//! ```
//!
//! ## Errors
//!
//! ```rust
//! use oxide_formkit::{Field, FormBuilder, FormData};
//! use oxide_formkit::validation::MinLength;
//!
//! let mut form = FormBuilder::new()
//!     .field("password", Field::new().validator(MinLength::new(8)))
//!     .build();
//!
//! assert!(!form.is_valid(&FormData::new().with("password", "hunter2")));
//! assert!(form.cleaned_data().is_none());
//!
//! let field = form.field("password").unwrap();
//! assert!(field.has_errors());
//! assert!(field.render_errors().contains("at least 8 chars"));
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use oxide_formkit::{Field, FormBuilder};
//! use oxide_formkit::widgets::Radio;
//!
//! let form = FormBuilder::new()
//!     .attr("action", "/vote")
//!     .field(
//!         "color",
//!         Field::new()
//!             .label("Favourite color")
//!             .field_type(Radio)
//!             .choice("r", "Red")
//!             .choice("g", "Green"),
//!     )
//!     .build();
//!
//! let field = form.field("color").unwrap();
//! let html = format!(
//!     "{}{}{}{}",
//!     form.open_tag(),
//!     field.render_label(),
//!     field.render(),
//!     form.close_tag(),
//! );
//! assert!(html.starts_with(r#"<form action="/vote">"#));
//! assert!(html.contains(r#"id="c_color_g""#));
//! ```
//!
//! ## Field types
//!
//! - `Input` - text, email, password, date, time, datetime-local, month,
//!   week, url, tel and search inputs
//! - `InputNumber` - cleaned to an integer or float
//! - `Textarea` - multi-line text
//! - `Checkbox` - cleaned to a boolean
//! - `Radio` - a group of radio buttons, one per choice

mod data;
mod error;
mod field;
mod form;
mod messages;
pub mod validation;
mod value;
pub mod widgets;

pub use data::FormData;
pub use error::{FormError, Result, ValidationErrors};
pub use field::Field;
pub use form::{Form, FormBuilder};
pub use messages::{interpolate, Messages};
pub use value::{CleanedData, CleanedValue, InitialData, InitialValue};

//! # formgen
//!
//! HTML form markup built from small control factories and attribute
//! decorators.
//!
//! ## Features
//! - Select lists, plain inputs, radio buttons and radio groups
//! - Boolean attribute decorators (`autofocus`, `disabled`, `required`, `checked`)
//!   stackable in any order
//! - Per-call parameters merged against construction-time defaults
//! - YAML form definitions rendered into a complete `<form>`
//!
//! Markup is treated as opaque text and is not escaped: callers pass only
//! trusted names, labels and values.
//!
//! ## Example
//! ```ignore
//! use formgen::{ControlFactory, ControlFactoryExt, InputFactory, Params, RadioInputFactory};
//!
//! let radio = RadioInputFactory::with_default_value(InputFactory::new("starwars")).checked();
//! let html = radio.produce(&Params::new().with("value", "8")).expect("render radio");
//! assert!(html.as_str().contains("value='8'"));
//! ```

pub mod controls;
pub mod decorator;
pub mod definition;
pub mod driver;
pub mod envelope;
pub mod error;
pub mod factory;
pub mod inject;
pub mod markup;
pub mod params;
pub mod sample;

// --- Core types ---
pub use controls::{
    InputFactory, LabelValue, LabelValueList, RadioGroupFactory, RadioInputFactory,
    SelectDefaults, SelectFactory,
};
pub use decorator::{AttributeDecorator, BooleanAttribute};
pub use envelope::{FormEnvelope, FormMethod};
pub use error::{FormError, FormResult};
pub use factory::{BoxedFactory, ControlFactory, ControlFactoryExt};
pub use inject::inject;
pub use markup::Markup;
pub use params::{ParamValue, Params, SelectOption};

// --- Rendering ---
pub use definition::{Form, FormDefinition};
pub use driver::{FormGenerator, RenderDriver};
pub use sample::SamplePage;

/// Parse a YAML form definition and render it in one step
pub fn render_form(yaml: &str) -> FormResult<String> {
    definition::parse_form_definition(yaml)?.build()?.render()
}

/// Parse and validate a YAML form definition without rendering it
pub fn parse_form_definition(yaml: &str) -> FormResult<FormDefinition> {
    definition::parse_form_definition(yaml)
}

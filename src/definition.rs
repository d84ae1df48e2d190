//! YAML form definitions.
//!
//! A definition describes a whole form: envelope, fields in display order,
//! and the decorators each field's control is wrapped in. Decorators are
//! listed innermost first, so the last entry ends up nearest the `>`.
//! Field `params` are checked against the control when the form is built,
//! except on a `radio_group`, which ignores its params entirely.
//!
//! ```yaml
//! action: signup.php
//! method: POST
//! fields:
//!   - name: languages
//!     control:
//!       kind: select
//!       multiple_select: true
//!       visible_size: 3
//!       options:
//!         - { value: py, label: Python }
//!     decorators: [required, autofocus]
//! ```

use crate::controls::{
    InputFactory, LabelValueList, RadioGroupFactory, RadioInputFactory, SelectDefaults,
    SelectFactory,
};
use crate::decorator::{AttributeDecorator, BooleanAttribute};
use crate::driver::{FormGenerator, RenderDriver};
use crate::envelope::{FormEnvelope, FormMethod};
use crate::error::{FormError, FormResult};
use crate::factory::{BoxedFactory, ControlFactory, ControlFactoryExt};
use crate::params::{deserialize_text, Params, SelectOption};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub action: String,
    #[serde(default)]
    pub method: FormMethod,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Submitted variable name; also the control's `name` attribute
    pub name: String,
    pub control: ControlDefinition,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<BooleanAttribute>,
    /// Render-time parameters passed to the outermost factory
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub params: Params,
}

impl std::fmt::Debug for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlDefinition {
    Select {
        #[serde(default)]
        multiple_select: bool,
        #[serde(default = "default_visible_size")]
        visible_size: u32,
        #[serde(default)]
        multiple_return: bool,
        #[serde(default)]
        options: Vec<SelectOption>,
    },
    Input,
    Radio {
        #[serde(default = "default_radio_value", deserialize_with = "deserialize_text")]
        value: String,
    },
    RadioGroup {
        #[serde(default = "default_radio_value", deserialize_with = "deserialize_text")]
        value: String,
        options: LabelValueList,
        /// Decorators applied to every radio in the group
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        decorators: Vec<BooleanAttribute>,
    },
}

fn default_visible_size() -> u32 {
    1
}

fn default_radio_value() -> String {
    "0".to_string()
}

/// Definition as written, before the method string is checked
#[derive(Deserialize)]
struct RawFormDefinition {
    action: String,
    #[serde(default)]
    method: Option<String>,
    fields: Vec<FieldDefinition>,
}

impl RawFormDefinition {
    fn into_definition(self) -> FormResult<FormDefinition> {
        let method = match self.method {
            Some(method) => method.parse()?,
            None => FormMethod::default(),
        };
        Ok(FormDefinition {
            action: self.action,
            method,
            fields: self.fields,
        })
    }
}

/// Parse and validate a form definition
pub fn parse_form_definition(yaml: &str) -> FormResult<FormDefinition> {
    let raw: RawFormDefinition = serde_yaml::from_str(yaml)?;
    let definition = raw.into_definition()?;
    validate_definition(&definition)?;
    Ok(definition)
}

pub fn validate_definition(definition: &FormDefinition) -> FormResult<()> {
    if definition.action.trim().is_empty() {
        return Err(FormError::ValidationError(
            "Form action must not be empty".to_string(),
        ));
    }
    if definition.fields.is_empty() {
        return Err(FormError::EmptyForm);
    }

    let mut seen = HashSet::new();
    for field in &definition.fields {
        validate_field_name(&field.name)?;
        if !seen.insert(field.name.as_str()) {
            return Err(FormError::DuplicateField {
                name: field.name.clone(),
            });
        }
        validate_control(&field.name, &field.control)?;
    }
    Ok(())
}

fn validate_field_name(name: &str) -> FormResult<()> {
    static FIELD_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = FIELD_NAME_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_\-]*$").expect("valid field name regex"));

    if regex.is_match(name) {
        Ok(())
    } else {
        Err(FormError::InvalidFieldName {
            name: name.to_string(),
        })
    }
}

fn validate_control(name: &str, control: &ControlDefinition) -> FormResult<()> {
    match control {
        ControlDefinition::Select { visible_size, .. } if *visible_size == 0 => {
            Err(FormError::InvalidParameter {
                control: "select".to_string(),
                key: "visible_size".to_string(),
                expected: "an integer >= 1".to_string(),
            })
        }
        ControlDefinition::RadioGroup { options, .. } if options.is_empty() => Err(
            FormError::ValidationError(format!("Radio group '{}' has no options", name)),
        ),
        _ => Ok(()),
    }
}

/// A form whose factory graph has been built and is ready to render
#[derive(Debug)]
pub struct Form {
    envelope: FormEnvelope,
    fields: Vec<FormField>,
}

pub struct FormField {
    pub name: String,
    pub factory: BoxedFactory,
    pub params: Params,
}

impl FormDefinition {
    /// Validate and build the factory graph once; render as often as needed.
    ///
    /// Each field is produced once with its params, so unknown or mistyped
    /// params fail here rather than on the first render.
    pub fn build(&self) -> FormResult<Form> {
        validate_definition(self)?;

        let fields = self
            .fields
            .iter()
            .map(|field| {
                let factory =
                    decorate(build_control(&field.name, &field.control), &field.decorators);
                factory.produce(&field.params)?;
                Ok(FormField {
                    name: field.name.clone(),
                    factory,
                    params: field.params.clone(),
                })
            })
            .collect::<FormResult<Vec<_>>>()?;

        tracing::debug!(action = %self.action, fields = fields.len(), "built form");
        Ok(Form {
            envelope: FormEnvelope::new(self.action.clone(), self.method),
            fields,
        })
    }
}

fn build_control(name: &str, control: &ControlDefinition) -> BoxedFactory {
    match control {
        ControlDefinition::Select {
            multiple_select,
            visible_size,
            multiple_return,
            options,
        } => SelectFactory::new(SelectDefaults {
            multiple_select: *multiple_select,
            visible_size: *visible_size,
            multiple_return: *multiple_return,
            name: name.to_string(),
            options: options.clone(),
        })
        .boxed(),
        ControlDefinition::Input => InputFactory::new(name).boxed(),
        ControlDefinition::Radio { value } => {
            RadioInputFactory::new(InputFactory::new(name), value.clone()).boxed()
        }
        ControlDefinition::RadioGroup {
            value,
            options,
            decorators,
        } => {
            let template = decorate(
                RadioInputFactory::new(InputFactory::new(name), value.clone()).boxed(),
                decorators,
            );
            RadioGroupFactory::new(template, options.clone()).boxed()
        }
    }
}

fn decorate(factory: BoxedFactory, attributes: &[BooleanAttribute]) -> BoxedFactory {
    attributes.iter().fold(factory, |inner, attribute| {
        AttributeDecorator::new(inner, *attribute).boxed()
    })
}

impl Form {
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

impl FormGenerator for Form {
    fn generate(&self, driver: &mut RenderDriver) -> FormResult<()> {
        driver.form_begin(&self.envelope, None, None)?;
        driver.line_breaks()?;
        for field in &self.fields {
            tracing::trace!(field = %field.name, "rendering field");
            driver.control(field.factory.as_ref(), &field.params)?;
            driver.line_breaks()?;
        }
        driver.submit()?;
        driver.form_end()
    }
}

use crate::error::{FormError, FormResult};
use crate::factory::ControlFactory;
use crate::markup::Markup;
use crate::params::{resolve, Params, SelectOption};
use std::fmt::Write;

const CONTROL: &str = "select";
const KNOWN_KEYS: &[&str] = &[
    "multiple_select",
    "visible_size",
    "multiple_return",
    "name",
    "options",
];

/// Construction-time configuration of a select list
#[derive(Debug, Clone, PartialEq)]
pub struct SelectDefaults {
    /// Whether the user may pick several entries
    pub multiple_select: bool,
    /// Number of visible rows
    pub visible_size: u32,
    /// Whether the field posts as an array (`name[]`), independent of `multiple_select`
    pub multiple_return: bool,
    pub name: String,
    /// Entries in display order
    pub options: Vec<SelectOption>,
}

impl Default for SelectDefaults {
    fn default() -> Self {
        Self {
            multiple_select: false,
            visible_size: 1,
            multiple_return: false,
            name: String::new(),
            options: Vec::new(),
        }
    }
}

/// Per-call overrides for a select list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectRequest {
    pub multiple_select: Option<bool>,
    pub visible_size: Option<u32>,
    pub multiple_return: Option<bool>,
    pub name: Option<String>,
    pub options: Option<Vec<SelectOption>>,
}

impl SelectRequest {
    pub fn from_params(params: &Params) -> FormResult<Self> {
        params.ensure_known(CONTROL, KNOWN_KEYS)?;
        Ok(Self {
            multiple_select: params.bool(CONTROL, "multiple_select")?,
            visible_size: params.count(CONTROL, "visible_size")?,
            multiple_return: params.bool(CONTROL, "multiple_return")?,
            name: params.text(CONTROL, "name")?,
            options: params.options(CONTROL, "options")?,
        })
    }

    /// Fill every unset field from `defaults`
    pub fn merge(self, defaults: &SelectDefaults) -> SelectDefaults {
        SelectDefaults {
            multiple_select: resolve(self.multiple_select, &defaults.multiple_select),
            visible_size: resolve(self.visible_size, &defaults.visible_size),
            multiple_return: resolve(self.multiple_return, &defaults.multiple_return),
            name: resolve(self.name, &defaults.name),
            options: resolve(self.options, &defaults.options),
        }
    }
}

/// Renders a `<select>` list with its `<option>` entries
#[derive(Debug, Clone, Default)]
pub struct SelectFactory {
    defaults: SelectDefaults,
}

impl SelectFactory {
    pub fn new(defaults: SelectDefaults) -> Self {
        Self { defaults }
    }

    fn render(select: &SelectDefaults) -> FormResult<String> {
        if select.visible_size == 0 {
            return Err(FormError::InvalidParameter {
                control: CONTROL.to_string(),
                key: "visible_size".to_string(),
                expected: "an integer >= 1".to_string(),
            });
        }

        let mut html = String::from("<select ");
        if select.multiple_select {
            html.push_str("multiple ");
        }
        write!(
            html,
            "size=\"{}\" name=\"{}{}\">",
            select.visible_size,
            select.name,
            if select.multiple_return { "[]" } else { "" }
        )?;
        for option in &select.options {
            write!(
                html,
                "\n\t<option value=\"{}\">{}</option>",
                option.value, option.label
            )?;
        }
        html.push_str("\n</select>");
        Ok(html)
    }
}

impl ControlFactory for SelectFactory {
    fn produce(&self, params: &Params) -> FormResult<Markup> {
        let select = SelectRequest::from_params(params)?.merge(&self.defaults);
        Self::render(&select).map(Markup::from)
    }
}

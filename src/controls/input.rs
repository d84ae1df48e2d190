use crate::error::FormResult;
use crate::factory::ControlFactory;
use crate::markup::Markup;
use crate::params::{resolve, Params};

const CONTROL: &str = "input";

/// Per-call overrides for a plain input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputRequest {
    pub name: Option<String>,
}

impl InputRequest {
    pub fn from_params(params: &Params) -> FormResult<Self> {
        params.ensure_known(CONTROL, &["name"])?;
        Ok(Self {
            name: params.text(CONTROL, "name")?,
        })
    }
}

/// Renders a bare `<input name="...">`.
///
/// No `type` is emitted; wrappers such as [`RadioInputFactory`](super::RadioInputFactory)
/// add it.
#[derive(Debug, Clone, Default)]
pub struct InputFactory {
    name: String,
}

impl InputFactory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ControlFactory for InputFactory {
    fn produce(&self, params: &Params) -> FormResult<Markup> {
        let request = InputRequest::from_params(params)?;
        let name = resolve(request.name, &self.name);
        Ok(Markup::new(format!("<input name=\"{}\">", name)))
    }
}

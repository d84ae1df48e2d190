//! Boolean attribute decorators.
//!
//! A decorator owns the factory it wraps, forwards `produce` unchanged and
//! injects one attribute token into the result. Stacking is unrestricted and
//! the same attribute applied twice appears twice.

use crate::error::FormResult;
use crate::factory::ControlFactory;
use crate::inject::inject;
use crate::markup::Markup;
use crate::params::Params;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanAttribute {
    Autofocus,
    Disabled,
    Required,
    Checked,
}

impl BooleanAttribute {
    pub const ALL: [BooleanAttribute; 4] = [
        BooleanAttribute::Autofocus,
        BooleanAttribute::Disabled,
        BooleanAttribute::Required,
        BooleanAttribute::Checked,
    ];

    /// The attribute text injected into the opening tag
    pub fn token(self) -> &'static str {
        match self {
            BooleanAttribute::Autofocus => "autofocus",
            BooleanAttribute::Disabled => "disabled",
            BooleanAttribute::Required => "required",
            BooleanAttribute::Checked => "checked",
        }
    }
}

impl fmt::Display for BooleanAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Wraps a factory and adds one boolean attribute to everything it produces
#[derive(Debug, Clone)]
pub struct AttributeDecorator<F> {
    inner: F,
    attribute: BooleanAttribute,
}

impl<F> AttributeDecorator<F> {
    pub fn new(inner: F, attribute: BooleanAttribute) -> Self {
        Self { inner, attribute }
    }
}

impl<F: ControlFactory> ControlFactory for AttributeDecorator<F> {
    fn produce(&self, params: &Params) -> FormResult<Markup> {
        let markup = self.inner.produce(params)?;
        inject(&markup, self.attribute.token())
    }
}

pub fn autofocus<F: ControlFactory>(inner: F) -> AttributeDecorator<F> {
    AttributeDecorator::new(inner, BooleanAttribute::Autofocus)
}

pub fn disabled<F: ControlFactory>(inner: F) -> AttributeDecorator<F> {
    AttributeDecorator::new(inner, BooleanAttribute::Disabled)
}

pub fn required<F: ControlFactory>(inner: F) -> AttributeDecorator<F> {
    AttributeDecorator::new(inner, BooleanAttribute::Required)
}

pub fn checked<F: ControlFactory>(inner: F) -> AttributeDecorator<F> {
    AttributeDecorator::new(inner, BooleanAttribute::Checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{InputFactory, SelectDefaults, SelectFactory};
    use crate::error::FormError;
    use crate::factory::ControlFactoryExt;
    use pretty_assertions::assert_eq;

    struct Broken;

    impl ControlFactory for Broken {
        fn produce(&self, _params: &Params) -> FormResult<Markup> {
            Ok(Markup::from("not a tag"))
        }
    }

    #[test]
    fn test_decorator_adds_token() {
        let factory = disabled(InputFactory::new("login"));
        let html = factory.produce(&Params::new()).unwrap();
        assert_eq!(html.as_str(), "<input name=\"login\" disabled >");
    }

    #[test]
    fn test_distinct_decorators_both_present_in_any_order() {
        let select = || {
            SelectFactory::new(SelectDefaults {
                name: "hp".to_string(),
                ..Default::default()
            })
        };
        let a = autofocus(required(select())).produce(&Params::new()).unwrap();
        let b = required(autofocus(select())).produce(&Params::new()).unwrap();

        for html in [&a, &b] {
            let open_tag = &html.as_str()[..html.insertion_point().unwrap()];
            assert!(open_tag.contains("autofocus"));
            assert!(open_tag.contains("required"));
        }
        assert_ne!(a, b);
    }

    #[test]
    fn test_outermost_attribute_is_rightmost() {
        let html = InputFactory::new("q")
            .required()
            .autofocus()
            .produce(&Params::new())
            .unwrap();
        let required_at = html.as_str().find("required").unwrap();
        let autofocus_at = html.as_str().find("autofocus").unwrap();
        assert!(required_at < autofocus_at);
    }

    #[test]
    fn test_duplicate_decorator_duplicates_token() {
        let html = checked(checked(InputFactory::new("x")))
            .produce(&Params::new())
            .unwrap();
        assert_eq!(html.as_str().matches("checked").count(), 2);
    }

    #[test]
    fn test_decorator_forwards_params() {
        let html = InputFactory::new("default")
            .disabled()
            .produce(&Params::new().with("name", "override"))
            .unwrap();
        assert!(html.as_str().contains("name=\"override\""));
    }

    #[test]
    fn test_decorator_propagates_malformed_markup() {
        let result = required(Broken).produce(&Params::new());
        assert!(matches!(result, Err(FormError::MalformedMarkup { .. })));
    }

    #[test]
    fn test_attribute_tokens() {
        let tokens: Vec<_> = BooleanAttribute::ALL.iter().map(|a| a.token()).collect();
        assert_eq!(tokens, ["autofocus", "disabled", "required", "checked"]);
        assert_eq!(BooleanAttribute::Checked.to_string(), "checked");
    }
}

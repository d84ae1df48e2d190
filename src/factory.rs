use crate::decorator::{AttributeDecorator, BooleanAttribute};
use crate::error::FormResult;
use crate::markup::Markup;
use crate::params::Params;

/// Produces one control's markup from a parameter set.
///
/// Implementations are immutable after construction, so a factory graph can
/// be shared across threads once it is built.
pub trait ControlFactory: Send + Sync {
    fn produce(&self, params: &Params) -> FormResult<Markup>;
}

/// A type-erased factory, used when the graph shape is only known at runtime
pub type BoxedFactory = Box<dyn ControlFactory>;

impl<F: ControlFactory + ?Sized> ControlFactory for Box<F> {
    fn produce(&self, params: &Params) -> FormResult<Markup> {
        (**self).produce(params)
    }
}

impl<F: ControlFactory + ?Sized> ControlFactory for &F {
    fn produce(&self, params: &Params) -> FormResult<Markup> {
        (**self).produce(params)
    }
}

/// Builder helpers for wrapping a factory in attribute decorators
pub trait ControlFactoryExt: ControlFactory + Sized {
    fn decorate(self, attribute: BooleanAttribute) -> AttributeDecorator<Self> {
        AttributeDecorator::new(self, attribute)
    }

    fn autofocus(self) -> AttributeDecorator<Self> {
        self.decorate(BooleanAttribute::Autofocus)
    }

    fn disabled(self) -> AttributeDecorator<Self> {
        self.decorate(BooleanAttribute::Disabled)
    }

    fn required(self) -> AttributeDecorator<Self> {
        self.decorate(BooleanAttribute::Required)
    }

    fn checked(self) -> AttributeDecorator<Self> {
        self.decorate(BooleanAttribute::Checked)
    }

    fn boxed(self) -> BoxedFactory
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<F: ControlFactory> ControlFactoryExt for F {}

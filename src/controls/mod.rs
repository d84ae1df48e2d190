//! Concrete control factories.

mod input;
mod radio;
mod select;

pub use input::{InputFactory, InputRequest};
pub use radio::{LabelValue, LabelValueList, RadioGroupFactory, RadioInputFactory};
pub use select::{SelectDefaults, SelectFactory, SelectRequest};

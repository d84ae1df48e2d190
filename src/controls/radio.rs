use crate::error::FormResult;
use crate::factory::ControlFactory;
use crate::inject::inject;
use crate::markup::Markup;
use crate::params::{deserialize_text, Params};
use serde::{Deserialize, Serialize};

use super::InputFactory;

const CONTROL: &str = "radio";
const DEFAULT_VALUE: &str = "0";

/// Turns an input producer into a radio button.
///
/// The `value` parameter is consumed here and never forwarded to the wrapped
/// factory. `type=radio` and `value='...'` are injected in that order.
#[derive(Debug, Clone)]
pub struct RadioInputFactory<F = InputFactory> {
    inner: F,
    value: String,
}

impl<F> RadioInputFactory<F> {
    pub fn new(inner: F, value: impl Into<String>) -> Self {
        Self {
            inner,
            value: value.into(),
        }
    }

    /// Radio with the default submitted value `"0"`
    pub fn with_default_value(inner: F) -> Self {
        Self::new(inner, DEFAULT_VALUE)
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: ControlFactory> ControlFactory for RadioInputFactory<F> {
    fn produce(&self, params: &Params) -> FormResult<Markup> {
        let mut forwarded = params.clone();
        let value = match forwarded.remove("value") {
            Some(v) => v.into_text(CONTROL, "value")?,
            None => self.value.clone(),
        };

        let markup = self.inner.produce(&forwarded)?;
        let markup = inject(&markup, "type=radio")?;
        inject(&markup, &format!("value='{}'", value))
    }
}

/// One radio entry: visible label and submitted value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelValue {
    pub label: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub value: String,
}

/// Ordered label/value pairs; insertion order is rendering order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelValueList(Vec<LabelValue>);

impl LabelValueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.0.push(LabelValue {
            label: label.into(),
            value: value.into(),
        });
    }

    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(label, value);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabelValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for LabelValueList {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (label, value) in iter {
            list.push(label, value);
        }
        list
    }
}

impl FromIterator<LabelValue> for LabelValueList {
    fn from_iter<I: IntoIterator<Item = LabelValue>>(iter: I) -> Self {
        LabelValueList(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LabelValueList {
    type Item = &'a LabelValue;
    type IntoIter = std::slice::Iter<'a, LabelValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders one radio per label/value pair from a shared template.
///
/// The group is fixed at construction: `produce` ignores its parameters.
#[derive(Debug, Clone)]
pub struct RadioGroupFactory<F> {
    template: F,
    entries: LabelValueList,
}

impl<F> RadioGroupFactory<F> {
    pub fn new(template: F, entries: LabelValueList) -> Self {
        Self { template, entries }
    }
}

impl<F: ControlFactory> ControlFactory for RadioGroupFactory<F> {
    fn produce(&self, _params: &Params) -> FormResult<Markup> {
        let mut html = String::new();
        for entry in &self.entries {
            let radio = self
                .template
                .produce(&Params::new().with("value", entry.value.as_str()))?;
            html.push_str(radio.as_str());
            html.push_str(&entry.label);
            html.push_str("<br>\n");
        }
        Ok(Markup::from(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::checked;
    use crate::error::FormError;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records the parameters it receives
    struct Recorder {
        seen: Mutex<Vec<Params>>,
    }

    impl ControlFactory for Recorder {
        fn produce(&self, params: &Params) -> FormResult<Markup> {
            self.seen.lock().unwrap().push(params.clone());
            Ok(Markup::from("<input>"))
        }
    }

    fn star_wars() -> LabelValueList {
        LabelValueList::new()
            .with("The Force Awakens", "7")
            .with("The Last Jedi", "8")
            .with("The Rise of Skywalker", "9")
    }

    #[test]
    fn test_radio_default_value() {
        let radio = RadioInputFactory::with_default_value(InputFactory::new("starwars"));
        let html = radio.produce(&Params::new()).unwrap();
        assert_eq!(html.as_str(), "<input name=\"starwars\" type=radio  value='0' >");
    }

    #[test]
    fn test_radio_value_override_not_forwarded() {
        let radio = RadioInputFactory::new(
            Recorder {
                seen: Mutex::new(Vec::new()),
            },
            "0",
        );
        let html = radio
            .produce(&Params::new().with("value", "9").with("extra", true))
            .unwrap();

        assert!(html.as_str().contains("value='9'"));
        let seen = radio.inner().seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(!seen[0].contains_key("value"));
        assert!(seen[0].contains_key("extra"));
    }

    #[test]
    fn test_radio_accepts_integer_value() {
        let radio = RadioInputFactory::with_default_value(InputFactory::new("n"));
        let html = radio.produce(&Params::new().with("value", 8i64)).unwrap();
        assert!(html.as_str().contains("value='8'"));
    }

    #[test]
    fn test_radio_rejects_boolean_value() {
        let radio = RadioInputFactory::with_default_value(InputFactory::new("n"));
        let result = radio.produce(&Params::new().with("value", true));
        assert!(matches!(result, Err(FormError::InvalidParameter { .. })));
    }

    #[test]
    fn test_checked_radio_attribute_order() {
        let radio = checked(RadioInputFactory::with_default_value(InputFactory::new(
            "starwars",
        )));
        let html = radio.produce(&Params::new().with("value", "8")).unwrap();
        let text = html.as_str();

        let type_at = text.find("type=radio").unwrap();
        let value_at = text.find("value='8'").unwrap();
        let checked_at = text.find("checked").unwrap();
        assert!(type_at < value_at && value_at < checked_at);
    }

    #[test]
    fn test_group_preserves_order_and_labels() {
        let template = checked(RadioInputFactory::with_default_value(InputFactory::new(
            "starwars",
        )));
        let group = RadioGroupFactory::new(template, star_wars());
        let html = group.produce(&Params::new()).unwrap();
        let lines: Vec<&str> = html.as_str().lines().collect();

        assert_eq!(lines.len(), 3);
        for (line, (value, label)) in lines.iter().zip([
            ("7", "The Force Awakens"),
            ("8", "The Last Jedi"),
            ("9", "The Rise of Skywalker"),
        ]) {
            let radio_end = line.find('>').unwrap() + 1;
            assert!(line[..radio_end].contains(&format!("value='{}'", value)));
            assert_eq!(&line[radio_end..], format!("{}<br>", label));
        }
    }

    #[test]
    fn test_group_ignores_params() {
        let group = RadioGroupFactory::new(
            RadioInputFactory::with_default_value(InputFactory::new("sw")),
            star_wars(),
        );
        let plain = group.produce(&Params::new()).unwrap();
        let with_junk = group
            .produce(&Params::new().with("name", "other").with("bogus", 1i64))
            .unwrap();
        assert_eq!(plain, with_junk);
    }

    #[test]
    fn test_empty_group_renders_nothing() {
        let group = RadioGroupFactory::new(
            RadioInputFactory::with_default_value(InputFactory::new("sw")),
            LabelValueList::new(),
        );
        assert!(group.produce(&Params::new()).unwrap().is_empty());
    }
}

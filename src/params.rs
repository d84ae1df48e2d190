use crate::error::{FormError, FormResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A single `<option>` entry of a select list: submitted value and visible label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(deserialize_with = "deserialize_text")]
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A parameter value passed to a factory at render time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Text(String),
    Options(Vec<SelectOption>),
}

impl ParamValue {
    /// Text value; integers are accepted and rendered in decimal
    pub fn into_text(self, control: &str, key: &str) -> FormResult<String> {
        match self {
            ParamValue::Text(s) => Ok(s),
            ParamValue::Int(n) => Ok(n.to_string()),
            _ => Err(invalid(control, key, "a string")),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Int(i64::from(v))
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<Vec<SelectOption>> for ParamValue {
    fn from(v: Vec<SelectOption>) -> Self {
        ParamValue::Options(v)
    }
}

/// Named parameters for one `produce` call.
///
/// Keys are unique. A key that is absent means "use the factory default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject the first key (in sorted order) that `control` does not understand
    pub fn ensure_known(&self, control: &str, known: &[&str]) -> FormResult<()> {
        match self.keys().find(|key| !known.contains(key)) {
            Some(key) => Err(FormError::UnknownParameter {
                control: control.to_string(),
                key: key.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn bool(&self, control: &str, key: &str) -> FormResult<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(ParamValue::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(invalid(control, key, "a boolean")),
        }
    }

    pub fn text(&self, control: &str, key: &str) -> FormResult<Option<String>> {
        self.get(key)
            .cloned()
            .map(|v| v.into_text(control, key))
            .transpose()
    }

    /// A strictly positive count, e.g. a select's visible size
    pub fn count(&self, control: &str, key: &str) -> FormResult<Option<u32>> {
        match self.get(key) {
            None => Ok(None),
            Some(ParamValue::Int(n)) => match u32::try_from(*n) {
                Ok(n) if n >= 1 => Ok(Some(n)),
                _ => Err(invalid(control, key, "an integer >= 1")),
            },
            Some(_) => Err(invalid(control, key, "an integer >= 1")),
        }
    }

    pub fn options(&self, control: &str, key: &str) -> FormResult<Option<Vec<SelectOption>>> {
        match self.get(key) {
            None => Ok(None),
            Some(ParamValue::Options(opts)) => Ok(Some(opts.clone())),
            Some(_) => Err(invalid(control, key, "a list of {value, label} options")),
        }
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrInt {
    Text(String),
    Int(i64),
}

/// Deserialize a submitted value written either as text or as an integer
pub fn deserialize_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match TextOrInt::deserialize(deserializer)? {
        TextOrInt::Text(s) => s,
        TextOrInt::Int(n) => n.to_string(),
    })
}

/// Merge rule shared by every factory: a requested value wins, otherwise the default
pub fn resolve<T: Clone>(requested: Option<T>, default: &T) -> T {
    requested.unwrap_or_else(|| default.clone())
}

fn invalid(control: &str, key: &str, expected: &str) -> FormError {
    FormError::InvalidParameter {
        control: control.to_string(),
        key: key.to_string(),
        expected: expected.to_string(),
    }
}

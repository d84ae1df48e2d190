use crate::error::FormError;
use crate::markup::Markup;
use crate::params::resolve;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP method a form submits with.
///
/// Parsed case-insensitively through [`FromStr`], from code and from YAML alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormMethod {
    #[default]
    Get,
    Post,
}

impl FormMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            FormMethod::Get => "GET",
            FormMethod::Post => "POST",
        }
    }
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormMethod {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(FormMethod::Get),
            "POST" => Ok(FormMethod::Post),
            _ => Err(FormError::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FormMethod {
    type Error = FormError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FormMethod> for String {
    fn from(method: FormMethod) -> Self {
        method.as_str().to_string()
    }
}

/// Opening and closing `<form>` tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEnvelope {
    action: String,
    method: FormMethod,
}

impl FormEnvelope {
    pub fn new(action: impl Into<String>, method: FormMethod) -> Self {
        Self {
            action: action.into(),
            method,
        }
    }

    pub fn get(action: impl Into<String>) -> Self {
        Self::new(action, FormMethod::Get)
    }

    pub fn post(action: impl Into<String>) -> Self {
        Self::new(action, FormMethod::Post)
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn method(&self) -> FormMethod {
        self.method
    }

    /// `<form action='A' method='M'>`, with per-call overrides
    pub fn begin(&self, action: Option<&str>, method: Option<FormMethod>) -> Markup {
        let action = resolve(action.map(str::to_string), &self.action);
        let method = resolve(method, &self.method);
        Markup::new(format!("<form action='{}' method='{}'>", action, method))
    }

    pub fn end() -> Markup {
        Markup::from("</form>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_uses_defaults() {
        let envelope = FormEnvelope::get("work_test.php");
        assert_eq!(
            envelope.begin(None, None).as_str(),
            "<form action='work_test.php' method='GET'>"
        );
    }

    #[test]
    fn test_begin_overrides() {
        let envelope = FormEnvelope::get("work_test.php");
        assert_eq!(
            envelope.begin(Some("submit.php"), Some(FormMethod::Post)).as_str(),
            "<form action='submit.php' method='POST'>"
        );
        assert_eq!(
            envelope.begin(None, Some(FormMethod::Post)).as_str(),
            "<form action='work_test.php' method='POST'>"
        );
    }

    #[test]
    fn test_end_is_constant() {
        assert_eq!(FormEnvelope::end().as_str(), "</form>");
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("post".parse::<FormMethod>().unwrap(), FormMethod::Post);
        assert_eq!("GET".parse::<FormMethod>().unwrap(), FormMethod::Get);
        assert!(matches!(
            "PATCH".parse::<FormMethod>(),
            Err(FormError::InvalidMethod { .. })
        ));
    }

    #[test]
    fn test_method_yaml_matches_from_str() {
        let method: FormMethod = serde_yaml::from_str("post").unwrap();
        assert_eq!(method, FormMethod::Post);
        assert_eq!(serde_yaml::to_string(&FormMethod::Get).unwrap().trim(), "GET");
        assert!(serde_yaml::from_str::<FormMethod>("DELETE").is_err());
    }
}

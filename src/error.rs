use thiserror::Error;

pub type FormResult<T> = Result<T, FormError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Malformed markup: no '>' insertion point found in '{markup}'")]
    MalformedMarkup { markup: String },

    #[error("Unknown parameter '{key}' for control '{control}'")]
    UnknownParameter { control: String, key: String },

    #[error("Invalid value for parameter '{key}' of control '{control}': expected {expected}")]
    InvalidParameter {
        control: String,
        key: String,
        expected: String,
    },

    #[error("Invalid form method '{method}'. Expected one of: GET, POST")]
    InvalidMethod { method: String },

    // --- form definition errors ---

    #[error("Invalid field name '{name}': must start with a letter or '_' and contain only letters, digits, '_' or '-'")]
    InvalidFieldName { name: String },

    #[error("Duplicate field '{name}': field names must be unique within a form")]
    DuplicateField { name: String },

    #[error("Empty form: no fields defined")]
    EmptyForm,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("YAML error: {0}")]
    YamlError(String),

    #[error("Write error: {0}")]
    Write(String),
}

impl From<serde_yaml::Error> for FormError {
    fn from(err: serde_yaml::Error) -> Self {
        FormError::YamlError(err.to_string())
    }
}

impl From<std::fmt::Error> for FormError {
    fn from(err: std::fmt::Error) -> Self {
        FormError::Write(err.to_string())
    }
}

impl From<std::io::Error> for FormError {
    fn from(err: std::io::Error) -> Self {
        FormError::Write(err.to_string())
    }
}

use std::error::Error;
use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    NoWindow,
    NoDocument,
    NotACanvas(String),
    ContextUnavailable(String),
    InvalidOption(String),
    Js(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NoWindow => write!(f, "no global window"),
            FieldError::NoDocument => write!(f, "window has no document"),
            FieldError::NotACanvas(id) => write!(f, "element '{}' is not a canvas", id),
            FieldError::ContextUnavailable(id) => {
                write!(f, "canvas '{}' has no 2d rendering context", id)
            }
            FieldError::InvalidOption(reason) => write!(f, "invalid option: {}", reason),
            FieldError::Js(message) => write!(f, "javascript error: {}", message),
        }
    }
}

impl Error for FieldError {}

impl From<JsValue> for FieldError {
    fn from(value: JsValue) -> Self {
        FieldError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<FieldError> for JsValue {
    fn from(err: FieldError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

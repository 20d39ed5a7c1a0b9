// src/theme/mod.rs — Theme data model
//
// A theme is whatever JSON object the generator produced. It is forwarded to
// the API verbatim; the typed structs below only describe the shape the
// built-in mock produces.

pub mod extract;
pub mod mock;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub use extract::{extract_json_span, parse_theme};

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("no JSON object found in response")]
    NoJson,

    #[error("malformed JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("response JSON is not an object")]
    NotAnObject,
}

/// A parsed, untrusted theme object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(Map<String, Value>);

impl Theme {
    pub fn from_value(value: Value) -> Result<Self, ThemeError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ThemeError::NotAnObject),
        }
    }

    /// The `name` field, when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn styles(&self) -> Option<&Value> {
        self.0.get("styles")
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Name for log lines; falls back to a placeholder for unnamed themes.
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or("<unnamed>")
    }
}

/// Light or dark base appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeType {
    Light,
    Dark,
}

/// Token name → HSL triplet (e.g. `"240 10% 3.9%"`), in insertion order.
pub type ColorTokens = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSchemes {
    pub light: ColorTokens,
    pub dark: ColorTokens,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeStyles {
    #[serde(rename = "type")]
    pub scheme_type: SchemeType,
    pub css: String,
    pub colors: ColorSchemes,
    /// Corner radius in rem.
    pub radius: f64,
}

/// Typed form of a theme, used when this program authors one itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    pub name: String,
    pub styles: ThemeStyles,
}

//! Loosely typed feature attributes.
//!
//! Attribute values come from the input file as strings, numbers or booleans, and the style rules need them as
//! specific types. Instead of asserting the type at the point of use, every conversion goes through a parse function
//! that reports a typed [`AttributeError`].

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Attribute of a feature.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// String value.
    String(String),
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// Explicit `null`. Treated the same way as a missing attribute.
    Null,
}

/// Set of named attributes of a feature.
pub type Attributes = HashMap<String, AttributeValue>;

/// Error returned when an attribute value cannot be interpreted as the required type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttributeError {
    /// Value is not an integer.
    #[error("attribute '{key}' is not an integer: {value}")]
    NotInteger {
        /// Name of the attribute.
        key: String,
        /// Value of the attribute.
        value: AttributeValue,
    },
    /// Value is not a boolean.
    #[error("attribute '{key}' is not a boolean: {value}")]
    NotBool {
        /// Name of the attribute.
        key: String,
        /// Value of the attribute.
        value: AttributeValue,
    },
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::String(v) => write!(f, "'{v}'"),
            AttributeValue::Number(v) => write!(f, "{v}"),
            AttributeValue::Bool(v) => write!(f, "{v}"),
            AttributeValue::Null => write!(f, "null"),
        }
    }
}

impl AttributeValue {
    /// Returns the value as an integer.
    ///
    /// Strings are parsed (surrounding whitespace is ignored), numbers must have no fractional part.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::String(s) => s.trim().parse().ok(),
            AttributeValue::Number(v) if v.fract() == 0.0 && v.is_finite() => Some(*v as i64),
            _ => None,
        }
    }

    /// Returns the value as a boolean.
    ///
    /// Accepted strings are `1`, `t`, `T`, `TRUE`, `true`, `True` and their negative counterparts `0`, `f`, `F`,
    /// `FALSE`, `false`, `False`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(v) => Some(*v),
            AttributeValue::String(s) => match s.as_str() {
                "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
                "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&serde_json::Value> for AttributeValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(v) => Self::Bool(*v),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => Self::String(s.clone()),
            nested => Self::String(nested.to_string()),
        }
    }
}

/// Returns the attribute with the given name, or `None` if it is missing or `null`.
pub fn get_attribute<'a>(attributes: &'a Attributes, key: &str) -> Option<&'a AttributeValue> {
    attributes
        .get(key)
        .filter(|value| **value != AttributeValue::Null)
}

/// Reads an integer attribute.
///
/// Returns `Ok(None)` if the attribute is absent and an error if it is present but is not an integer.
pub fn parse_integer(attributes: &Attributes, key: &str) -> Result<Option<i64>, AttributeError> {
    get_attribute(attributes, key)
        .map(|value| {
            value.as_integer().ok_or_else(|| AttributeError::NotInteger {
                key: key.to_string(),
                value: value.clone(),
            })
        })
        .transpose()
}

/// Reads a boolean attribute.
///
/// Returns `Ok(None)` if the attribute is absent and an error if it is present but is not a boolean.
pub fn parse_bool(attributes: &Attributes, key: &str) -> Result<Option<bool>, AttributeError> {
    get_attribute(attributes, key)
        .map(|value| {
            value.as_bool().ok_or_else(|| AttributeError::NotBool {
                key: key.to_string(),
                value: value.clone(),
            })
        })
        .transpose()
}

/// Creates an [`Attributes`] map from `key => value` pairs.
///
/// ```
/// use geopaint::attributes;
///
/// let attributes = attributes!("admin_level" => "2", "road" => true);
/// assert_eq!(attributes.len(), 2);
/// ```
#[macro_export]
macro_rules! attributes {
    () => {
        $crate::Attributes::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attributes = $crate::Attributes::new();
        $(attributes.insert($key.to_string(), $crate::AttributeValue::from($value));)+
        attributes
    }};
}

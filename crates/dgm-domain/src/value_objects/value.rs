//! Converted token values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed value produced by a value converter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConvertedValue {
    /// Whole number
    Integer(i64),
    /// Floating point number
    Number(f64),
    /// Boolean
    Boolean(bool),
    /// Text
    String(String),
}

impl ConvertedValue {
    /// Borrow the text of a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer value, if any
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Boolean value, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ConvertedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for ConvertedValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConvertedValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ConvertedValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for ConvertedValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

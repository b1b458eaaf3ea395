//! Typed cell values

use crate::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell value converted from its raw text
///
/// Only scalar column types have a typed value; text is always read verbatim
/// from the entry itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypedValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl TypedValue {
    /// Parse `text` as a literal of `data_type`
    ///
    /// Returns `None` for non-scalar types and for text that is not a valid literal.
    pub fn parse(data_type: DataType, text: &str) -> Option<Self> {
        match data_type {
            DataType::Integer => parse_integer(text).map(Self::Integer),
            DataType::Float => parse_float(text).map(Self::Float),
            DataType::Bool => parse_bool(text).map(Self::Bool),
            _ => None,
        }
    }

    /// The data type this value was parsed as
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Integer(_) => DataType::Integer,
            Self::Float(_) => DataType::Float,
            Self::Bool(_) => DataType::Bool,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// Parse a signed decimal integer, ignoring surrounding whitespace
pub fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Parse a floating point literal, ignoring surrounding whitespace
pub fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Parse `true` or `false` in any casing, ignoring surrounding whitespace
pub fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

//! Column data types

use hycsv_diagnostics::{ErrorCode, HYC0201, HYC0202, HYC0203};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Declared data type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataType {
    /// Not declared; conversions to any type are attempted
    #[default]
    Unknown,
    /// Text
    Text,
    /// Integer
    Integer,
    /// Floating point
    Float,
    /// Boolean
    Bool,
    /// List of values, encoded as `item1|item2|item3`
    Array,
    /// Key/value pairs, encoded as `key:value|key:value`
    Dictionary,
}

/// Declaration prefixes, checked in order
const DECLARATIONS: [(&str, DataType); 6] = [
    ("int", DataType::Integer),
    ("float", DataType::Float),
    ("bool", DataType::Bool),
    ("text", DataType::Text),
    ("array", DataType::Array),
    ("map", DataType::Dictionary),
];

impl DataType {
    /// Parse a type declaration cell such as `int`, `Float32` or `map<string,int>`
    ///
    /// Matching is by case-insensitive prefix; anything unrecognized is `Unknown`.
    pub fn from_declaration(decl: &str) -> Self {
        DECLARATIONS
            .iter()
            .find(|(prefix, _)| {
                decl.get(..prefix.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
            })
            .map(|(_, data_type)| *data_type)
            .unwrap_or(DataType::Unknown)
    }

    /// The canonical declaration keyword for this type
    pub const fn declaration(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Text => "text",
            Self::Integer => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Array => "array",
            Self::Dictionary => "map",
        }
    }

    /// Get the simple name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Text => "Text",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Bool => "Bool",
            Self::Array => "Array",
            Self::Dictionary => "Dictionary",
        }
    }

    /// Check if entries of this type can be converted into a cached typed value
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Bool)
    }

    /// Check if a column declared as `self` accepts a conversion to `requested`
    pub fn accepts(&self, requested: DataType) -> bool {
        *self == requested || *self == DataType::Unknown
    }

    /// Error code reported when text is not a literal of this type
    pub const fn literal_error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Integer => Some(HYC0201),
            Self::Float => Some(HYC0202),
            Self::Bool => Some(HYC0203),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_declaration(s))
    }
}

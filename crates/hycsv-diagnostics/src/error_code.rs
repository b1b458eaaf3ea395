//! hycsv error codes following a structured numbering system
//!
//! Error code ranges:
//! - HYC0001-HYC0099: Input errors (text cannot be resolved into a table)
//! - HYC0100-HYC0199: Lookup errors (columns, titles)
//! - HYC0200-HYC0299: Conversion errors (typed entry access)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is an input error (0001-0099)
    pub const fn is_input_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a lookup error (0100-0199)
    pub const fn is_lookup_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a conversion error (0200-0299)
    pub const fn is_conversion_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HYC{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Input errors (0001-0099)
    map.insert(1, ErrorInfo::new("Missing header line"));
    map.insert(
        2,
        ErrorInfo::new("Missing type declaration line")
            .with_help("Typed tables declare column types on the second line, e.g. `int,text,float`"),
    );
    map.insert(3, ErrorInfo::new("Row length differs from header"));
    map.insert(4, ErrorInfo::new("Unrecognized type declaration"));

    // Lookup errors (0100-0199)
    map.insert(
        100,
        ErrorInfo::new("Column not found")
            .with_help("Column names are matched against the header line"),
    );

    // Conversion errors (0200-0299)
    map.insert(
        200,
        ErrorInfo::new("Invalid cast")
            .with_help("The column declares a different data type; change it with set_column_type"),
    );
    map.insert(201, ErrorInfo::new("Invalid integer literal"));
    map.insert(202, ErrorInfo::new("Invalid float literal"));
    map.insert(203, ErrorInfo::new("Invalid bool literal"));

    map
});

// Input errors
pub const HYC0001: ErrorCode = ErrorCode::new(1);
pub const HYC0002: ErrorCode = ErrorCode::new(2);
pub const HYC0003: ErrorCode = ErrorCode::new(3);
pub const HYC0004: ErrorCode = ErrorCode::new(4);

// Lookup errors
pub const HYC0100: ErrorCode = ErrorCode::new(100);

// Conversion errors
pub const HYC0200: ErrorCode = ErrorCode::new(200);
pub const HYC0201: ErrorCode = ErrorCode::new(201);
pub const HYC0202: ErrorCode = ErrorCode::new(202);
pub const HYC0203: ErrorCode = ErrorCode::new(203);

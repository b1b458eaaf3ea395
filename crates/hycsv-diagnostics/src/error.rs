//! hycsv error types

use crate::{CellLocation, ErrorCode, HYC0100, HYC0200};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - the value cannot be used
    Error,
    /// Warning - tolerated, but probably not what the author meant
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with location and context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: ErrorCode,
    pub message: String,
    pub location: Option<CellLocation>,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            location: None,
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            location: None,
            help: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: CellLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render with terminal colors
    #[cfg(feature = "colored")]
    pub fn render_colored(&self) -> String {
        use colored::Colorize;

        let severity = match self.severity {
            Severity::Error => self.severity.to_string().red().bold(),
            Severity::Warning => self.severity.to_string().yellow().bold(),
        };
        let mut out = format!("{}[{}]: {}", severity, self.code, self.message);
        if let Some(loc) = &self.location {
            out.push_str(&format!(" {} {}", "at".dimmed(), loc.to_string().cyan()));
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".green(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        Ok(())
    }
}

/// Main hycsv error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsvError {
    /// A referenced column name does not exist
    #[error("{code}: can not find column with title: {column}")]
    NotFound { code: ErrorCode, column: String },

    /// The column's declared type is incompatible with the requested conversion
    #[error("{code}: can not cast entry at {location} to {requested} (column is {declared})")]
    InvalidCast {
        code: ErrorCode,
        location: CellLocation,
        requested: String,
        declared: String,
    },

    /// The entry's text is not a literal of the requested type
    #[error("{code}: '{content}' at {location} is not a valid {requested}")]
    Format {
        code: ErrorCode,
        location: CellLocation,
        requested: String,
        content: String,
    },

    /// The text cannot be resolved into a table
    #[error("{code}: {message}")]
    MalformedInput { code: ErrorCode, message: String },
}

impl CsvError {
    /// Create a column-not-found error
    pub fn not_found(column: impl Into<String>) -> Self {
        Self::NotFound {
            code: HYC0100,
            column: column.into(),
        }
    }

    /// Create an invalid-cast error
    pub fn invalid_cast(
        location: CellLocation,
        requested: impl Into<String>,
        declared: impl Into<String>,
    ) -> Self {
        Self::InvalidCast {
            code: HYC0200,
            location,
            requested: requested.into(),
            declared: declared.into(),
        }
    }

    /// Create a format error
    pub fn format(
        code: ErrorCode,
        location: CellLocation,
        requested: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::Format {
            code,
            location,
            requested: requested.into(),
            content: content.into(),
        }
    }

    /// Create a malformed-input error
    pub fn malformed(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            code,
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { code, .. } => *code,
            Self::InvalidCast { code, .. } => *code,
            Self::Format { code, .. } => *code,
            Self::MalformedInput { code, .. } => *code,
        }
    }

    /// Get the cell location if available
    pub fn location(&self) -> Option<CellLocation> {
        match self {
            Self::InvalidCast { location, .. } | Self::Format { location, .. } => Some(*location),
            _ => None,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code(), self.to_string());
        if let Some(loc) = self.location() {
            diag = diag.with_location(loc);
        }
        if let Some(help) = self.code().info().help {
            diag = diag.with_help(help);
        }
        diag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HYC0001, HYC0201};

    #[test]
    fn test_not_found_message() {
        let err = CsvError::not_found("level");
        assert_eq!(err.code(), HYC0100);
        assert!(err.to_string().contains("level"));
        assert!(err.location().is_none());
    }

    #[test]
    fn test_invalid_cast_names_requested_type() {
        let err = CsvError::invalid_cast(CellLocation::new(2, 1), "Bool", "Integer");
        let msg = err.to_string();
        assert!(msg.contains("Bool"));
        assert!(msg.contains("2:1"));
        assert_eq!(err.location(), Some(CellLocation::new(2, 1)));
    }

    #[test]
    fn test_to_diagnostic() {
        let diag = CsvError::format(HYC0201, CellLocation::new(1, 0), "Integer", "abc")
            .to_diagnostic();
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.code, HYC0201);
        assert_eq!(diag.location, Some(CellLocation::new(1, 0)));
        assert!(diag.to_string().contains("HYC0201"));
    }

    #[test]
    fn test_malformed_without_help() {
        let diag = CsvError::malformed(HYC0001, "no header line").to_diagnostic();
        assert!(diag.help.is_none());
        assert!(diag.message.contains("no header line"));
    }
}

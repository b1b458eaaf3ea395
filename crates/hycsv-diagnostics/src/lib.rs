//! hycsv diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the table,
//! resolver and reader crates: error kinds, error codes, cell locations and
//! diagnostic reporting.

mod error;
mod error_code;
mod location;

pub use error::*;
pub use error_code::*;
pub use location::*;

/// Result type for hycsv operations
pub type Result<T> = std::result::Result<T, CsvError>;

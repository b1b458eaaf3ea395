//! Column-typed tables loaded from delimited text
//!
//! This crate ties the hycsv crates together:
//! - `Reader`, the entry point turning text into a [`Table`]
//! - Table, row and entry queries with lazily typed values
//! - Simple (header only) and typed (header plus type row) resolvers
//!
//! # Example
//!
//! ```
//! use hycsv::{DataType, Reader};
//!
//! let text = "id,name,level\nint,text,int\n10,张三10,110";
//! let table = Reader::typed().load_table(text)?.expect("non-empty text");
//!
//! assert_eq!(table.column_type("level")?, DataType::Integer);
//! let row = table.find_first_row(|row| {
//!     row.entry_by_name("id").is_some_and(|id| id.content() == "10")
//! });
//! assert_eq!(row.unwrap().entry_by_name("level").unwrap().to_integer()?, 110);
//! # Ok::<(), hycsv::CsvError>(())
//! ```

mod reader;

// Re-export all public APIs from internal crates
pub use hycsv_diagnostics as diagnostics;
pub use hycsv_resolver as resolver;
pub use hycsv_table as table;
pub use hycsv_types as types;

// Convenience re-exports
pub use hycsv_diagnostics::{CsvError, Result};
pub use hycsv_resolver::{ResolveMode, Resolver, ResolverOptions, TableResolver};
pub use hycsv_table::{EntryRef, RowRef, Table, Title};
pub use hycsv_types::{DataType, TypedValue};
pub use reader::Reader;

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;

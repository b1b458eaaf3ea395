//! hycsv resolvers
//!
//! A resolver turns a complete text buffer into a [`Table`]. Line 1 always holds
//! the column titles; the typed mode additionally consumes line 2 as the column
//! type declarations. Every following line becomes one data row.
//!
//! ```
//! use hycsv_resolver::{Resolver, TableResolver};
//!
//! let mut resolver = TableResolver::typed();
//! let table = resolver.resolve("id,attack\nint,float\n1,2.5")?;
//! assert_eq!(table.row(0).unwrap().entry_by_name("attack").unwrap().to_float()?, 2.5);
//! # Ok::<(), hycsv_diagnostics::CsvError>(())
//! ```

mod lines;
mod options;
mod resolver;
mod steps;

pub use lines::Lines;
pub use options::*;
pub use resolver::*;
pub use steps::HeaderStep;

use hycsv_diagnostics::Result;
use hycsv_table::Table;

/// Strategy turning raw text into a table
pub trait Resolver {
    /// Resolve `text` into a new table, replacing any previously resolved one
    fn resolve(&mut self, text: &str) -> Result<&Table>;

    /// The most recently resolved table
    fn table(&self) -> Option<&Table>;

    /// Hand the most recently resolved table over to the caller
    fn take_table(&mut self) -> Option<Table>;
}

//! hycsv table model
//!
//! This crate provides:
//! - `Table`, the owner of titles and rows, with lookup and query operations
//! - `Title`, a column's name and declared data type
//! - `Row` and `Entry` storage, accessed through the borrowed `RowRef` / `EntryRef` views
//! - Title naming strategies used to derive and match column names

pub mod entry;
pub mod naming;
pub mod row;
pub mod table;
pub mod title;

pub use entry::*;
pub use naming::*;
pub use row::*;
pub use table::*;
pub use title::*;

//! hycsv type system
//!
//! This crate defines:
//! - Column data types and the declaration parser used by typed tables
//! - Typed cell values and literal parsing

pub mod data_type;
pub mod value;

pub use data_type::*;
pub use value::*;

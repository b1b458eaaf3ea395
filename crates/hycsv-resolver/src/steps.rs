//! Resolution steps
//!
//! Every mode runs its header steps in order, then turns the remaining lines into
//! data rows. Data row indices start at the number of header lines consumed.

use crate::{Lines, ResolverOptions};
use hycsv_diagnostics::{CsvError, HYC0001, HYC0002, Result};
use hycsv_table::Table;
use hycsv_types::DataType;

/// A step consuming one header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStep {
    /// Split the line into column titles
    Titles,
    /// Split the line into column type declarations
    Types,
}

impl HeaderStep {
    pub(crate) fn apply(
        &self,
        lines: &mut Lines<'_>,
        table: &mut Table,
        options: &ResolverOptions,
    ) -> Result<()> {
        match self {
            Self::Titles => resolve_titles(lines, table, options),
            Self::Types => resolve_types(lines, table, options),
        }
    }
}

fn resolve_titles(lines: &mut Lines<'_>, table: &mut Table, options: &ResolverOptions) -> Result<()> {
    let line = lines
        .next()
        .ok_or_else(|| CsvError::malformed(HYC0001, "text has no header line"))?;
    for cell in line.split(options.delimiter) {
        table.add_title(cell);
    }
    Ok(())
}

fn resolve_types(lines: &mut Lines<'_>, table: &mut Table, options: &ResolverOptions) -> Result<()> {
    let line = lines.next().ok_or_else(|| {
        CsvError::malformed(HYC0002, "text has no type declaration line after the header")
    })?;

    let columns = table.column_count();
    for (index, cell) in line.split(options.delimiter).enumerate() {
        if index >= columns {
            log::warn!("type declaration {cell:?} at column {index} has no title; ignored");
            continue;
        }
        let cell = if options.trim_type_cells { cell.trim() } else { cell };
        let data_type = DataType::from_declaration(cell);
        if data_type == DataType::Unknown && !cell.is_empty() {
            log::warn!("unrecognized type declaration {cell:?} at column {index}");
        }
        table.set_column_type_at(index, data_type);
    }
    Ok(())
}

/// Turn every remaining line into a row; returns the number of rows added
pub(crate) fn resolve_rows(
    lines: &mut Lines<'_>,
    table: &mut Table,
    options: &ResolverOptions,
    first_row_index: usize,
) -> usize {
    let mut added = 0;
    for (offset, line) in lines.enumerate() {
        table.add_row(first_row_index + offset, line.split(options.delimiter));
        added += 1;
    }
    added
}

//! Validate command implementation

use super::{LoadConfig, load_table, output};
use crate::diagnostics::{CellLocation, Diagnostic, HYC0003, HYC0004, Severity};
use crate::{DataType, Table};
use anyhow::{Result, bail};
use colored::Colorize;
use std::path::PathBuf;

/// Configuration for validate command
pub struct ValidateConfig {
    pub file: PathBuf,
    pub load: LoadConfig,
    /// Treat warnings as errors
    pub strict: bool,
}

/// Check every typed entry of a table
///
/// Reports an error for each entry of an Integer, Float or Bool column that does
/// not convert, and a warning for each column without a recognized type and each
/// row whose length differs from the header.
pub fn check_table(table: &Table) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for title in table.titles() {
        if title.data_type() == DataType::Unknown {
            diagnostics.push(
                Diagnostic::warning(
                    HYC0004,
                    format!("column '{}' has no recognized type", title.name()),
                )
                .with_location(title.location()),
            );
        }
    }

    for row in table.rows() {
        if row.element_count() != table.column_count() {
            let row_index = row.entry(0).map(|entry| entry.row_index()).unwrap_or_default();
            diagnostics.push(
                Diagnostic::warning(
                    HYC0003,
                    format!(
                        "row has {} entries, header has {}",
                        row.element_count(),
                        table.column_count()
                    ),
                )
                .with_location(CellLocation::new(row_index, 0)),
            );
        }

        for entry in row.entries() {
            let result = match entry.data_type() {
                DataType::Integer => entry.to_integer().map(drop),
                DataType::Float => entry.to_float().map(drop),
                DataType::Bool => entry.to_bool().map(drop),
                _ => Ok(()),
            };
            if let Err(err) = result {
                diagnostics.push(err.to_diagnostic());
            }
        }
    }

    diagnostics
}

/// Validate a typed table file
pub fn validate(config: ValidateConfig) -> Result<()> {
    let mut load = config.load.clone();
    load.typed = true;
    let table = load_table(&config.file, &load)?;

    let diagnostics = check_table(&table);
    for diag in &diagnostics {
        eprintln!("{}", diag.render_colored());
    }

    let errors = diagnostics
        .iter()
        .filter(|diag| diag.severity == Severity::Error)
        .count();
    let warnings = diagnostics.len() - errors;
    let failed = errors > 0 || (config.strict && warnings > 0);

    if failed {
        bail!(
            "{}: {} errors, {} warnings",
            config.file.display(),
            errors,
            warnings
        );
    }
    eprintln!(
        "{}",
        output::format_success(&format!(
            "{}: {} rows, {} warnings",
            config.file.display(),
            table.row_count(),
            warnings.to_string().yellow()
        ))
    );
    Ok(())
}

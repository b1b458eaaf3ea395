//! Inspect command implementation

use super::output::{self, OutputFormat};
use super::{LoadConfig, load_table};
use crate::Table;
use anyhow::Result;
use serde_json::{Value, json};
use std::path::PathBuf;

/// Configuration for inspect command
pub struct InspectConfig {
    pub file: PathBuf,
    pub load: LoadConfig,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Summary of a table's shape as JSON
pub fn describe(table: &Table) -> Value {
    let columns: Vec<Value> = table
        .titles()
        .iter()
        .map(|title| {
            json!({
                "index": title.column_index(),
                "name": title.name(),
                "type": title.data_type(),
            })
        })
        .collect();
    json!({
        "columns": columns,
        "rows": table.row_count(),
    })
}

/// Print a table's columns and row count, or its rows as a text table
pub fn inspect(config: InspectConfig) -> Result<()> {
    let table = load_table(&config.file, &config.load)?;
    log::debug!(
        "inspecting {}: {} columns, {} rows",
        config.file.display(),
        table.column_count(),
        table.row_count()
    );

    let content = match config.format {
        OutputFormat::Table => output::format_rows_as_table(&table, table.rows()),
        OutputFormat::Json => output::format_json(&describe(&table), false)?,
        OutputFormat::JsonPretty => output::format_json(&describe(&table), true)?,
    };
    output::write_output(&content, config.output_file.as_deref())
}

//! Query command implementation

use super::output::{self, OutputFormat};
use super::{LoadConfig, load_table};
use crate::{RowRef, Table};
use anyhow::{Result, bail};
use serde_json::Value;
use std::path::PathBuf;

/// Configuration for query command
pub struct QueryConfig {
    pub file: PathBuf,
    pub load: LoadConfig,
    /// Key column name
    pub key: String,
    /// Value the key entry must equal
    pub equals: String,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Rows whose `key` entry has exactly the text `equals`
pub fn select<'a>(table: &'a Table, key: &str, equals: &str) -> Result<Vec<RowRef<'a>>> {
    if table.find_title(key).is_none() {
        bail!("No column named '{}'", key);
    }
    Ok(table.find_rows_by_primary_key(key, |entry| entry.content() == equals))
}

/// Print the rows selected by a primary-key lookup
pub fn query(config: QueryConfig) -> Result<()> {
    let table = load_table(&config.file, &config.load)?;
    let rows = select(&table, &config.key, &config.equals)?;
    log::debug!("{}={:?} matched {} rows", config.key, config.equals, rows.len());

    let content = match config.format {
        OutputFormat::Table => output::format_rows_as_table(&table, rows),
        format => {
            let value = Value::Array(rows.iter().map(output::row_to_json).collect());
            output::format_json(&value, format == OutputFormat::JsonPretty)?
        }
    };
    output::write_output(&content, config.output_file.as_deref())
}

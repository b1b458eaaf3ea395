//! Output formatting utilities

use crate::{DataType, EntryRef, RowRef, Table};
use anyhow::{Context, Result};
use colored::Colorize;
use indexmap::IndexMap;
use serde_json::Value;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    JsonPretty,
    Table,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "table" => Self::Table,
            _ => Self::JsonPretty,
        }
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(io::stdout().is_terminal()),
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Format JSON value for output
pub fn format_json(value: &Value, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).context("Failed to serialize JSON")
    } else {
        serde_json::to_string(value).context("Failed to serialize JSON")
    }
}

/// JSON value of an entry: typed when its column declares a scalar type and the
/// text converts, the raw text otherwise
pub fn entry_to_json(entry: &EntryRef<'_>) -> Value {
    let typed = match entry.data_type() {
        DataType::Integer => entry.to_integer().ok().map(Value::from),
        DataType::Float => entry.to_float().ok().map(Value::from),
        DataType::Bool => entry.to_bool().ok().map(Value::from),
        _ => None,
    };
    typed.unwrap_or_else(|| Value::from(entry.content()))
}

/// JSON object of a row, keyed by column name
///
/// Entries past the last column of a ragged row are keyed by `#<column index>`.
pub fn row_to_json(row: &RowRef<'_>) -> Value {
    let fields: IndexMap<String, Value> = row
        .entries()
        .map(|entry| {
            let key = match entry.title() {
                Some(title) => title.name().to_string(),
                None => format!("#{}", entry.column_index()),
            };
            (key, entry_to_json(&entry))
        })
        .collect();
    serde_json::to_value(fields).unwrap_or(Value::Null)
}

/// Render rows as a text table under the table's column names
pub fn format_rows_as_table<'a>(table: &Table, rows: impl IntoIterator<Item = RowRef<'a>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.column_names().map(str::to_string));

    let width = table.column_count();
    for row in rows {
        let mut cells: Vec<String> = row.entries().map(|entry| entry.content().to_string()).collect();
        if cells.len() < width {
            cells.resize(width, String::new());
        }
        builder.push_record(cells);
    }

    builder.build().with(Style::modern()).to_string()
}

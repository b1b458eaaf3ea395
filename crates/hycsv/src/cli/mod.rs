//! CLI functionality for the hycsv tool
//!
//! This module contains all CLI-related functionality including:
//! - Loading table files with resolver options
//! - Inspect, query and validate commands
//! - Output formatting

pub mod inspect;
pub mod output;
pub mod query;
pub mod validate;

use crate::{Reader, ResolveMode, ResolverOptions, Table};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// How a table file is resolved
#[derive(Debug, Clone, Default)]
pub struct LoadConfig {
    /// JSON resolver options file
    pub config: Option<PathBuf>,
    /// Force typed mode
    pub typed: bool,
    /// Override the field delimiter
    pub delimiter: Option<char>,
}

impl LoadConfig {
    /// Resolver options: the config file (if any), then command-line overrides
    pub fn options(&self) -> Result<ResolverOptions> {
        let mut options = match &self.config {
            Some(path) => ResolverOptions::from_json_file(path)
                .with_context(|| format!("Failed to load resolver options: {}", path.display()))?,
            None => ResolverOptions::default(),
        };
        if self.typed {
            options.mode = ResolveMode::Typed;
        }
        if let Some(delimiter) = self.delimiter {
            options.delimiter = delimiter;
        }
        Ok(options)
    }
}

/// Read a table file as UTF-8, dropping a leading byte order mark
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("File is not valid UTF-8: {}", path.display()))?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Load the table stored in `path`
pub fn load_table(path: &Path, config: &LoadConfig) -> Result<Table> {
    let options = config.options()?;
    let text = read_text(path)?;
    let mut reader = Reader::with_options(options);
    reader
        .load_table(&text)
        .with_context(|| format!("Failed to resolve table: {}", path.display()))?
        .with_context(|| format!("File is empty: {}", path.display()))
}

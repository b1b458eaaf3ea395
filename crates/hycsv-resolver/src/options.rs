//! Resolver configuration

use hycsv_table::{CaseInsensitiveNaming, ExactNaming, TitleNaming};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::HeaderStep;

/// Which header lines precede the data rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveMode {
    /// Line 1 holds titles; data starts on line 2
    #[default]
    Simple,
    /// Line 1 holds titles, line 2 the column types; data starts on line 3
    Typed,
}

impl ResolveMode {
    /// The header steps run by this mode, in order
    pub const fn steps(&self) -> &'static [HeaderStep] {
        match self {
            Self::Simple => &[HeaderStep::Titles],
            Self::Typed => &[HeaderStep::Titles, HeaderStep::Types],
        }
    }
}

/// How column names are matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleMatching {
    #[default]
    Exact,
    CaseInsensitive,
}

impl TitleMatching {
    pub fn naming(&self) -> Arc<dyn TitleNaming> {
        match self {
            Self::Exact => Arc::new(ExactNaming),
            Self::CaseInsensitive => Arc::new(CaseInsensitiveNaming),
        }
    }
}

/// Options shared by all resolver modes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Field delimiter
    pub delimiter: char,
    pub mode: ResolveMode,
    pub title_matching: TitleMatching,
    /// Trim whitespace around type declaration cells
    pub trim_type_cells: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            mode: ResolveMode::Simple,
            title_matching: TitleMatching::Exact,
            trim_type_cells: true,
        }
    }
}

/// Errors loading resolver options
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid options: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ResolverOptions {
    pub fn simple() -> Self {
        Self::default()
    }

    pub fn typed() -> Self {
        Self {
            mode: ResolveMode::Typed,
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_title_matching(mut self, matching: TitleMatching) -> Self {
        self.title_matching = matching;
        self
    }

    /// Load options from a JSON string; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

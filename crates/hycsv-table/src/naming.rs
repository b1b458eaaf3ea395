//! Title naming strategies
//!
//! A strategy decides how a column name is derived from the raw header cell and
//! how a queried name is matched against it. The table holds one strategy and
//! applies it to every title.

use indexmap::IndexMap;
use std::fmt;

/// Strategy for deriving and matching column names
pub trait TitleNaming: fmt::Debug + Send + Sync {
    /// Derive the column name from the raw header cell
    fn derive_name(&self, content: &str) -> String {
        content.to_string()
    }

    /// Check if `query` refers to the column named `name`
    fn matches(&self, name: &str, query: &str) -> bool;
}

/// Case-sensitive exact equality (the default)
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactNaming;

impl TitleNaming for ExactNaming {
    fn matches(&self, name: &str, query: &str) -> bool {
        name == query
    }
}

/// Case-insensitive equality; header cells are trimmed of surrounding whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitiveNaming;

impl TitleNaming for CaseInsensitiveNaming {
    fn derive_name(&self, content: &str) -> String {
        content.trim().to_string()
    }

    fn matches(&self, name: &str, query: &str) -> bool {
        name.to_lowercase() == query.to_lowercase()
    }
}

/// Exact matching plus alternate names per column
///
/// ```
/// use hycsv_table::{AliasNaming, TitleNaming};
///
/// let naming = AliasNaming::new().alias("goden", "gold");
/// assert!(naming.matches("goden", "gold"));
/// assert!(naming.matches("goden", "goden"));
/// assert!(!naming.matches("level", "gold"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AliasNaming {
    aliases: IndexMap<String, Vec<String>>,
}

impl AliasNaming {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `alias` as another name for the column `name`
    pub fn alias(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.entry(name.into()).or_default().push(alias.into());
        self
    }

    /// Aliases registered for `name`
    pub fn aliases_of(&self, name: &str) -> &[String] {
        self.aliases.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl TitleNaming for AliasNaming {
    fn matches(&self, name: &str, query: &str) -> bool {
        name == query || self.aliases_of(name).iter().any(|alias| alias == query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_is_case_sensitive() {
        assert!(ExactNaming.matches("level", "level"));
        assert!(!ExactNaming.matches("level", "Level"));
        assert!(!ExactNaming.matches("level", "level "));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(CaseInsensitiveNaming.derive_name(" Level "), "Level");
        assert!(CaseInsensitiveNaming.matches("Level", "LEVEL"));
        assert!(CaseInsensitiveNaming.matches("名字", "名字"));
    }

    #[test]
    fn test_alias_lists() {
        let naming = AliasNaming::new().alias("attack", "atk").alias("attack", "power");
        assert_eq!(naming.aliases_of("attack"), ["atk", "power"]);
        assert!(naming.matches("attack", "power"));
        assert!(naming.aliases_of("level").is_empty());
    }
}

//! The line-based table resolver

use crate::steps::resolve_rows;
use crate::{Lines, ResolveMode, Resolver, ResolverOptions};
use hycsv_diagnostics::Result;
use hycsv_table::{Table, TitleNaming};
use std::sync::Arc;

/// Resolver for comma separated text with one or two header lines
///
/// The mode decides which header steps run: `Simple` reads titles only,
/// `Typed` reads titles and then assigns column types from the next line.
#[derive(Debug)]
pub struct TableResolver {
    options: ResolverOptions,
    naming: Arc<dyn TitleNaming>,
    table: Option<Table>,
}

impl TableResolver {
    pub fn new(options: ResolverOptions) -> Self {
        let naming = options.title_matching.naming();
        Self {
            options,
            naming,
            table: None,
        }
    }

    /// Titles on line 1, data from line 2
    pub fn simple() -> Self {
        Self::new(ResolverOptions::simple())
    }

    /// Titles on line 1, column types on line 2, data from line 3
    pub fn typed() -> Self {
        Self::new(ResolverOptions::typed())
    }

    /// Use a custom naming strategy for the tables this resolver builds
    pub fn with_naming(mut self, naming: Arc<dyn TitleNaming>) -> Self {
        self.naming = naming;
        self
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn mode(&self) -> ResolveMode {
        self.options.mode
    }
}

impl Default for TableResolver {
    fn default() -> Self {
        Self::simple()
    }
}

impl Resolver for TableResolver {
    fn resolve(&mut self, text: &str) -> Result<&Table> {
        log::debug!(
            "resolving {} bytes as {:?} (delimiter {:?})",
            text.len(),
            self.options.mode,
            self.options.delimiter
        );
        // Drop the previous table first so a failed resolve leaves none behind.
        self.table = None;

        let mut table = Table::with_naming(Arc::clone(&self.naming));
        let mut lines = Lines::new(text);
        let steps = self.options.mode.steps();
        for step in steps {
            step.apply(&mut lines, &mut table, &self.options)?;
        }
        let rows = resolve_rows(&mut lines, &mut table, &self.options, steps.len());

        log::debug!(
            "resolved {}: {} columns, {} rows",
            table.id(),
            table.column_count(),
            rows
        );
        Ok(self.table.insert(table))
    }

    fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    fn take_table(&mut self) -> Option<Table> {
        self.table.take()
    }
}

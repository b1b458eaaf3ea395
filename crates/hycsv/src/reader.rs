//! The reader facade

use hycsv_diagnostics::Result;
use hycsv_resolver::{Resolver, ResolverOptions, TableResolver};
use hycsv_table::Table;

/// Loads tables from text through one resolver
///
/// Each loaded table is handed over to the caller; the reader keeps nothing
/// between loads.
pub struct Reader {
    resolver: Box<dyn Resolver>,
}

impl Reader {
    /// Reader for header-only text
    pub fn new() -> Self {
        Self::with_resolver(TableResolver::simple())
    }

    /// Reader for text with a type declaration line after the header
    pub fn typed() -> Self {
        Self::with_resolver(TableResolver::typed())
    }

    pub fn with_options(options: ResolverOptions) -> Self {
        Self::with_resolver(TableResolver::new(options))
    }

    pub fn with_resolver(resolver: impl Resolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
        }
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }

    /// Load a table from `text`
    ///
    /// Empty text yields `Ok(None)`; resolver failures are returned as errors.
    pub fn load_table(&mut self, text: &str) -> Result<Option<Table>> {
        if text.is_empty() {
            log::debug!("empty text, no table loaded");
            return Ok(None);
        }
        self.resolver.resolve(text)?;
        Ok(self.resolver.take_table())
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Box<dyn Resolver>> for Reader {
    fn from(resolver: Box<dyn Resolver>) -> Self {
        Self { resolver }
    }
}

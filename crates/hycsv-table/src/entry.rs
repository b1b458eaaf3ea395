//! Table entries and typed conversion

use crate::{Table, TableId, Title};
use hycsv_diagnostics::{CellLocation, CsvError, Result};
use hycsv_types::{DataType, TypedValue};
use std::cell::Cell;
use std::fmt;

/// One cell of a data row
///
/// The raw text never changes. A typed value is parsed on first conversion and
/// cached together with the column index and title generation it was parsed
/// under, so a later change of the column's data type invalidates it.
#[derive(Debug, Clone)]
pub struct Entry {
    content: String,
    row_index: usize,
    column_index: usize,
    table: TableId,
    cache: Cell<Option<CachedValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CachedValue {
    column: usize,
    generation: u64,
    value: TypedValue,
}

impl Entry {
    pub(crate) fn new(content: String, row_index: usize, column_index: usize, table: TableId) -> Self {
        Self {
            content,
            row_index,
            column_index,
            table,
            cache: Cell::new(None),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Line-based row index assigned by the resolver
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn column_index(&self) -> usize {
        self.column_index
    }

    /// Handle of the table this entry belongs to
    pub fn table_id(&self) -> TableId {
        self.table
    }

    pub fn location(&self) -> CellLocation {
        CellLocation::new(self.row_index, self.column_index)
    }

    /// The cached typed value, if one is cached
    pub fn cached_value(&self) -> Option<TypedValue> {
        self.cache.get().map(|cached| cached.value)
    }
}

/// Borrowed view of an entry inside its table
#[derive(Clone, Copy)]
pub struct EntryRef<'a> {
    table: &'a Table,
    entry: &'a Entry,
}

impl<'a> EntryRef<'a> {
    pub(crate) fn new(table: &'a Table, entry: &'a Entry) -> Self {
        debug_assert_eq!(table.id(), entry.table);
        Self { table, entry }
    }

    pub fn entry(&self) -> &'a Entry {
        self.entry
    }

    pub fn content(&self) -> &'a str {
        &self.entry.content
    }

    pub fn row_index(&self) -> usize {
        self.entry.row_index
    }

    pub fn column_index(&self) -> usize {
        self.entry.column_index
    }

    pub fn location(&self) -> CellLocation {
        self.entry.location()
    }

    /// The title of this entry's column; `None` past the last column of a ragged row
    pub fn title(&self) -> Option<&'a Title> {
        self.table.title(self.entry.column_index)
    }

    /// The declared data type of this entry's column
    pub fn data_type(&self) -> DataType {
        self.title().map(Title::data_type).unwrap_or_default()
    }

    /// The raw text, verbatim
    pub fn to_text(&self) -> &'a str {
        self.content()
    }

    pub fn to_integer(&self) -> Result<i64> {
        match self.cast(DataType::Integer)? {
            TypedValue::Integer(v) => Ok(v),
            other => Err(self.mismatch(DataType::Integer, other)),
        }
    }

    pub fn to_float(&self) -> Result<f64> {
        match self.cast(DataType::Float)? {
            TypedValue::Float(v) => Ok(v),
            other => Err(self.mismatch(DataType::Float, other)),
        }
    }

    pub fn to_bool(&self) -> Result<bool> {
        match self.cast(DataType::Bool)? {
            TypedValue::Bool(v) => Ok(v),
            other => Err(self.mismatch(DataType::Bool, other)),
        }
    }

    /// Convert to `requested`, reusing the cached value while it is still valid
    fn cast(&self, requested: DataType) -> Result<TypedValue> {
        // Entries of a ragged row past the last title behave as Unknown-typed.
        let (declared, generation) = match self.title() {
            Some(title) => (title.data_type(), title.generation()),
            None => (DataType::Unknown, 0),
        };

        if !declared.accepts(requested) {
            return Err(CsvError::invalid_cast(
                self.location(),
                requested.name(),
                declared.name(),
            ));
        }

        let column = self.entry.column_index;
        if let Some(cached) = self.entry.cache.get() {
            if cached.column == column
                && cached.generation == generation
                && cached.value.data_type() == requested
            {
                return Ok(cached.value);
            }
        }

        let value = TypedValue::parse(requested, &self.entry.content).ok_or_else(|| {
            let code = requested
                .literal_error_code()
                .unwrap_or(hycsv_diagnostics::HYC0200);
            CsvError::format(code, self.location(), requested.name(), self.content())
        })?;

        self.entry.cache.set(Some(CachedValue {
            column,
            generation,
            value,
        }));
        Ok(value)
    }

    fn mismatch(&self, requested: DataType, value: TypedValue) -> CsvError {
        CsvError::invalid_cast(self.location(), requested.name(), value.data_type().name())
    }
}

impl fmt::Debug for EntryRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryRef")
            .field("content", &self.entry.content)
            .field("row_index", &self.entry.row_index)
            .field("column_index", &self.entry.column_index)
            .finish()
    }
}

impl fmt::Display for EntryRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entry.content)
    }
}

impl TryFrom<EntryRef<'_>> for i64 {
    type Error = CsvError;

    fn try_from(entry: EntryRef<'_>) -> Result<Self> {
        entry.to_integer()
    }
}

impl TryFrom<EntryRef<'_>> for f64 {
    type Error = CsvError;

    fn try_from(entry: EntryRef<'_>) -> Result<Self> {
        entry.to_float()
    }
}

impl TryFrom<EntryRef<'_>> for bool {
    type Error = CsvError;

    fn try_from(entry: EntryRef<'_>) -> Result<Self> {
        entry.to_bool()
    }
}

impl From<EntryRef<'_>> for String {
    fn from(entry: EntryRef<'_>) -> Self {
        entry.content().to_string()
    }
}

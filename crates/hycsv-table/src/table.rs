//! The table: titles, rows and every lookup over them

use crate::{Entry, EntryRef, ExactNaming, Row, RowRef, Title, TitleNaming};
use hycsv_diagnostics::{CsvError, Result};
use hycsv_types::DataType;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TABLE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique table handle stored by every row and entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(u64);

impl TableId {
    fn next() -> Self {
        Self(NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table#{}", self.0)
    }
}

/// An in-memory table of titles and rows
///
/// Titles and rows are append-only; a title's column index is its position and
/// never changes. The only mutation after resolving is a column's data type.
///
/// Entries cache typed values in a `Cell`, so a table is `Send` but not `Sync`:
/// share one across threads only behind a lock.
#[derive(Clone)]
pub struct Table {
    id: TableId,
    titles: Vec<Title>,
    rows: Vec<Row>,
    naming: Arc<dyn TitleNaming>,
}

impl Table {
    /// Create an empty table matching titles by exact name
    pub fn new() -> Self {
        Self::with_naming(Arc::new(ExactNaming))
    }

    /// Create an empty table with a custom naming strategy
    pub fn with_naming(naming: Arc<dyn TitleNaming>) -> Self {
        Self {
            id: TableId::next(),
            titles: Vec::new(),
            rows: Vec::new(),
            naming,
        }
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn naming(&self) -> &dyn TitleNaming {
        self.naming.as_ref()
    }

    /// Append a column title; its column index is the current column count
    ///
    /// Used by resolvers while building the table.
    pub fn add_title(&mut self, content: impl Into<String>) -> &Title {
        let content = content.into();
        let name = self.naming.derive_name(&content);
        let index = self.titles.len();
        self.titles.push(Title::new(content, name, index));
        &self.titles[index]
    }

    /// Append a data row built from `cells`, stamping each entry with `row_index`
    ///
    /// Used by resolvers while building the table.
    pub fn add_row<I, S>(&mut self, row_index: usize, cells: I) -> RowRef<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = self.id;
        let entries = cells
            .into_iter()
            .enumerate()
            .map(|(column, cell)| Entry::new(cell.into(), row_index, column, id))
            .collect();
        self.rows.push(Row::new(id, entries));
        let index = self.rows.len() - 1;
        RowRef::new(self, &self.rows[index], index)
    }

    /// Set the data type of the column matching `name`; does nothing if none matches
    pub fn set_column_type(&mut self, name: &str, data_type: DataType) {
        let index = self.find_title_with_index(name).map(|(index, _)| index);
        match index {
            Some(index) => {
                self.set_column_type_at(index, data_type);
            }
            None => log::trace!("set_column_type: no column named {name:?}"),
        }
    }

    /// Set the data type of the column at `index`; returns false if out of range
    pub fn set_column_type_at(&mut self, index: usize, data_type: DataType) -> bool {
        let Some(title) = self.titles.get_mut(index) else {
            return false;
        };
        log::trace!(
            "column {} ({:?}): {} -> {}",
            index,
            title.name(),
            title.data_type(),
            data_type
        );
        title.set_data_type(data_type);
        true
    }

    /// Data type of the column matching `name`
    pub fn column_type(&self, name: &str) -> Result<DataType> {
        self.find_title(name)
            .map(Title::data_type)
            .ok_or_else(|| CsvError::not_found(name))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.titles.len()
    }

    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.titles.iter().map(Title::name)
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = RowRef<'_>> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(move |(index, row)| RowRef::new(self, row, index))
    }

    /// Title at column `index`
    pub fn title(&self, index: usize) -> Option<&Title> {
        self.titles.get(index)
    }

    /// First title matching `name` under the table's naming strategy
    pub fn find_title(&self, name: &str) -> Option<&Title> {
        self.find_title_with_index(name).map(|(_, title)| title)
    }

    /// First title matching `name`, together with its column index
    pub fn find_title_with_index(&self, name: &str) -> Option<(usize, &Title)> {
        self.titles
            .iter()
            .enumerate()
            .find(|(_, title)| self.naming.matches(title.name(), name))
    }

    pub fn row(&self, index: usize) -> Option<RowRef<'_>> {
        self.rows
            .get(index)
            .map(|row| RowRef::new(self, row, index))
    }

    /// The entry at (`row`, `column`), both positional
    pub fn entry(&self, row: usize, column: usize) -> Option<EntryRef<'_>> {
        self.row(row)?.entry(column)
    }

    /// All rows satisfying `predicate`, in insertion order
    pub fn find_rows<P>(&self, mut predicate: P) -> Vec<RowRef<'_>>
    where
        P: FnMut(&RowRef<'_>) -> bool,
    {
        self.rows().filter(|row| predicate(row)).collect()
    }

    pub fn find_first_row<P>(&self, mut predicate: P) -> Option<RowRef<'_>>
    where
        P: FnMut(&RowRef<'_>) -> bool,
    {
        self.rows().find(|row| predicate(row))
    }

    pub fn find_last_row<P>(&self, mut predicate: P) -> Option<RowRef<'_>>
    where
        P: FnMut(&RowRef<'_>) -> bool,
    {
        self.rows().rev().find(|row| predicate(row))
    }

    /// Rows whose entry in `key_column` satisfies `predicate`
    ///
    /// Rows without an entry in that column are skipped.
    pub fn find_rows_by_primary_key<P>(&self, key_column: &str, mut predicate: P) -> Vec<RowRef<'_>>
    where
        P: FnMut(&EntryRef<'_>) -> bool,
    {
        self.find_rows(|row| {
            row.entry_by_name(key_column)
                .is_some_and(|entry| predicate(&entry))
        })
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("id", &self.id)
            .field("titles", &self.titles)
            .field("rows", &self.rows.len())
            .field("naming", &self.naming)
            .finish()
    }
}

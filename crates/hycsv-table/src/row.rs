//! Data rows

use crate::{Entry, EntryRef, Table, TableId};
use std::fmt;

/// One data record: the entries a source line was split into
///
/// The entry count is whatever the line produced and may differ from the
/// table's column count.
#[derive(Debug, Clone)]
pub struct Row {
    table: TableId,
    entries: Vec<Entry>,
}

impl Row {
    pub(crate) fn new(table: TableId, entries: Vec<Entry>) -> Self {
        Self { table, entries }
    }

    pub fn table_id(&self) -> TableId {
        self.table
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// Borrowed view of a row inside its table
#[derive(Clone, Copy)]
pub struct RowRef<'a> {
    table: &'a Table,
    row: &'a Row,
    index: usize,
}

impl<'a> RowRef<'a> {
    pub(crate) fn new(table: &'a Table, row: &'a Row, index: usize) -> Self {
        debug_assert_eq!(table.id(), row.table);
        Self { table, row, index }
    }

    /// Position of this row in the table (insertion order)
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }

    pub fn row(&self) -> &'a Row {
        self.row
    }

    /// Number of entries in this row
    pub fn element_count(&self) -> usize {
        self.row.entries.len()
    }

    pub fn entry(&self, index: usize) -> Option<EntryRef<'a>> {
        self.row
            .entries
            .get(index)
            .map(|entry| EntryRef::new(self.table, entry))
    }

    /// Entry in the column matching `name`
    ///
    /// Returns `None` if no column matches or this row is too short to reach it.
    pub fn entry_by_name(&self, name: &str) -> Option<EntryRef<'a>> {
        if name.is_empty() {
            return None;
        }
        let (index, _) = self.table.find_title_with_index(name)?;
        self.entry(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = EntryRef<'a>> + 'a {
        let table = self.table;
        self.row
            .entries
            .iter()
            .map(move |entry| EntryRef::new(table, entry))
    }
}

impl PartialEq for RowRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.table.id() == other.table.id() && self.index == other.index
    }
}

impl fmt::Debug for RowRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowRef")
            .field("index", &self.index)
            .field(
                "entries",
                &self.row.entries.iter().map(Entry::content).collect::<Vec<_>>(),
            )
            .finish()
    }
}

//! Column titles

use hycsv_diagnostics::CellLocation;
use hycsv_types::DataType;

/// A column's header cell: its raw text, derived name and declared data type
///
/// Titles are created by [`Table::add_title`](crate::Table::add_title) and only
/// their data type changes afterwards. Every change bumps `generation`, which
/// entries compare against to invalidate their cached typed values.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    content: String,
    name: String,
    column_index: usize,
    data_type: DataType,
    generation: u64,
}

impl Title {
    pub(crate) fn new(content: String, name: String, column_index: usize) -> Self {
        Self {
            content,
            name,
            column_index,
            data_type: DataType::Unknown,
            generation: 0,
        }
    }

    /// Raw header cell text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Column name, derived from the header cell by the table's naming strategy
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_index(&self) -> usize {
        self.column_index
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Number of data type changes since the title was created
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn location(&self) -> CellLocation {
        CellLocation::header(self.column_index)
    }

    pub(crate) fn set_data_type(&mut self, data_type: DataType) {
        self.data_type = data_type;
        self.generation += 1;
    }
}

//! Cell coordinates inside a resolved table

use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of a cell, as assigned by the resolver
///
/// `row` is the line-based row index carried by the entry (the header is row 0),
/// `column` is the zero-based column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellLocation {
    pub row: usize,
    pub column: usize,
}

impl CellLocation {
    /// Create a new cell location
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Location of the header cell for a column
    #[inline]
    pub const fn header(column: usize) -> Self {
        Self { row: 0, column }
    }

    /// Check if this location points into the header line
    #[inline]
    pub const fn is_header(&self) -> bool {
        self.row == 0
    }
}

impl From<(usize, usize)> for CellLocation {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for CellLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        assert_eq!(CellLocation::new(3, 7).to_string(), "3:7");
    }

    #[test]
    fn test_header_location() {
        let loc = CellLocation::header(2);
        assert!(loc.is_header());
        assert!(!CellLocation::from((1, 2)).is_header());
    }
}

//! Typed entry conversion tests
//!
//! Covers:
//! - Lossless text conversion
//! - Conversions allowed by Unknown and matching column types
//! - InvalidCast for mismatching column types
//! - Format errors for bad literals
//! - Cache invalidation when a column's type changes

use hycsv_diagnostics::{CellLocation, CsvError, HYC0200, HYC0201, HYC0202, HYC0203};
use hycsv_table::Table;
use hycsv_types::{DataType, TypedValue};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ============================================================================
// Test Helpers
// ============================================================================

fn character_table() -> Table {
    let mut table = Table::new();
    for name in ["id", "name", "level", "alive", "attack"] {
        table.add_title(name);
    }
    table.add_row(1, ["10", "张三10", "110", "true", "248.44"]);
    table.add_row(2, ["11", "张三11", "x", "maybe", ""]);
    table.add_row(3, ["12", "张三12", "112", "False", "-3", "extra"]);
    table
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_text_is_verbatim() {
    let table = character_table();
    let entry = table.entry(0, 1).unwrap();
    assert_eq!(entry.to_text(), "张三10");
    assert_eq!(String::from(entry), "张三10");
    assert_eq!(entry.to_string(), "张三10");
}

#[test]
fn test_text_ignores_declared_type() {
    let mut table = character_table();
    table.set_column_type("name", DataType::Integer);
    assert_eq!(table.entry(0, 1).unwrap().to_text(), "张三10");
}

proptest! {
    #[test]
    fn prop_text_round_trips(cells in proptest::collection::vec("[^,\r\n]*", 1..6)) {
        let mut table = Table::new();
        table.add_row(1, cells.clone());
        let row = table.row(0).unwrap();
        prop_assert_eq!(row.element_count(), cells.len());
        for (entry, cell) in row.entries().zip(&cells) {
            prop_assert_eq!(entry.to_text(), cell.as_str());
        }
    }
}

// ============================================================================
// Unknown columns
// ============================================================================

#[test]
fn test_unknown_column_converts_to_any_type() {
    let table = character_table();
    assert_eq!(table.entry(0, 2).unwrap().to_integer(), Ok(110));
    assert_eq!(table.entry(0, 3).unwrap().to_bool(), Ok(true));
    assert_eq!(table.entry(0, 4).unwrap().to_float(), Ok(248.44));
}

#[test]
fn test_unknown_column_reparses_for_each_requested_type() {
    let table = character_table();
    let entry = table.entry(0, 2).unwrap();
    assert_eq!(entry.to_integer(), Ok(110));
    assert_eq!(entry.to_float(), Ok(110.0));
    assert_eq!(entry.entry().cached_value(), Some(TypedValue::Float(110.0)));
}

#[test]
fn test_try_from_conversions() {
    let table = character_table();
    let level: i64 = table.entry(2, 2).unwrap().try_into().unwrap();
    let alive: bool = table.entry(2, 3).unwrap().try_into().unwrap();
    let attack: f64 = table.entry(2, 4).unwrap().try_into().unwrap();
    assert_eq!((level, alive, attack), (112, false, -3.0));
}

#[test]
fn test_ragged_entry_without_title_is_unknown() {
    let table = character_table();
    let extra = table.entry(2, 5).unwrap();
    assert!(extra.title().is_none());
    assert_eq!(extra.data_type(), DataType::Unknown);
    assert!(matches!(extra.to_integer(), Err(CsvError::Format { .. })));
}

// ============================================================================
// Declared types
// ============================================================================

#[test]
fn test_integer_column() {
    let mut table = character_table();
    table.set_column_type("level", DataType::Integer);
    let entry = table.entry(0, 2).unwrap();

    assert_eq!(entry.to_integer(), Ok(110));
    let err = entry.to_bool().unwrap_err();
    assert_eq!(err.code(), HYC0200);
    assert_eq!(
        err,
        CsvError::invalid_cast(CellLocation::new(1, 2), "Bool", "Integer")
    );
}

#[rstest]
#[case(DataType::Text)]
#[case(DataType::Float)]
#[case(DataType::Bool)]
#[case(DataType::Array)]
#[case(DataType::Dictionary)]
fn test_non_integer_columns_reject_integer_cast(#[case] declared: DataType) {
    let mut table = character_table();
    table.set_column_type("level", declared);
    let err = table.entry(0, 2).unwrap().to_integer().unwrap_err();
    assert!(matches!(err, CsvError::InvalidCast { ref requested, .. } if requested == "Integer"));
}

#[rstest]
#[case(2, DataType::Integer, HYC0201)]
#[case(3, DataType::Bool, HYC0203)]
#[case(4, DataType::Float, HYC0202)]
fn test_bad_literal_is_format_error(
    #[case] column: usize,
    #[case] declared: DataType,
    #[case] code: hycsv_diagnostics::ErrorCode,
) {
    let mut table = character_table();
    table.set_column_type_at(column, declared);
    let entry = table.entry(1, column).unwrap();

    let err = match declared {
        DataType::Integer => entry.to_integer().unwrap_err(),
        DataType::Bool => entry.to_bool().unwrap_err(),
        _ => entry.to_float().unwrap_err(),
    };
    assert_eq!(err.code(), code);
    assert_eq!(err.location(), Some(CellLocation::new(2, column)));
    assert!(entry.entry().cached_value().is_none());
}

// ============================================================================
// Cache invalidation
// ============================================================================

#[test]
fn test_cached_value_is_reused() {
    let mut table = character_table();
    table.set_column_type("attack", DataType::Float);
    let entry = table.entry(0, 4).unwrap();
    assert!(entry.entry().cached_value().is_none());

    assert_eq!(entry.to_float(), Ok(248.44));
    assert_eq!(entry.entry().cached_value(), Some(TypedValue::Float(248.44)));
    assert_eq!(entry.to_float(), Ok(248.44));
}

#[test]
fn test_type_change_invalidates_cache() {
    let mut table = character_table();
    table.set_column_type("level", DataType::Integer);
    assert_eq!(table.entry(0, 2).unwrap().to_integer(), Ok(110));

    table.set_column_type("level", DataType::Bool);
    let entry = table.entry(0, 2).unwrap();
    assert!(matches!(entry.to_integer(), Err(CsvError::InvalidCast { .. })));
    assert!(matches!(entry.to_bool(), Err(CsvError::Format { .. })));

    table.set_column_type("level", DataType::Float);
    assert_eq!(table.entry(0, 2).unwrap().to_float(), Ok(110.0));
}

#[test]
fn test_failed_conversion_can_be_retried_after_retyping() {
    let mut table = character_table();
    table.set_column_type("alive", DataType::Text);
    assert!(table.entry(0, 3).unwrap().to_bool().is_err());

    table.set_column_type("alive", DataType::Bool);
    assert_eq!(table.entry(0, 3).unwrap().to_bool(), Ok(true));
}

#[test]
fn test_cloned_table_keeps_independent_types() {
    let mut table = character_table();
    table.set_column_type("level", DataType::Integer);
    let mut copy = table.clone();
    copy.set_column_type("level", DataType::Text);

    assert_eq!(table.entry(0, 2).unwrap().to_integer(), Ok(110));
    assert!(copy.entry(0, 2).unwrap().to_integer().is_err());
}

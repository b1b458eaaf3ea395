//! Table lookup and query tests

use hycsv_diagnostics::{CsvError, HYC0100};
use hycsv_table::{AliasNaming, CaseInsensitiveNaming, Table};
use hycsv_types::DataType;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn table_with(titles: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new();
    for title in titles {
        table.add_title(*title);
    }
    for (index, cells) in rows.iter().enumerate() {
        table.add_row(index + 1, cells.iter().copied());
    }
    table
}

fn characters() -> Table {
    table_with(
        &["id", "name", "gender"],
        &[
            &["1", "a", "0"],
            &["2", "b", "1"],
            &["3", "c", "0"],
            &["4"],
            &["5", "e", "0"],
        ],
    )
}

fn contents(rows: &[hycsv_table::RowRef<'_>]) -> Vec<String> {
    rows.iter()
        .map(|row| row.entry(0).unwrap().content().to_string())
        .collect()
}

// === Titles ===

#[test]
fn test_find_title_by_index() {
    let table = characters();
    assert_eq!(table.title(1).unwrap().name(), "name");
    assert!(table.title(3).is_none());
}

#[test]
fn test_find_title_by_name() {
    let table = characters();
    let (index, title) = table.find_title_with_index("gender").unwrap();
    assert_eq!(index, 2);
    assert_eq!(title.column_index(), 2);
    assert_eq!(table.find_title("gender"), Some(title));
    assert!(table.find_title("Gender").is_none());
    assert!(table.find_title_with_index("missing").is_none());
}

#[test]
fn test_duplicate_titles_resolve_to_first() {
    let table = table_with(&["id", "id"], &[&["1", "2"]]);
    assert_eq!(table.find_title_with_index("id").unwrap().0, 0);
    assert_eq!(table.row(0).unwrap().entry_by_name("id").unwrap().content(), "1");
}

#[test]
fn test_column_names() {
    let table = characters();
    assert_eq!(table.column_names().collect::<Vec<_>>(), ["id", "name", "gender"]);
}

// === Column types ===

#[test]
fn test_column_type_of_missing_column_is_not_found() {
    let table = characters();
    let err = table.column_type("unknown-name").unwrap_err();
    assert_eq!(err, CsvError::not_found("unknown-name"));
    assert_eq!(err.code(), HYC0100);
}

#[test]
fn test_set_column_type_of_missing_column_is_noop() {
    let mut table = characters();
    table.set_column_type("unknown-name", DataType::Float);
    for title in table.titles() {
        assert_eq!(title.data_type(), DataType::Unknown);
        assert_eq!(title.generation(), 0);
    }
}

#[test]
fn test_set_then_get_column_type() {
    let mut table = characters();
    assert_eq!(table.column_type("id"), Ok(DataType::Unknown));
    table.set_column_type("id", DataType::Integer);
    assert_eq!(table.column_type("id"), Ok(DataType::Integer));
}

// === Rows ===

#[test]
fn test_counts() {
    let table = characters();
    assert_eq!(table.row_count(), 5);
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.row(3).unwrap().element_count(), 1);
}

#[test]
fn test_find_row_bounds() {
    let table = characters();
    assert_eq!(table.row(0).unwrap().index(), 0);
    assert!(table.row(5).is_none());
}

#[test]
fn test_entry_lookup() {
    let table = characters();
    let row = table.row(0).unwrap();
    assert_eq!(row.entry(1).unwrap().content(), "a");
    assert!(row.entry(3).is_none());
    assert_eq!(row.entry_by_name("gender").unwrap().content(), "0");
    assert!(row.entry_by_name("level").is_none());
    assert!(row.entry_by_name("").is_none());
}

#[test]
fn test_entry_by_name_on_short_row() {
    let table = characters();
    let short = table.row(3).unwrap();
    assert!(short.entry_by_name("name").is_none());
    assert_eq!(short.entry_by_name("id").unwrap().content(), "4");
}

#[test]
fn test_find_rows_in_insertion_order() {
    let table = characters();
    let rows = table.find_rows(|row| {
        row.entry_by_name("gender")
            .is_some_and(|entry| entry.content() == "0")
    });
    assert_eq!(contents(&rows), ["1", "3", "5"]);
}

#[test]
fn test_first_and_last_agree_with_find_rows() {
    let table = characters();
    let is_female = |row: &hycsv_table::RowRef<'_>| {
        row.entry_by_name("gender")
            .is_some_and(|entry| entry.content() == "0")
    };
    let all = table.find_rows(is_female);
    assert_eq!(table.find_first_row(is_female).as_ref(), all.first());
    assert_eq!(table.find_last_row(is_female).as_ref(), all.last());
}

#[test]
fn test_no_match() {
    let table = characters();
    assert!(table.find_rows(|_| false).is_empty());
    assert!(table.find_first_row(|_| false).is_none());
    assert!(table.find_last_row(|_| false).is_none());
}

#[test]
fn test_find_rows_by_primary_key_skips_rows_without_key() {
    let table = characters();
    let rows = table.find_rows_by_primary_key("name", |entry| entry.content() != "b");
    assert_eq!(contents(&rows), ["1", "3", "5"]);

    let rows = table.find_rows_by_primary_key("level", |_| true);
    assert!(rows.is_empty());
}

#[test]
fn test_find_rows_by_primary_key_with_typed_key() {
    let mut table = characters();
    table.set_column_type("id", DataType::Integer);
    let rows = table.find_rows_by_primary_key("id", |entry| {
        entry.to_integer().is_ok_and(|id| id >= 3)
    });
    assert_eq!(contents(&rows), ["3", "4", "5"]);
}

// === Naming strategies ===

#[test]
fn test_case_insensitive_naming() {
    let mut table = Table::with_naming(Arc::new(CaseInsensitiveNaming));
    table.add_title(" Level ");
    table.add_row(1, ["7"]);

    assert_eq!(table.title(0).unwrap().name(), "Level");
    assert_eq!(table.title(0).unwrap().content(), " Level ");
    assert!(table.find_title("LEVEL").is_some());
    assert_eq!(table.row(0).unwrap().entry_by_name("level").unwrap().content(), "7");
}

#[test]
fn test_alias_naming() {
    let naming = AliasNaming::new().alias("goden", "gold");
    let mut table = Table::with_naming(Arc::new(naming));
    table.add_title("goden");
    table.add_row(1, ["2000"]);

    table.set_column_type("gold", DataType::Integer);
    assert_eq!(table.column_type("goden"), Ok(DataType::Integer));
    assert_eq!(table.row(0).unwrap().entry_by_name("gold").unwrap().to_integer(), Ok(2000));
}

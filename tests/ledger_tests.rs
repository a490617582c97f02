// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kantingo::error::LedgerError;
use kantingo::ledger::{SheetFormat, load_ledger, load_ledger_file};
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn csv(text: &str) -> Result<kantingo::models::Ledger, LedgerError> {
    load_ledger(text.as_bytes(), SheetFormat::Csv)
}

#[test]
fn csv_loads_records_in_file_order() {
    let ledger = csv("Date,Category,Amount,Note\n2025-01-01,A,100,pay\n2025-01-02,B,-40,\n2025-01-03,B,-10.50,x\n").unwrap();
    let got: Vec<(&str, Decimal)> = ledger
        .records()
        .iter()
        .map(|r| (r.category.as_str(), r.amount))
        .collect();
    assert_eq!(
        got,
        vec![
            ("A", Decimal::from(100)),
            ("B", Decimal::from(-40)),
            ("B", Decimal::new(-1050, 2)),
        ]
    );
}

#[test]
fn missing_amount_column_is_schema_error() {
    let err = csv("Category,Value\nA,100\n").unwrap_err();
    let schema = err.schema().expect("schema error");
    assert_eq!(schema.missing, vec!["Amount"]);
}

#[test]
fn column_names_are_case_sensitive() {
    let err = csv("category,amount\nA,100\n").unwrap_err();
    assert_eq!(err.schema().unwrap().missing, vec!["Category", "Amount"]);
}

#[test]
fn empty_file_reports_both_columns_missing() {
    let err = csv("").unwrap_err();
    assert_eq!(err.schema().unwrap().missing.len(), 2);
}

#[test]
fn blank_rows_are_skipped_and_grouped_amounts_parse() {
    let ledger = csv("Category,Amount\nRent,\"-1,250.50\"\n,\n  ,  \nSalary,2000\n").unwrap();
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.records()[0].amount, Decimal::new(-125050, 2));
}

#[test]
fn bad_amount_names_the_row() {
    let err = csv("Category,Amount\nA,100\nB,lots\n").unwrap_err();
    match err {
        LedgerError::InvalidRow { row, reason } => {
            assert_eq!(row, 3);
            assert!(reason.contains("Amount"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn blank_category_is_rejected() {
    let err = csv("Category,Amount\n,-5\n").unwrap_err();
    assert!(matches!(err, LedgerError::InvalidRow { row: 2, .. }));
}

#[test]
fn file_format_follows_extension() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "Category,Amount\nFood,-12").unwrap();
    file.flush().unwrap();
    let ledger = load_ledger_file(file.path()).unwrap();
    assert_eq!(ledger.len(), 1);

    let txt = Builder::new().suffix(".txt").tempfile().unwrap();
    let err = load_ledger_file(txt.path()).unwrap_err();
    assert!(matches!(err, LedgerError::UnsupportedFormat(ext) if ext == "txt"));
}

#[test]
fn xlsx_workbook_loads_first_sheet() {
    let ledger = load_ledger_file(fixture("ledger.xlsx")).unwrap();
    assert_eq!(ledger.len(), 4);
    assert_eq!(ledger.records()[0].category, "Salary");
    assert_eq!(ledger.records()[0].amount, Decimal::from(100));
    assert_eq!(ledger.records()[3].category, "Transport");
    assert_eq!(ledger.records()[3].amount, Decimal::from(-50));
}

#[test]
fn xlsx_missing_column_is_schema_error() {
    let err = load_ledger_file(fixture("missing_amount.xlsx")).unwrap_err();
    assert_eq!(err.schema().unwrap().missing, vec!["Amount"]);
}

#[test]
fn garbage_bytes_are_not_a_workbook() {
    let err = load_ledger(b"definitely not a spreadsheet", SheetFormat::Excel).unwrap_err();
    assert!(matches!(err, LedgerError::Workbook(_)));
}

#[test]
fn amount_beyond_decimal_range_is_out_of_range() {
    let err = csv("Category,Amount\nX,-1e30\n").unwrap_err();
    match err {
        LedgerError::InvalidRow { row, reason } => {
            assert_eq!(row, 2);
            assert_eq!(reason, "Amount is out of range");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn totals_that_cannot_be_forecast_are_rejected() {
    // fits a Decimal on its own, but not once scaled by the worst case
    let err = csv("Category,Amount\nX,-70000000000000000000000000000\n").unwrap_err();
    assert!(matches!(err, LedgerError::TotalOutOfRange));

    let err = csv("Category,Amount\nX,-5e28\nY,-5e28\n").unwrap_err();
    assert!(matches!(err, LedgerError::TotalOutOfRange));

    let ledger = csv("Category,Amount\nX,-50000000000000000000000000000\n").unwrap();
    let rows = kantingo::analysis::forecast_unseeded(&kantingo::analysis::aggregate_expenses(&ledger));
    assert!(rows[0].worst_case > rows[0].base);
}

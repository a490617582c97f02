// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Loads an uploaded spreadsheet into a [`Ledger`].
//!
//! Excel-family workbooks go through calamine (first worksheet, first row is
//! the header); CSV goes through the csv crate. Both end up in the same
//! row validation so the two formats behave identically.

use crate::error::{LedgerError, SchemaError};
use crate::models::{Ledger, TransactionRecord};
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

pub const CATEGORY_COLUMN: &str = "Category";
pub const AMOUNT_COLUMN: &str = "Amount";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Excel,
    Csv,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> Result<Self, LedgerError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SheetFormat::Excel),
            "csv" => Ok(SheetFormat::Csv),
            _ => Err(LedgerError::UnsupportedFormat(ext)),
        }
    }
}

/// Reads the file at `path`, picking the format from its extension.
pub fn load_ledger_file(path: impl AsRef<Path>) -> Result<Ledger, LedgerError> {
    let path = path.as_ref();
    let format = SheetFormat::from_path(path)?;
    let bytes = std::fs::read(path)?;
    let ledger = load_ledger(&bytes, format)?;
    info!(path = %path.display(), rows = ledger.len(), "loaded ledger");
    Ok(ledger)
}

pub fn load_ledger(bytes: &[u8], format: SheetFormat) -> Result<Ledger, LedgerError> {
    match format {
        SheetFormat::Excel => read_workbook(bytes),
        SheetFormat::Csv => read_csv(bytes),
    }
}

#[derive(Debug, Clone)]
enum Cell {
    Empty,
    Float(f64),
    Int(i64),
    Text(String),
}

impl Cell {
    fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&Data> for Cell {
    fn from(d: &Data) -> Self {
        match d {
            Data::Empty => Cell::Empty,
            Data::Float(f) => Cell::Float(*f),
            Data::Int(i) => Cell::Int(*i),
            Data::String(s) => Cell::Text(s.clone()),
            other => Cell::Text(other.to_string()),
        }
    }
}

/// Column positions of the required fields within a header row.
struct Columns {
    category: usize,
    amount: usize,
}

fn locate_columns<S: AsRef<str>>(headers: &[S]) -> Result<Columns, SchemaError> {
    let find = |name: &str| headers.iter().position(|h| h.as_ref() == name);
    let category = find(CATEGORY_COLUMN);
    let amount = find(AMOUNT_COLUMN);
    match (category, amount) {
        (Some(category), Some(amount)) => Ok(Columns { category, amount }),
        _ => {
            let mut missing = Vec::new();
            if category.is_none() {
                missing.push(CATEGORY_COLUMN.to_string());
            }
            if amount.is_none() {
                missing.push(AMOUNT_COLUMN.to_string());
            }
            Err(SchemaError { missing })
        }
    }
}

fn read_workbook(bytes: &[u8]) -> Result<Ledger, LedgerError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LedgerError::EmptyWorkbook)??;
    let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default();
    let cols = locate_columns(&headers)?;
    debug!(?headers, "workbook header");

    let mut records = Vec::new();
    for (idx, row) in rows.enumerate() {
        let cells: Vec<Cell> = row.iter().map(Cell::from).collect();
        // header sits on spreadsheet row first_row + 1
        let sheet_row = first_row + idx + 2;
        if let Some(rec) = parse_row(&cells, &cols, sheet_row)? {
            records.push(rec);
        }
    }
    bounded(records)
}

fn read_csv(bytes: &[u8]) -> Result<Ledger, LedgerError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let cols = locate_columns(&headers)?;
    debug!(?headers, "csv header");

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let rec = result?;
        let line = rec
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);
        let cells: Vec<Cell> = rec.iter().map(|s| Cell::Text(s.to_string())).collect();
        if let Some(r) = parse_row(&cells, &cols, line)? {
            records.push(r);
        }
    }
    bounded(records)
}

fn parse_row(
    cells: &[Cell],
    cols: &Columns,
    row: usize,
) -> Result<Option<TransactionRecord>, LedgerError> {
    if cells.iter().all(Cell::is_blank) {
        return Ok(None);
    }
    let category = match cells.get(cols.category) {
        Some(Cell::Text(s)) => s.trim().to_string(),
        Some(Cell::Int(i)) => i.to_string(),
        Some(Cell::Float(f)) => f.to_string(),
        Some(Cell::Empty) | None => String::new(),
    };
    if category.is_empty() {
        return Err(LedgerError::InvalidRow {
            row,
            reason: format!("{} is blank", CATEGORY_COLUMN),
        });
    }
    let amount = match cells.get(cols.amount).map(cell_amount) {
        Some(Ok(a)) => a,
        Some(Err(problem)) => {
            return Err(LedgerError::InvalidRow {
                row,
                reason: format!("{} {}", AMOUNT_COLUMN, problem),
            });
        }
        None => {
            return Err(LedgerError::InvalidRow {
                row,
                reason: format!("{} {}", AMOUNT_COLUMN, AmountProblem::NotANumber),
            });
        }
    };
    Ok(Some(TransactionRecord { category, amount }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AmountProblem {
    NotANumber,
    OutOfRange,
}

impl std::fmt::Display for AmountProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmountProblem::NotANumber => f.write_str("is not a number"),
            AmountProblem::OutOfRange => f.write_str("is out of range"),
        }
    }
}

fn cell_amount(cell: &Cell) -> Result<Decimal, AmountProblem> {
    match cell {
        Cell::Int(i) => Ok(Decimal::from(*i)),
        Cell::Float(f) if f.is_finite() => {
            Decimal::try_from(*f).map_err(|_| AmountProblem::OutOfRange)
        }
        Cell::Float(_) | Cell::Empty => Err(AmountProblem::NotANumber),
        Cell::Text(s) => parse_amount_text(s),
    }
}

/// Accepts plain and thousands-grouped numbers such as `-1,250.50`.
/// Finite numbers too large for a `Decimal` are reported as out of range.
fn parse_amount_text(s: &str) -> Result<Decimal, AmountProblem> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Err(AmountProblem::NotANumber);
    }
    cleaned
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| match cleaned.parse::<f64>() {
            Ok(f) if f.is_finite() => AmountProblem::OutOfRange,
            _ => AmountProblem::NotANumber,
        })
}

/// Largest multiplier the forecaster applies; totals must survive it.
const FORECAST_CEILING: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Rejects ledgers whose combined magnitude, scaled by the worst-case
/// multiplier, would not fit in a `Decimal`. Every summary, aggregate and
/// forecast value is bounded by that figure.
fn bounded(records: Vec<TransactionRecord>) -> Result<Ledger, LedgerError> {
    records
        .iter()
        .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.amount.abs()))
        .and_then(|total| total.checked_mul(FORECAST_CEILING))
        .ok_or(LedgerError::TotalOutOfRange)?;
    Ok(Ledger::new(records))
}

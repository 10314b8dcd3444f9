// src/data/loader.rs
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::{NaiveTime, Timelike};

use super::{DashboardContext, Transaction};

// Fixed window of the supermarket sales workbook: three decoration rows above
// the header, data restricted to columns B:R, at most 1000 transaction rows.
const SKIP_ROWS: u32 = 3;
const FIRST_COL: u32 = 1; // column B
const LAST_COL: u32 = 17; // column R
const MAX_ROWS: usize = 1000;

const COL_CITY: &str = "City";
const COL_CUSTOMER_TYPE: &str = "Customer_type";
const COL_GENDER: &str = "Gender";
const COL_PRODUCT_LINE: &str = "Product line";
const COL_TOTAL: &str = "Total";
const COL_RATING: &str = "Rating";
const COL_TIME: &str = "Time";

// Absolute (sheet) column indices of the required columns, resolved from the
// header row.
struct ColumnMap {
    city: u32,
    customer_type: u32,
    gender: u32,
    product_line: u32,
    total: u32,
    rating: u32,
    time: u32,
}

impl ColumnMap {
    fn from_header(header: &[Data], col_offset: u32) -> Result<Self> {
        let find = |name: &str| -> Result<u32> {
            header
                .iter()
                .enumerate()
                .map(|(i, cell)| (col_offset + i as u32, cell))
                .filter(|(col, _)| (FIRST_COL..=LAST_COL).contains(col))
                .find(|&(_, cell)| matches!(cell, Data::String(s) if s.trim() == name))
                .map(|(col, _)| col)
                .ok_or_else(|| anyhow!("Missing required column '{}' in header row", name))
        };

        Ok(Self {
            city: find(COL_CITY)?,
            customer_type: find(COL_CUSTOMER_TYPE)?,
            gender: find(COL_GENDER)?,
            product_line: find(COL_PRODUCT_LINE)?,
            total: find(COL_TOTAL)?,
            rating: find(COL_RATING)?,
            time: find(COL_TIME)?,
        })
    }
}

// The seven cells of one data row, in source order. Split out from the sheet
// walk so row parsing is testable without a workbook on disk.
pub(crate) struct RowCells<'a> {
    pub city: &'a Data,
    pub customer_type: &'a Data,
    pub gender: &'a Data,
    pub product_line: &'a Data,
    pub total: &'a Data,
    pub rating: &'a Data,
    pub time: &'a Data,
}

// Loads the workbook once at startup. Any structural problem (missing file,
// empty workbook, missing header columns, no usable rows) is fatal and
// propagates out of main; individual malformed rows are skipped with a
// warning.
pub fn load_context(path: &Path) -> Result<DashboardContext> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("Workbook has no worksheets: {}", path.display()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read worksheet '{}'", sheet_name))?;

    // Row/column coordinates from the iterator are relative to the top-left
    // of the used range, not the sheet.
    let (row_offset, col_offset) = range.start().unwrap_or((0, 0));

    let mut column_map: Option<ColumnMap> = None;
    let mut dataset = Vec::new();

    for (i, row) in range.rows().enumerate() {
        let sheet_row = row_offset + i as u32;
        if sheet_row < SKIP_ROWS {
            continue;
        }

        // First row inside the window is the header.
        let Some(columns) = &column_map else {
            column_map = Some(ColumnMap::from_header(row, col_offset)?);
            continue;
        };

        if dataset.len() >= MAX_ROWS {
            break;
        }

        let cells = RowCells {
            city: cell_at(row, col_offset, columns.city),
            customer_type: cell_at(row, col_offset, columns.customer_type),
            gender: cell_at(row, col_offset, columns.gender),
            product_line: cell_at(row, col_offset, columns.product_line),
            total: cell_at(row, col_offset, columns.total),
            rating: cell_at(row, col_offset, columns.rating),
            time: cell_at(row, col_offset, columns.time),
        };

        match parse_transaction(&cells) {
            Ok(transaction) => dataset.push(transaction),
            Err(e) => eprintln!("Warning: Skipping row {}: {}", sheet_row + 1, e),
        }
    }

    if column_map.is_none() {
        return Err(anyhow!("Worksheet '{}' has no header row", sheet_name));
    }
    if dataset.is_empty() {
        return Err(anyhow!("Worksheet '{}' has no transaction rows", sheet_name));
    }

    Ok(DashboardContext::new(dataset))
}

static EMPTY_CELL: Data = Data::Empty;

// Cells are indexed relative to the top-left of the used range; anything
// outside the row reads as an empty cell.
fn cell_at<'a>(row: &'a [Data], col_offset: u32, col: u32) -> &'a Data {
    col.checked_sub(col_offset)
        .and_then(|i| row.get(i as usize))
        .unwrap_or(&EMPTY_CELL)
}

pub(crate) fn parse_transaction(cells: &RowCells) -> Result<Transaction> {
    let time = time_value(cells.time).ok_or_else(|| anyhow!("Invalid Time cell"))?;

    Ok(Transaction {
        city: text_value(cells.city).ok_or_else(|| anyhow!("Invalid City cell"))?,
        customer_type: text_value(cells.customer_type)
            .ok_or_else(|| anyhow!("Invalid Customer_type cell"))?,
        gender: text_value(cells.gender).ok_or_else(|| anyhow!("Invalid Gender cell"))?,
        product_line: text_value(cells.product_line)
            .ok_or_else(|| anyhow!("Invalid Product line cell"))?,
        total: numeric_value(cells.total).ok_or_else(|| anyhow!("Invalid Total cell"))?,
        rating: numeric_value(cells.rating).ok_or_else(|| anyhow!("Invalid Rating cell"))?,
        hour: time.hour(),
        time,
    })
}

fn text_value(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

fn numeric_value(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(v) => Some(*v),
        Data::Int(v) => Some(*v as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// The Time column is "HH:MM:SS" text in the source file, but Excel sometimes
// re-types such cells as native time values, so both are accepted.
fn time_value(cell: &Data) -> Option<NaiveTime> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
                .ok()
        }
        Data::DateTime(dt) => {
            // Serial date-times carry the time of day in the fractional part.
            let seconds = (dt.as_f64().fract() * 86_400.0).round() as u32;
            NaiveTime::from_num_seconds_from_midnight_opt(seconds % 86_400, 0)
        }
        _ => None,
    }
}

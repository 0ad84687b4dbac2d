//! CSV batch loading.
//!
//! Exported spreadsheet batches arrive as CSV with the usual hygiene
//! problems: BOM on the first header, stray whitespace inside header names,
//! and ragged rows. Everything is normalized here so the core can assume
//! rectangular records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use muni_model::{CellValue, Record};

#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Strip a BOM and collapse whitespace runs inside a header name.
fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Read a CSV file into a rectangular table.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    read_csv_reader(file)
}

/// Read CSV from any reader. Rows shorter than the header are padded with
/// empty cells; cells beyond the header width are dropped.
pub fn read_csv_reader<R: Read>(reader: R) -> Result<CsvTable> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()
        .context("read csv headers")?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let row = result.context("read csv row")?;
        let mut cells: Vec<String> = row.iter().map(normalize_cell).collect();
        cells.resize(headers.len(), String::new());
        rows.push(cells);
    }

    Ok(CsvTable { headers, rows })
}

impl CsvTable {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Convert rows into records; empty cells become null values.
    pub fn records(&self) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| {
                Record::from_pairs(self.headers.iter().zip(row).map(|(header, cell)| {
                    let value = if cell.is_empty() {
                        CellValue::Null
                    } else {
                        CellValue::Text(cell.clone())
                    };
                    (header.clone(), value)
                }))
            })
            .collect()
    }
}

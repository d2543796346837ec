//! In-memory table loaded from CSV: a header row naming the columns,
//! then data rows of raw string cells. Replaced wholesale on reload,
//! never mutated in place.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Decode a table from CSV text. The first record is the header;
    /// blank lines are skipped by the decoder. Duplicate header names
    /// and ragged rows are rejected as `DataFormat`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Table> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();
        if columns.is_empty() {
            return Err(Error::DataFormat("empty header row".to_string()));
        }
        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(Error::DataFormat(format!("duplicate column name: {}", name)));
            }
        }

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        Ok(Table { columns, rows })
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Table> {
        let file = File::open(path.as_ref())
            .map_err(|e| Error::DataFormat(format!("{}: {}", path.as_ref().display(), e)))?;
        Table::from_csv_reader(file)
    }

    /// Build a table directly from parts. Intended for tests and for
    /// callers that already hold parsed data.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Table> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::DataFormat(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Table { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw cell value, or `None` when the column does not exist or the
    /// row index is out of range.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| r[col].as_str())
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

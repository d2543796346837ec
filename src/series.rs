//! Numeric extraction from table columns.
//!
//! Extraction is lenient per cell: anything that does not parse as a
//! finite number is dropped, not replaced. Statistics involving more
//! than one column must not filter per column independently (that can
//! silently misalign rows); they go through [`common_rows`] and
//! [`extract_at`] so every column sees the same row index set.

use crate::table::Table;

/// Coerce a raw cell to a finite float. Blank cells, placeholders and
/// non-finite parses (`inf`, `NaN`) all fail coercion.
pub fn coerce(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Extract one column as a numeric series, order preserved, invalid
/// entries dropped. A column absent from the table yields an empty
/// series; callers treat that as "no usable data", not as an error.
pub fn extract(table: &Table, column: &str) -> Vec<f64> {
    let idx = match table.column_index(column) {
        Some(i) => i,
        None => return Vec::new(),
    };
    table
        .rows()
        .iter()
        .filter_map(|row| coerce(&row[idx]))
        .collect()
}

/// Row indices whose cells coerce in *every* listed column. Columns
/// absent from the table make the intersection empty.
pub fn common_rows(table: &Table, columns: &[&str]) -> Vec<usize> {
    let mut indices: Vec<usize> = Vec::with_capacity(columns.len());
    for col in columns {
        match table.column_index(col) {
            Some(i) => indices.push(i),
            None => return Vec::new(),
        }
    }
    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| indices.iter().all(|&i| coerce(&row[i]).is_some()))
        .map(|(r, _)| r)
        .collect()
}

/// Extract the given column at a fixed row index set (normally the
/// output of [`common_rows`]). Rows where the cell does not coerce are
/// skipped, so passing an index set valid for this column returns one
/// value per index.
pub fn extract_at(table: &Table, column: &str, rows: &[usize]) -> Vec<f64> {
    rows.iter()
        .filter_map(|&r| table.cell(r, column).and_then(coerce))
        .collect()
}

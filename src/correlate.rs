//! Pairwise Pearson correlation matrix.
//!
//! Each pair is computed over the rows numeric in *both* columns (the
//! common index set from [`crate::series::common_rows`]); filtering the
//! columns independently could silently pair values from different
//! rows. A pair with a zero denominator (one or both series constant,
//! or no usable rows) reports coefficient 0.0 by convention rather
//! than NaN.

use serde::Serialize;

use crate::series::{common_rows, extract_at};
use crate::table::Table;

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationEntry {
    pub a: String,
    pub b: String,
    pub coefficient: f64,
}

/// Pearson's r over two equal-length series. Zero denominator → 0.0.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return 0.0;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        0.0
    } else {
        cov / denom
    }
}

/// One entry per ordered pair in `columns × columns`, self-pairs
/// included. The result is symmetric: entry (A,B) equals entry (B,A).
pub fn correlate(table: &Table, columns: &[String]) -> Vec<CorrelationEntry> {
    let mut entries = Vec::with_capacity(columns.len() * columns.len());
    for a in columns {
        for b in columns {
            let rows = common_rows(table, &[a.as_str(), b.as_str()]);
            let x = extract_at(table, a, &rows);
            let y = extract_at(table, b, &rows);
            entries.push(CorrelationEntry {
                a: a.clone(),
                b: b.clone(),
                coefficient: pearson(&x, &y),
            });
        }
    }
    entries
}

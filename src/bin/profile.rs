//! Local statistics shell: load a CSV, emit per-column summaries,
//! histograms and the pairwise correlation matrix as JSON on stdout.

use datascope::correlate::correlate;
use datascope::histogram::bin;
use datascope::logging::{json_log, obj, v_num, v_str};
use datascope::series::extract;
use datascope::state::Config;
use datascope::summary::{mean, stddev, summarize};
use datascope::table::Table;
use serde_json::json;
use std::env;

fn main() -> anyhow::Result<()> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/sample.csv".to_string());
    let cfg = Config::from_env();

    let table = match Table::from_csv_path(&path) {
        Ok(t) => t,
        Err(err) => {
            eprintln!("failed to load {}: {}", path, err);
            std::process::exit(1);
        }
    };
    json_log(
        "table_loaded",
        obj(&[
            ("path", v_str(&path)),
            ("rows", v_num(table.row_count() as f64)),
            ("columns", v_num(table.columns().len() as f64)),
        ]),
    );

    // Columns requested on the command line, or every column with at
    // least one numeric value.
    let requested: Vec<String> = env::args().skip(2).collect();
    let columns: Vec<String> = if requested.is_empty() {
        table
            .columns()
            .iter()
            .filter(|c| !extract(&table, c.as_str()).is_empty())
            .cloned()
            .collect()
    } else {
        requested
    };

    let mut per_column = Vec::new();
    for col in &columns {
        let series = extract(&table, col);
        if series.is_empty() {
            per_column.push(json!({ "column": col, "usable": 0 }));
            continue;
        }
        per_column.push(json!({
            "column": col,
            "usable": series.len(),
            "mean": mean(&series),
            "stddev": stddev(&series),
            "summary": summarize(&series),
            "histogram": bin(&series, cfg.bin_count),
        }));
    }

    let matrix = correlate(&table, &columns);
    let report = json!({
        "source": path,
        "rows": table.row_count(),
        "columns": per_column,
        "correlations": matrix,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

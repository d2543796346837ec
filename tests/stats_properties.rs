//! Invariant checks for the local statistics core: bin totals,
//! correlation symmetry and conventions, quartile rank selection, and
//! lenient numeric extraction over a real CSV file.

use std::io::Write;

use datascope::correlate::correlate;
use datascope::histogram::bin;
use datascope::series::extract;
use datascope::summary::{stddev, summarize};
use datascope::table::Table;

fn sample_table() -> Table {
    Table::from_csv_reader(
        "a,b,c\n\
         1,2,x\n\
         2,4,7\n\
         3,6,n/a\n\
         4,8,1\n\
         5,10,3\n"
            .as_bytes(),
    )
    .unwrap()
}

#[test]
fn bin_counts_sum_to_series_length() {
    let table = sample_table();
    let series = extract(&table, "a");
    for k in 1..=25 {
        let total: usize = bin(&series, k).iter().map(|b| b.count).sum();
        assert_eq!(total, series.len(), "bin_count={}", k);
    }
}

#[test]
fn self_correlation_convention() {
    let table = Table::from_csv_reader("varying,constant\n1,5\n2,5\n3,5\n".as_bytes()).unwrap();
    let cols = vec!["varying".to_string(), "constant".to_string()];
    let entries = correlate(&table, &cols);

    let varying = extract(&table, "varying");
    assert!(stddev(&varying) > 0.0);
    let vv = entries.iter().find(|e| e.a == "varying" && e.b == "varying").unwrap();
    assert!((vv.coefficient - 1.0).abs() < 1e-9);

    // constant series: mathematically undefined, 0 by convention
    let cc = entries.iter().find(|e| e.a == "constant" && e.b == "constant").unwrap();
    assert_eq!(cc.coefficient, 0.0);
}

#[test]
fn correlation_matrix_is_symmetric() {
    let table = sample_table();
    let cols: Vec<String> = table.columns().to_vec();
    let entries = correlate(&table, &cols);
    assert_eq!(entries.len(), cols.len() * cols.len());
    for e in &entries {
        let mirror = entries
            .iter()
            .find(|m| m.a == e.b && m.b == e.a)
            .unwrap();
        assert!(
            (e.coefficient - mirror.coefficient).abs() < 1e-9,
            "({},{}) {} vs {}",
            e.a,
            e.b,
            e.coefficient,
            mirror.coefficient
        );
    }
}

#[test]
fn quartiles_are_order_independent() {
    let shuffled = [9.0, 1.0, 7.0, 3.0, 5.0, 2.0, 8.0, 4.0, 6.0];
    let mut sorted = shuffled;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let a = summarize(&shuffled);
    let b = summarize(&sorted);
    assert_eq!(a.q1, b.q1);
    assert_eq!(a.median, b.median);
    assert_eq!(a.q3, b.q3);
}

#[test]
fn perfectly_linear_columns_correlate_to_one() {
    let table = Table::from_csv_reader("a,b\n1,2\n2,4\n3,6\n".as_bytes()).unwrap();
    let cols = vec!["a".to_string(), "b".to_string()];
    let ab = correlate(&table, &cols)
        .into_iter()
        .find(|e| e.a == "a" && e.b == "b")
        .unwrap();
    assert!((ab.coefficient - 1.0).abs() < 1e-9);
}

#[test]
fn one_bin_spans_the_whole_range() {
    let bins = bin(&[1.0, 2.0, 3.0, 4.0, 5.0], 1);
    assert_eq!(bins.len(), 1);
    assert_eq!((bins[0].lo, bins[0].hi, bins[0].count), (1.0, 5.0, 5));
}

#[test]
fn nearest_rank_quartiles_on_four_elements() {
    let s = summarize(&[10.0, 20.0, 30.0, 40.0]);
    assert_eq!(s.q1, 20.0);
    assert_eq!(s.median, 30.0);
    assert_eq!(s.q3, 40.0);
}

#[test]
fn extraction_drops_placeholders_in_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x,label").unwrap();
    for i in 0..10 {
        if i % 2 == 0 {
            writeln!(file, "{},row{}", i, i).unwrap();
        } else {
            writeln!(file, "missing,row{}", i).unwrap();
        }
    }
    file.flush().unwrap();

    let table = Table::from_csv_path(file.path()).unwrap();
    let series = extract(&table, "x");
    assert_eq!(series, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
}

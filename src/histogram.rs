//! Equal-width histogram binning over `[min, max]`.

use serde::Serialize;

pub const DEFAULT_BIN_COUNT: usize = 20;

/// One half-open interval `[lo, hi)` with its member count; the last
/// bin of a partition is closed at `hi`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Partition the series range into `bin_count` equal-width bins and
/// count membership. Every element lands in exactly one bin; counts
/// sum to the series length.
///
/// Degenerate inputs: an empty series (or `bin_count == 0`) yields an
/// empty sequence; a single-valued series yields one zero-width bin
/// holding every element.
pub fn bin(series: &[f64], bin_count: usize) -> Vec<Bin> {
    if series.is_empty() || bin_count == 0 {
        return Vec::new();
    }
    let lo = series.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        return vec![Bin { lo, hi, count: series.len() }];
    }

    let width = (hi - lo) / bin_count as f64;
    let mut counts = vec![0usize; bin_count];
    for &v in series {
        // hi itself would index one past the end; clamp closes the last bin
        let idx = (((v - lo) / width) as usize).min(bin_count - 1);
        counts[idx] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| Bin {
            lo: lo + i as f64 * width,
            hi: lo + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bin_spans_range() {
        let bins = bin(&[1.0, 2.0, 3.0, 4.0, 5.0], 1);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].lo, 1.0);
        assert_eq!(bins[0].hi, 5.0);
        assert_eq!(bins[0].count, 5);
    }

    #[test]
    fn counts_sum_to_length() {
        let series: Vec<f64> = (0..137).map(|i| (i as f64 * 0.73).sin() * 50.0).collect();
        for k in [1, 2, 7, 20, 100] {
            let total: usize = bin(&series, k).iter().map(|b| b.count).sum();
            assert_eq!(total, series.len(), "bin_count={}", k);
        }
    }

    #[test]
    fn max_value_falls_in_last_bin() {
        let bins = bin(&[0.0, 10.0], 4);
        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[3].count, 1);
    }

    #[test]
    fn empty_series_yields_no_bins() {
        assert!(bin(&[], 20).is_empty());
    }

    #[test]
    fn constant_series_yields_degenerate_bin() {
        let bins = bin(&[3.0, 3.0, 3.0], 20);
        assert_eq!(bins, vec![Bin { lo: 3.0, hi: 3.0, count: 3 }]);
    }

    #[test]
    fn bins_ascend_and_tile_the_range() {
        let bins = bin(&[-2.0, -1.0, 0.0, 1.0, 2.0], 4);
        for pair in bins.windows(2) {
            assert!(pair[0].hi <= pair[1].lo + 1e-12);
            assert!(pair[0].lo < pair[1].lo);
        }
        assert_eq!(bins[0].lo, -2.0);
        assert!((bins[3].hi - 2.0).abs() < 1e-12);
    }
}

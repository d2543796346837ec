//! Moment and order statistics over a numeric series.
//!
//! None of these return errors: an empty series yields NaN outputs and
//! the caller checks length before rendering.

use serde::Serialize;

pub fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

/// Population standard deviation (divide by N, not N-1).
pub fn stddev(series: &[f64]) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    let m = mean(series);
    let var = series.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / series.len() as f64;
    var.sqrt()
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    pub fn is_defined(&self) -> bool {
        !self.min.is_nan()
    }
}

/// Nearest-rank selection at `floor(N * p)` on an ascending sort.
/// No interpolation between adjacent ranks; with N=4 the quartiles land
/// on indices 1, 2, 3.
fn rank(sorted: &[f64], p: f64) -> f64 {
    let idx = (sorted.len() as f64 * p).floor() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

pub fn summarize(series: &[f64]) -> FiveNumberSummary {
    if series.is_empty() {
        return FiveNumberSummary {
            min: f64::NAN,
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            max: f64::NAN,
        };
    }
    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    FiveNumberSummary {
        min: sorted[0],
        q1: rank(&sorted, 0.25),
        median: rank(&sorted, 0.5),
        q3: rank(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_stddev() {
        let s = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&s), 5.0);
        assert_eq!(stddev(&s), 2.0); // classic population-stddev example
    }

    #[test]
    fn empty_series_is_nan_flagged() {
        assert!(mean(&[]).is_nan());
        assert!(stddev(&[]).is_nan());
        assert!(!summarize(&[]).is_defined());
    }

    #[test]
    fn nearest_rank_quartiles() {
        // floor(4*0.25)=1, floor(4*0.5)=2, floor(4*0.75)=3
        let s = summarize(&[10.0, 20.0, 30.0, 40.0]);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.q1, 20.0);
        assert_eq!(s.median, 30.0);
        assert_eq!(s.q3, 40.0);
        assert_eq!(s.max, 40.0);
    }

    #[test]
    fn single_element() {
        let s = summarize(&[7.0]);
        assert_eq!(s.min, 7.0);
        assert_eq!(s.q1, 7.0);
        assert_eq!(s.median, 7.0);
        assert_eq!(s.q3, 7.0);
        assert_eq!(s.max, 7.0);
    }

    #[test]
    fn order_independent() {
        let a = summarize(&[5.0, 1.0, 4.0, 2.0, 3.0]);
        let b = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(a.q1, b.q1);
        assert_eq!(a.median, b.median);
        assert_eq!(a.q3, b.q3);
    }
}

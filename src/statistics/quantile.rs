//! Quartile estimation and Tukey fences.
//!
//! Quantiles use the R-7 definition (linear interpolation between order
//! statistics): rank = p × (n−1), interpolating between the floor and ceil
//! ranks. This matches the percentile method the reference measurements
//! were originally cleaned with; switching quartile conventions silently
//! shifts every fence downstream.

use crate::constants::TUKEY_MULTIPLIER;

/// Outlier rejection interval derived from a sequence's quartiles.
///
/// Recomputed per call and never cached across filter passes; the fence of
/// a shrunk sequence is a different fence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierBounds {
    /// Lower fence, Q1 − 1.5·IQR.
    pub low: f64,
    /// Upper fence, Q3 + 1.5·IQR.
    pub high: f64,
}

impl OutlierBounds {
    /// Whether a sample lies strictly inside the fences.
    ///
    /// Strict on both ends: a sample exactly equal to a fence is rejected.
    pub fn contains(&self, sample: f64) -> bool {
        self.low < sample && sample < self.high
    }
}

/// Quantile at probability `p` from an ascending-sorted slice.
///
/// # Panics
///
/// Panics if `sorted` is empty or `p` is outside [0, 1]. Callers guard
/// length before reaching here.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "quantile of empty slice");
    assert!((0.0..=1.0).contains(&p), "quantile probability out of range");

    let n = sorted.len();
    let rank = (n - 1) as f64 * p;
    let lower = rank.floor() as usize;
    let frac = rank - rank.floor();

    if lower >= n - 1 {
        return sorted[n - 1];
    }
    if frac == 0.0 {
        return sorted[lower];
    }
    sorted[lower] + frac * (sorted[lower + 1] - sorted[lower])
}

/// First and third quartiles of a sequence.
///
/// Sorts one working copy and reads both quartiles from it, so the input
/// order is preserved for the caller.
///
/// # Panics
///
/// Panics if `samples` is empty.
pub fn quartiles(samples: &[f64]) -> (f64, f64) {
    assert!(!samples.is_empty(), "quartiles of empty slice");

    let mut sorted = samples.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    (
        quantile_sorted(&sorted, 0.25),
        quantile_sorted(&sorted, 0.75),
    )
}

/// Tukey fences for a sequence: Q1 − 1.5·IQR and Q3 + 1.5·IQR.
///
/// # Panics
///
/// Panics if `samples` is empty.
pub fn tukey_fences(samples: &[f64]) -> OutlierBounds {
    let (q1, q3) = quartiles(samples);
    let iqr = q3 - q1;
    OutlierBounds {
        low: q1 - TUKEY_MULTIPLIER * iqr,
        high: q3 + TUKEY_MULTIPLIER * iqr,
    }
}

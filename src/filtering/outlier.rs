//! Statistical outlier rejection with a per-grouping secondary cutoff.
//!
//! The filter expects an already timeout-filtered sequence but re-applies
//! the timeout threshold as a first step anyway; on clean input that pass
//! is an exact no-op, and keeping it means the fence computation can never
//! see a sentinel regardless of call order.

use serde::{Deserialize, Serialize};

use super::timeout::filter_timeouts;
use crate::constants::MIN_QUARTILE_SAMPLES;
use crate::statistics::tukey_fences;

/// Per-sequence accounting of what the cleaning passes removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    /// Samples before any filtering.
    pub total: usize,
    /// Samples removed as timeout sentinels.
    pub timeouts_removed: usize,
    /// Samples removed by the Tukey fences.
    pub fence_removed: usize,
    /// Samples removed by the secondary hard cutoff.
    pub cutoff_removed: usize,
    /// Samples surviving all passes.
    pub retained: usize,
    /// True when the sequence was too short for a quartile split and was
    /// passed through unfiltered.
    pub insufficient_data: bool,
}

/// Remove statistical outliers from a timeout-filtered sequence.
///
/// The algorithm, in order:
/// 1. Re-apply `timeout` (idempotent guard, see module docs).
/// 2. Compute Q1/Q3 by linear interpolation and the Tukey fences
///    Q1 − 1.5·IQR, Q3 + 1.5·IQR from the sequence's own quartiles.
/// 3. Retain samples strictly inside the fences; fence-equal samples drop.
/// 4. Drop samples at or above `cutoff`, the externally supplied
///    per-grouping threshold.
///
/// Sequences shorter than [`MIN_QUARTILE_SAMPLES`] after the timeout guard
/// have no meaningful quartile split and are returned unchanged with
/// `insufficient_data` set; the caller flags them instead of dropping them.
pub fn filter_outliers(samples: &[f64], timeout: f64, cutoff: f64) -> (Vec<f64>, FilterStats) {
    let total = samples.len();

    let guarded = filter_timeouts(samples, timeout);
    let timeouts_removed = total - guarded.len();

    if guarded.len() < MIN_QUARTILE_SAMPLES {
        let retained = guarded.len();
        return (
            guarded,
            FilterStats {
                total,
                timeouts_removed,
                fence_removed: 0,
                cutoff_removed: 0,
                retained,
                insufficient_data: true,
            },
        );
    }

    let bounds = tukey_fences(&guarded);
    let fenced: Vec<f64> = guarded
        .iter()
        .copied()
        .filter(|&s| bounds.contains(s))
        .collect();
    let fence_removed = guarded.len() - fenced.len();

    let cleaned: Vec<f64> = fenced.iter().copied().filter(|&s| s < cutoff).collect();
    let cutoff_removed = fenced.len() - cleaned.len();

    let retained = cleaned.len();
    (
        cleaned,
        FilterStats {
            total,
            timeouts_removed,
            fence_removed,
            cutoff_removed,
            retained,
            insufficient_data: false,
        },
    )
}

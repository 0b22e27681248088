//! Per-group fan-out of the cleaning passes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::outlier::{filter_outliers, FilterStats};
use super::timeout::filter_timeouts;

/// One group's cleaned sequence together with its filter accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedGroup {
    /// Complexity value identifying the group.
    pub complexity: u32,
    /// Samples surviving all cleaning passes, input order preserved.
    pub samples: Vec<f64>,
    /// What each pass removed.
    pub stats: FilterStats,
}

/// Apply the timeout and outlier filters to each group independently.
///
/// The output mapping has exactly the same key set as the input mapping;
/// a group whose samples are all rejected still appears, empty. Groups
/// share no state, so order of processing is irrelevant and the `parallel`
/// feature fans the work out across threads without changing any result.
pub fn clean_groups(
    raw: &BTreeMap<u32, Vec<f64>>,
    timeout: f64,
    cutoff: f64,
) -> BTreeMap<u32, CleanedGroup> {
    #[cfg(feature = "parallel")]
    let entries = raw.par_iter();
    #[cfg(not(feature = "parallel"))]
    let entries = raw.iter();

    entries
        .map(|(&complexity, samples)| {
            (complexity, clean_one(complexity, samples, timeout, cutoff))
        })
        .collect()
}

fn clean_one(complexity: u32, samples: &[f64], timeout: f64, cutoff: f64) -> CleanedGroup {
    let no_timeouts = filter_timeouts(samples, timeout);
    let timeouts_removed = samples.len() - no_timeouts.len();

    let (cleaned, mut stats) = filter_outliers(&no_timeouts, timeout, cutoff);
    stats.total = samples.len();
    stats.timeouts_removed += timeouts_removed;

    CleanedGroup {
        complexity,
        samples: cleaned,
        stats,
    }
}

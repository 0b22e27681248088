//! Pipeline configuration.
//!
//! Selectors are an explicit value handed to the entry point; nothing is
//! read from process-wide state.

use crate::constants::TIMEOUT_THRESHOLD;
use crate::types::{Grouping, Metric};

/// Configuration for a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Complexity variable the input groups are keyed by.
    pub grouping: Grouping,

    /// Measurement the samples represent (affects labeling only; the
    /// cleaning passes are unit-agnostic).
    pub metric: Metric,

    /// Timeout sentinel threshold in display units (default: 10,000).
    pub timeout: f64,

    /// Secondary hard cutoff override. `None` uses the grouping's default
    /// (10,000 for connective counts, 11 for modal depths). The value is
    /// externally supplied; the pipeline attaches no semantics to it.
    pub secondary_cutoff: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grouping: Grouping::ByConnectiveCount,
            metric: Metric::RunTime,
            timeout: TIMEOUT_THRESHOLD,
            secondary_cutoff: None,
        }
    }
}

impl Config {
    /// The secondary cutoff in effect: the override if set, else the
    /// grouping default.
    pub fn effective_cutoff(&self) -> f64 {
        self.secondary_cutoff
            .unwrap_or_else(|| self.grouping.secondary_cutoff())
    }
}

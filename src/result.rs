//! Pipeline result types.

use serde::{Deserialize, Serialize};

use crate::filtering::CleanedGroup;
use crate::summary::SummaryStatistic;
use crate::types::{Grouping, Metric};

/// Complete output of one pipeline run.
///
/// Created once per run and immutable thereafter. The cleaned per-group
/// sequences feed scatter display; the summaries feed trend display with
/// shaded uncertainty bands. Both are consumed by an external renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Complexity variable the groups were keyed by.
    pub grouping: Grouping,
    /// Measurement the samples represent.
    pub metric: Metric,
    /// Cleaned groups in ascending complexity order.
    pub groups: Vec<CleanedGroup>,
    /// Per-group (mean, error) summaries in ascending complexity order.
    pub summaries: Vec<SummaryStatistic>,
    /// Non-fatal findings: short sequences passed through unfiltered,
    /// groups emptied entirely by filtering.
    pub warnings: Vec<String>,
}

impl PipelineResult {
    /// Cleaned sample sequence for one group, if the group exists.
    pub fn group(&self, complexity: u32) -> Option<&CleanedGroup> {
        self.groups
            .iter()
            .find(|group| group.complexity == complexity)
    }

    /// Fraction of all input samples removed across every group.
    pub fn removed_fraction(&self) -> f64 {
        let total: usize = self.groups.iter().map(|g| g.stats.total).sum();
        if total == 0 {
            return 0.0;
        }
        let retained: usize = self.groups.iter().map(|g| g.stats.retained).sum();
        (total - retained) as f64 / total as f64
    }
}

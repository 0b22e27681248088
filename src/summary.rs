//! Reduction of cleaned groups into renderer-ready summary statistics.
//!
//! No filtering happens here. Each cleaned sequence collapses to a point
//! estimate and an uncertainty value, and the entries are ordered by
//! ascending complexity so the external renderer can draw trend lines and
//! shaded bands without re-sorting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filtering::CleanedGroup;
use crate::statistics::{mean, standard_error};
use crate::types::Category;

/// Terminal per-group artifact handed to the external renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistic {
    /// Complexity value identifying the group.
    pub complexity: u32,
    /// Point estimate: arithmetic mean of the cleaned sequence.
    pub mean: f64,
    /// Uncertainty: standard error of the mean.
    pub error: f64,
}

/// An ordered summary series for one formula category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySeries {
    /// Which formula class this series describes.
    pub category: Category,
    /// Entries in ascending complexity order.
    pub points: Vec<SummaryStatistic>,
}

/// Reduce cleaned groups to summary statistics, ascending by complexity.
///
/// Groups left empty by filtering are skipped: they have no defensible
/// point estimate and the caller reports them as warnings instead.
pub fn reduce_groups(groups: &BTreeMap<u32, CleanedGroup>) -> Vec<SummaryStatistic> {
    groups
        .values()
        .filter(|group| !group.samples.is_empty())
        .map(|group| SummaryStatistic {
            complexity: group.complexity,
            mean: mean(&group.samples),
            error: standard_error(&group.samples),
        })
        .collect()
}

/// Assemble a series from precomputed (complexity, mean, error) entries.
///
/// This is the lookup-table path: summaries computed elsewhere (or pinned
/// as regression fixtures) are reshaped into the same ordered form that
/// [`reduce_groups`] produces.
pub fn build_series(category: Category, table: &[(u32, f64, f64)]) -> SummarySeries {
    let mut points: Vec<SummaryStatistic> = table
        .iter()
        .map(|&(complexity, mean, error)| SummaryStatistic {
            complexity,
            mean,
            error,
        })
        .collect();
    points.sort_by_key(|point| point.complexity);

    SummarySeries { category, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::FilterStats;

    fn cleaned(complexity: u32, samples: Vec<f64>) -> CleanedGroup {
        let stats = FilterStats {
            total: samples.len(),
            timeouts_removed: 0,
            fence_removed: 0,
            cutoff_removed: 0,
            retained: samples.len(),
            insufficient_data: false,
        };
        CleanedGroup {
            complexity,
            samples,
            stats,
        }
    }

    #[test]
    fn reduces_in_ascending_complexity_order() {
        let mut groups = BTreeMap::new();
        groups.insert(3, cleaned(3, vec![1.0, 2.0, 3.0]));
        groups.insert(1, cleaned(1, vec![5.0, 5.0]));
        groups.insert(2, cleaned(2, vec![4.0]));

        let summaries = reduce_groups(&groups);
        let order: Vec<u32> = summaries.iter().map(|s| s.complexity).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert!((summaries[0].mean - 5.0).abs() < 1e-12);
        assert_eq!(summaries[0].error, 0.0);
    }

    #[test]
    fn empty_groups_are_skipped() {
        let mut groups = BTreeMap::new();
        groups.insert(1, cleaned(1, vec![]));
        groups.insert(2, cleaned(2, vec![2.0, 4.0]));

        let summaries = reduce_groups(&groups);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].complexity, 2);
    }

    #[test]
    fn table_series_is_sorted_by_complexity() {
        let series = build_series(
            Category::Tautology,
            &[(3, 6.9, 0.7), (1, 5.7, 0.8), (2, 7.3, 1.2)],
        );
        let order: Vec<u32> = series.points.iter().map(|p| p.complexity).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(series.category, Category::Tautology);
    }
}

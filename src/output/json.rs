//! JSON serialization for pipeline results.

use crate::result::PipelineResult;

/// Serialize a `PipelineResult` to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `PipelineResult`).
pub fn to_json(result: &PipelineResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a `PipelineResult` to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `PipelineResult`).
pub fn to_json_pretty(result: &PipelineResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::{CleanedGroup, FilterStats};
    use crate::summary::SummaryStatistic;
    use crate::types::{Grouping, Metric};

    fn make_result() -> PipelineResult {
        PipelineResult {
            grouping: Grouping::ByConnectiveCount,
            metric: Metric::RunTime,
            groups: vec![CleanedGroup {
                complexity: 1,
                samples: vec![5.0, 6.0],
                stats: FilterStats {
                    total: 3,
                    timeouts_removed: 1,
                    fence_removed: 0,
                    cutoff_removed: 0,
                    retained: 2,
                    insufficient_data: true,
                },
            }],
            summaries: vec![SummaryStatistic {
                complexity: 1,
                mean: 5.5,
                error: 0.5,
            }],
            warnings: vec!["group 1: only 2 samples after timeout removal".into()],
        }
    }

    #[test]
    fn compact_json_round_trips() {
        let result = make_result();
        let json = to_json(&result).unwrap();
        assert!(json.contains("\"complexity\":1"));
        assert!(json.contains("\"timeouts_removed\":1"));

        let back: PipelineResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn pretty_json_has_newlines() {
        let json = to_json_pretty(&make_result()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("summaries"));
    }
}

//! Terminal report formatting with colors.

use colored::Colorize;

use crate::result::PipelineResult;
use crate::types::Grouping;

/// Format a `PipelineResult` for human-readable terminal output.
pub fn format_report(result: &PipelineResult) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);
    let unit = result.metric.unit();

    output.push_str("bench-distill\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    let axis = match result.grouping {
        Grouping::ByConnectiveCount => "connectives",
        Grouping::ByModalDepth => "modal depth",
    };
    output.push_str(&format!("  Grouped by: {}\n", axis));
    output.push_str(&format!(
        "  Removed overall: {:.1}% of samples\n\n",
        result.removed_fraction() * 100.0
    ));

    for group in &result.groups {
        let stats = &group.stats;
        let line = format!(
            "  {:>2}  kept {:>5}/{:<5}  timeouts {:<4} fence {:<4} cutoff {}",
            group.complexity,
            stats.retained,
            stats.total,
            stats.timeouts_removed,
            stats.fence_removed,
            stats.cutoff_removed,
        );
        if stats.insufficient_data {
            output.push_str(&format!("{}  {}\n", line, "(unfiltered)".yellow()));
        } else {
            output.push_str(&line);
            output.push('\n');
        }
    }
    output.push('\n');

    for summary in &result.summaries {
        output.push_str(&format!(
            "  {:>2}  {:.1} \u{00B1} {:.1} {}\n",
            summary.complexity, summary.mean, summary.error, unit
        ));
    }

    if !result.warnings.is_empty() {
        output.push('\n');
        for warning in &result.warnings {
            output.push_str(&format!("  {} {}\n", "\u{26A0}".yellow(), warning));
        }
    }

    output.push_str(&sep);
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::Pipeline;

    #[test]
    fn report_mentions_every_group() {
        let raw: BTreeMap<u32, Vec<f64>> = (1..=6)
            .map(|c| (c, vec![5.0, 6.0, 7.0, 8.0, 9.0]))
            .collect();
        let result = Pipeline::new().run(&raw).unwrap();

        let report = format_report(&result);
        assert!(report.contains("bench-distill"));
        assert!(report.contains("connectives"));
        for summary in &result.summaries {
            assert!(report.contains(&format!("{:.1}", summary.mean)));
        }
    }
}

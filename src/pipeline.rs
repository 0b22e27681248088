//! Main `Pipeline` entry point and builder.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::error::PipelineError;
use crate::filtering::clean_groups;
use crate::result::PipelineResult;
use crate::summary::reduce_groups;
use crate::types::{Grouping, Metric};

/// Entry point for the cleaning pipeline.
///
/// Configure with the builder methods, then hand [`run`](Pipeline::run) a
/// mapping from complexity value to raw (already unit-converted) samples.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use bench_distill::{Grouping, Metric, Pipeline};
///
/// let mut raw = BTreeMap::new();
/// for complexity in 1..=6u32 {
///     raw.insert(complexity, vec![5.0, 6.0, 7.0, 8.0, 9.0, 400.0]);
/// }
///
/// let result = Pipeline::new()
///     .grouping(Grouping::ByConnectiveCount)
///     .metric(Metric::RunTime)
///     .run(&raw)
///     .unwrap();
///
/// assert_eq!(result.summaries.len(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing configuration value.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Select the complexity variable the input groups are keyed by.
    pub fn grouping(mut self, grouping: Grouping) -> Self {
        self.config.grouping = grouping;
        self
    }

    /// Select which measurement the samples represent.
    pub fn metric(mut self, metric: Metric) -> Self {
        self.config.metric = metric;
        self
    }

    /// Override the timeout sentinel threshold.
    pub fn timeout(mut self, threshold: f64) -> Self {
        self.config.timeout = threshold;
        self
    }

    /// Override the secondary hard cutoff.
    pub fn secondary_cutoff(mut self, cutoff: f64) -> Self {
        self.config.secondary_cutoff = Some(cutoff);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Clean every group and reduce to summary statistics.
    ///
    /// Every complexity value the configured grouping expects must be
    /// present in `raw`; extra groups are processed along with them. Each
    /// group is filtered independently, so one group's pathology never
    /// affects another's result. Short or fully-rejected groups survive as
    /// warnings rather than disappearing silently.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MissingGroup`] naming the lowest configured
    /// complexity absent from `raw`. Callers wanting partial processing of
    /// whatever is present use [`clean_groups`] directly.
    pub fn run(&self, raw: &BTreeMap<u32, Vec<f64>>) -> Result<PipelineResult, PipelineError> {
        for complexity in self.config.grouping.complexities() {
            if !raw.contains_key(&complexity) {
                return Err(PipelineError::MissingGroup { complexity });
            }
        }

        let cleaned = clean_groups(raw, self.config.timeout, self.config.effective_cutoff());

        let mut warnings = Vec::new();
        for group in cleaned.values() {
            if group.stats.insufficient_data {
                warnings.push(format!(
                    "group {}: only {} samples after timeout removal, passed through unfiltered",
                    group.complexity, group.stats.retained
                ));
            }
            if group.samples.is_empty() {
                warnings.push(format!(
                    "group {}: no samples survived filtering, omitted from summaries",
                    group.complexity
                ));
            }
        }

        let summaries = reduce_groups(&cleaned);

        Ok(PipelineResult {
            grouping: self.config.grouping,
            metric: self.config.metric,
            groups: cleaned.into_values().collect(),
            summaries,
            warnings,
        })
    }
}

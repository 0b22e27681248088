//! # bench-distill
//!
//! Clean solver benchmark measurements and reduce them to per-complexity
//! summary statistics.
//!
//! A benchmark harness records one timing (or peak-memory) value per solver
//! run. Before those values can be charted against formula complexity, three
//! things have to happen, in order:
//!
//! 1. **Timeout removal**: runs that hit the harness time limit record a
//!    sentinel, not a measurement.
//! 2. **Outlier rejection**: a Tukey fence from the sequence's own
//!    quartiles, followed by a per-grouping hard cutoff for the known-bad
//!    measurement class the fence misses.
//! 3. **Reduction**: each cleaned group collapses to a (mean, standard
//!    error) pair, ordered by complexity for trend display.
//!
//! Plotting itself, and parsing of the harness CSV files, live outside this
//! crate: callers feed in `complexity → Vec<f64>` mappings and hand the
//! [`PipelineResult`] to their renderer.
//!
//! ## Quick start
//!
//! ```
//! use std::collections::BTreeMap;
//! use bench_distill::{distill, Grouping, Metric};
//!
//! let mut raw = BTreeMap::new();
//! for depth in 0..=4u32 {
//!     raw.insert(depth, vec![6.6, 7.0, 7.1, 6.9, 7.2, 10_000.0]);
//! }
//!
//! let result = distill(&raw, Grouping::ByModalDepth, Metric::RunTime).unwrap();
//! assert_eq!(result.summaries.len(), 5);
//! ```
//!
//! Raw harness integers convert through [`scale_raw`] first; the filters
//! only ever see display-unit samples.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod convert;
mod error;
mod pipeline;
mod result;
mod types;

// Functional modules
pub mod filtering;
pub mod output;
pub mod statistics;
pub mod summary;

// Re-exports for public API
pub use config::Config;
pub use constants::{
    CONNECTIVE_CUTOFF, MODAL_DEPTH_CUTOFF, MIN_QUARTILE_SAMPLES, RAW_UNITS_PER_SAMPLE,
    TIMEOUT_THRESHOLD, TUKEY_MULTIPLIER,
};
pub use convert::scale_raw;
pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use result::PipelineResult;
pub use summary::{SummarySeries, SummaryStatistic};
pub use types::{Category, Grouping, Metric};

use std::collections::BTreeMap;

/// Convenience function running the pipeline with default thresholds.
///
/// Equivalent to `Pipeline::new().grouping(grouping).metric(metric).run(raw)`.
///
/// # Errors
///
/// Returns [`PipelineError::MissingGroup`] if a complexity value the
/// grouping expects is absent from `raw`.
pub fn distill(
    raw: &BTreeMap<u32, Vec<f64>>,
    grouping: Grouping,
    metric: Metric,
) -> Result<PipelineResult, PipelineError> {
    Pipeline::new().grouping(grouping).metric(metric).run(raw)
}

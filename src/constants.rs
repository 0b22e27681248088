//! Domain constants shared across the pipeline.

use std::ops::RangeInclusive;

/// Divisor converting raw harness integers (sub-millisecond ticks) into
/// display units: milliseconds for run time, kilobytes for memory.
pub const RAW_UNITS_PER_SAMPLE: f64 = 1_000_000.0;

/// Harness timeout sentinel threshold in display units. Samples at or above
/// this value represent an aborted run, not a real measurement.
pub const TIMEOUT_THRESHOLD: f64 = 10_000.0;

/// Tukey fence multiplier applied to the interquartile range.
pub const TUKEY_MULTIPLIER: f64 = 1.5;

/// Secondary hard cutoff for connective-count groups. The Tukey fence alone
/// does not reject a class of known-bad measurements observed in this
/// category; the value is externally supplied, not derived.
pub const CONNECTIVE_CUTOFF: f64 = 10_000.0;

/// Secondary hard cutoff for modal-depth groups.
pub const MODAL_DEPTH_CUTOFF: f64 = 11.0;

/// Minimum sequence length for a meaningful quartile split. Shorter
/// sequences pass through the outlier filter unchanged, flagged.
pub const MIN_QUARTILE_SAMPLES: usize = 4;

/// Complexity values when grouping by number of logical connectives.
pub const CONNECTIVE_COMPLEXITIES: RangeInclusive<u32> = 1..=6;

/// Complexity values when grouping by modal nesting depth.
pub const MODAL_DEPTH_COMPLEXITIES: RangeInclusive<u32> = 0..=4;

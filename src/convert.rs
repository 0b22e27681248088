//! Raw measurement conversion at the input boundary.
//!
//! The harness records each run as an integer count of sub-millisecond
//! ticks. Scaling happens once, here, before any filtering; the filters
//! themselves only ever see display-unit samples. Malformed raws (negative
//! values) are rejected at this boundary rather than propagated into the
//! filters as a contract violation.

use crate::constants::RAW_UNITS_PER_SAMPLE;
use crate::error::PipelineError;

/// Convert raw harness integers into display-unit samples.
///
/// Divides each value by [`RAW_UNITS_PER_SAMPLE`]. The result is finite and
/// non-negative by construction.
///
/// # Errors
///
/// Returns [`PipelineError::NegativeSample`] on the first negative raw value.
pub fn scale_raw(raw: &[i64]) -> Result<Vec<f64>, PipelineError> {
    raw.iter()
        .map(|&r| {
            if r < 0 {
                Err(PipelineError::NegativeSample { raw: r })
            } else {
                Ok(r as f64 / RAW_UNITS_PER_SAMPLE)
            }
        })
        .collect()
}

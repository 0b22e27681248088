//! Timeout sentinel removal.

/// Remove samples that represent a harness timeout rather than a real
/// measurement.
///
/// Retains samples strictly below `threshold`. Pure: the input is left
/// untouched and an empty input yields an empty output.
pub fn filter_timeouts(samples: &[f64], threshold: f64) -> Vec<f64> {
    samples.iter().copied().filter(|&s| s < threshold).collect()
}

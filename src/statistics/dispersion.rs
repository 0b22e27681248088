//! Point estimates and dispersion measures for cleaned sample sequences.

use crate::error::PipelineError;

/// Arithmetic mean.
///
/// # Panics
///
/// Panics on an empty slice; callers skip empty groups before reducing.
pub fn mean(samples: &[f64]) -> f64 {
    assert!(!samples.is_empty(), "mean of empty slice");
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample standard deviation (n−1 denominator).
///
/// Returns 0.0 for a single sample, where dispersion is undefined but a
/// zero-width uncertainty band is the sensible rendering.
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let m = mean(samples);
    let ss: f64 = samples.iter().map(|&s| (s - m) * (s - m)).sum();
    (ss / (samples.len() - 1) as f64).sqrt()
}

/// Standard error of the mean: s / √n.
pub fn standard_error(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    std_dev(samples) / (samples.len() as f64).sqrt()
}

/// Normalized root-mean-square error of observations `y` against the fitted
/// model `a·x`:
///
/// ```text
/// error = sqrt( (1/Σx²) · Σ(y − a·x)² / (n−1) )
/// ```
///
/// A generic weighted-residual measure, independent of the outlier logic;
/// invariant under uniform rescaling of `x` and `y` by the same constant.
///
/// # Errors
///
/// - [`PipelineError::LengthMismatch`] if `x` and `y` differ in length
/// - [`PipelineError::TooFewSamples`] if fewer than 2 samples (the n−1
///   denominator would be undefined)
/// - [`PipelineError::ZeroNormReference`] if `x` is all zeros
pub fn normalized_rmse(y: &[f64], x: &[f64], a: f64) -> Result<f64, PipelineError> {
    if x.len() != y.len() {
        return Err(PipelineError::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(PipelineError::TooFewSamples { len: x.len() });
    }

    let norm: f64 = x.iter().map(|&v| v * v).sum();
    if norm == 0.0 {
        return Err(PipelineError::ZeroNormReference);
    }

    let residual_ss: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| {
            let r = yi - a * xi;
            r * r
        })
        .sum();

    Ok(((residual_ss / (x.len() - 1) as f64) / norm).sqrt())
}

//! Error types for the cleaning pipeline.

/// Errors surfaced by the pipeline.
///
/// Dispersion-estimator variants are fatal only to that single computation;
/// the caller decides whether to skip or abort the affected group.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Reference and observed sequences differ in length.
    LengthMismatch {
        /// Length of the reference sequence.
        expected: usize,
        /// Length of the observed sequence.
        actual: usize,
    },
    /// Fewer than two samples; the n−1 denominator is undefined.
    TooFewSamples {
        /// Offending sequence length.
        len: usize,
    },
    /// Reference sequence is all zeros, so the 1/Σx² weight is undefined.
    ZeroNormReference,
    /// A configured group has no corresponding input sequence.
    MissingGroup {
        /// Complexity value of the absent group.
        complexity: u32,
    },
    /// A raw measurement was negative before scaling.
    NegativeSample {
        /// The offending raw value.
        raw: i64,
    },
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "sequence length mismatch: reference has {}, observed has {}",
                    expected, actual
                )
            }
            PipelineError::TooFewSamples { len } => {
                write!(f, "need at least 2 samples, got {}", len)
            }
            PipelineError::ZeroNormReference => {
                write!(f, "reference sequence has zero norm")
            }
            PipelineError::MissingGroup { complexity } => {
                write!(f, "no input sequence for configured group {}", complexity)
            }
            PipelineError::NegativeSample { raw } => {
                write!(f, "raw measurement {} is negative", raw)
            }
        }
    }
}

impl std::error::Error for PipelineError {}

//! Selector and label types shared across the pipeline.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONNECTIVE_COMPLEXITIES, CONNECTIVE_CUTOFF, MODAL_DEPTH_COMPLEXITIES, MODAL_DEPTH_CUTOFF,
};

/// Independent complexity variable the samples are grouped by.
///
/// The grouping also selects which secondary outlier cutoff applies, since
/// each category exhibits its own class of known-bad measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grouping {
    /// One group per number of logical connectives (1 through 6).
    ByConnectiveCount,
    /// One group per modal nesting depth (0 through 4).
    ByModalDepth,
}

impl Grouping {
    /// Complexity values expected in the input mapping for this grouping.
    pub fn complexities(self) -> RangeInclusive<u32> {
        match self {
            Grouping::ByConnectiveCount => CONNECTIVE_COMPLEXITIES,
            Grouping::ByModalDepth => MODAL_DEPTH_COMPLEXITIES,
        }
    }

    /// Default secondary hard cutoff for this grouping.
    pub fn secondary_cutoff(self) -> f64 {
        match self {
            Grouping::ByConnectiveCount => CONNECTIVE_CUTOFF,
            Grouping::ByModalDepth => MODAL_DEPTH_CUTOFF,
        }
    }
}

/// Which measurement the samples represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Solver run time, milliseconds after scaling.
    RunTime,
    /// Peak memory usage, kilobytes after scaling.
    MemoryUsage,
}

impl Metric {
    /// Display unit after raw conversion.
    pub fn unit(self) -> &'static str {
        match self {
            Metric::RunTime => "ms",
            Metric::MemoryUsage => "kB",
        }
    }
}

/// Formula class a summary series belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Formulas the solver proved valid.
    Tautology,
    /// Formulas the solver refuted.
    NonTautology,
}

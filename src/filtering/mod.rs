//! Sample cleaning: timeout removal, outlier rejection, group fan-out.
//!
//! Filtering is purely functional over its inputs: each pass produces a new
//! sequence and leaves the caller's data untouched. Groups share no state,
//! so the per-group fan-out may run in parallel (enable the `parallel`
//! feature) with identical results.

mod aggregate;
mod outlier;
mod timeout;

pub use aggregate::{clean_groups, CleanedGroup};
pub use outlier::{filter_outliers, FilterStats};
pub use timeout::filter_timeouts;

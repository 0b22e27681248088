//! Statistical primitives for the cleaning pipeline.
//!
//! This module provides:
//! - Quartile computation by linear interpolation (R-7 definition)
//! - Tukey fences derived from the interquartile range
//! - Mean / standard-error reduction and a normalized RMSE estimator

mod dispersion;
mod quantile;

pub use dispersion::{mean, normalized_rmse, standard_error, std_dev};
pub use quantile::{quantile_sorted, quartiles, tukey_fences, OutlierBounds};

//! Pairwise curve distances.
//!
//! Purpose
//! - Three interchangeable distances between two point sequences of (after
//!   resampling) equal length: Hausdorff, discrete Fréchet, turning angle.
//!
//! Conventions
//! - All share the `MetricFn` signature so the orchestrator can dispatch on a
//!   table and the rotation search can wrap any of them.
//! - Empty input on either side yields `+∞` (scores to 0).
//! - Hausdorff ignores point order; Fréchet and turning angle do not, which is
//!   why `align::best_offset_distance` exists.
//!
//! Code cross-refs: `align`, `score`, `matching::Algorithm::metric`

mod frechet;
mod hausdorff;
mod turning;

pub use frechet::frechet_distance;
pub use hausdorff::{directed_hausdorff, hausdorff_distance};
pub use turning::{turning_angle_distance, turning_angles, wrap_angle};

use crate::curve::Point;

/// Distance between two curves; lower is more similar.
pub type MetricFn = fn(&[Point], &[Point]) -> f64;

#[cfg(test)]
mod tests;

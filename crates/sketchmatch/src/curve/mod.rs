//! Curve primitives and preprocessing.
//!
//! Purpose
//! - Points, bounding boxes and distances shared by every other module.
//! - The two preprocessing stages of the matcher: isotropic `normalize`
//!   (translation and scale invariance) and arc-length `resample` (density
//!   invariance).
//!
//! Conventions
//! - A curve is a `&[Point]`; closure (first ≈ last) is the caller's job.
//!   `close_curve` is provided for drawing surfaces that hand over open strokes.
//! - Every transform returns a fresh `Vec`; inputs are never mutated.
//!
//! Code cross-refs: `metrics`, `align`, `matching::match_shape_with`

mod normalize;
pub mod overlay;
pub mod rand;
mod resample;
pub mod shapes;
mod types;

pub use normalize::normalize;
pub use resample::resample;
pub use types::{bounding_box, close_curve, distance, path_length, BoundingBox, Curve, Point};

#[cfg(test)]
mod tests;

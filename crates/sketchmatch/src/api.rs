//! Flat re-export surface for embedding callers (UI shells, bindings).
//!
//! Mirrors the collaborator contract: `normalize`, `resample`, `match_shape`,
//! a ranking helper, plus the display-only overlay transform.

pub use crate::align::{best_offset, best_offset_distance, rotate_cyclic};
pub use crate::catalog::{builtin as builtin_catalog, Catalog, CatalogEntry};
pub use crate::curve::overlay::{align_to_drawing, project_lonlat};
pub use crate::curve::{
    bounding_box, close_curve, distance, normalize, resample, BoundingBox, Point,
};
pub use crate::matching::{
    check_drawing, match_shape, match_shape_with, rank, Algorithm, MatchReport, MatchResult,
    Matcher, Verdict,
};
pub use crate::metrics::{frechet_distance, hausdorff_distance, turning_angle_distance};

use std::collections::HashMap;

/// Rank `drawn` against an id → curve map, best first.
///
/// Ties are broken by id so the output does not depend on map iteration order.
pub fn rank_map(
    drawn: &[Point],
    references: &HashMap<String, Vec<Point>>,
    algorithm: Algorithm,
) -> Vec<MatchResult> {
    let mut pairs: Vec<(&str, &[Point])> = references
        .iter()
        .map(|(id, c)| (id.as_str(), c.as_slice()))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    rank(drawn, pairs, algorithm, &crate::MatchCfg::default())
}

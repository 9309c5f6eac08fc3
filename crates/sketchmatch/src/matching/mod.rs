//! Match orchestration: drawn curve × reference curve(s) → similarity.
//!
//! Pipeline
//! - normalize both curves, resample both to `cfg.samples`;
//! - look up the `MetricSpec` of the selected `Algorithm`;
//! - Hausdorff compares directly, Fréchet and turning angle go through
//!   `align::best_offset_distance` over the reference;
//! - `score::similarity` maps the distance into [0, 100].
//!
//! `rank` repeats this per reference and sorts descending. `Matcher` does the
//! same against a `Catalog` with the references prepared once.
//!
//! The free functions are total: pathological input (empty, a handful of
//! points, all points coincident) yields a finite score in [0, 100].
//! `check_drawing` is the caller-side gate for rejecting such drawings.

mod matcher;
mod types;

pub use matcher::Matcher;
pub use types::{
    Algorithm, CurveError, MatchReport, MatchResult, MetricSpec, ParseAlgorithmError, Verdict,
};

use crate::align::best_offset_distance;
use crate::cfg::MatchCfg;
use crate::curve::{normalize, resample, Curve, Point};
use crate::score::similarity;

/// Normalize then resample: the form both sides take before comparison.
pub fn prepare(curve: &[Point], samples: usize) -> Curve {
    resample(&normalize(curve), samples)
}

/// Score two curves already passed through `prepare`.
pub fn score_prepared(
    drawn: &[Point],
    reference: &[Point],
    algorithm: Algorithm,
    offsets: usize,
) -> f64 {
    let spec = algorithm.metric();
    let d = if spec.needs_alignment {
        best_offset_distance(drawn, reference, spec.distance, offsets)
    } else {
        (spec.distance)(drawn, reference)
    };
    similarity(d, spec.decay)
}

/// Similarity of `drawn` to `reference` in [0, 100] with default settings.
pub fn match_shape(drawn: &[Point], reference: &[Point], algorithm: Algorithm) -> f64 {
    match_shape_with(drawn, reference, algorithm, &MatchCfg::default())
}

/// Similarity of `drawn` to `reference` with explicit sample/offset counts.
pub fn match_shape_with(
    drawn: &[Point],
    reference: &[Point],
    algorithm: Algorithm,
    cfg: &MatchCfg,
) -> f64 {
    let a = prepare(drawn, cfg.samples);
    let b = prepare(reference, cfg.samples);
    score_prepared(&a, &b, algorithm, cfg.offsets)
}

/// Score `drawn` against every `(id, curve)` and sort descending by score.
///
/// The sort is stable: equal scores keep input order.
pub fn rank<'a, I>(
    drawn: &[Point],
    references: I,
    algorithm: Algorithm,
    cfg: &MatchCfg,
) -> Vec<MatchResult>
where
    I: IntoIterator<Item = (&'a str, &'a [Point])>,
{
    let a = prepare(drawn, cfg.samples);
    let results = references
        .into_iter()
        .map(|(id, curve)| MatchResult {
            id: id.to_string(),
            similarity: score_prepared(&a, &prepare(curve, cfg.samples), algorithm, cfg.offsets),
        })
        .collect();
    sort_ranking(results)
}

pub(crate) fn sort_ranking(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|x, y| y.similarity.total_cmp(&x.similarity));
    results
}

/// Caller-side acceptance check for a finished drawing.
///
/// Rejects drawings with fewer than `cfg.min_points` points or with any
/// non-finite coordinate.
pub fn check_drawing(points: &[Point], cfg: &MatchCfg) -> Result<(), CurveError> {
    if points.len() < cfg.min_points {
        return Err(CurveError::TooFewPoints {
            got: points.len(),
            min: cfg.min_points,
        });
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(CurveError::NonFinite { index });
    }
    Ok(())
}

#[cfg(test)]
mod tests;

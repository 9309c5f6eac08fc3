//! Cyclic start-offset search for closed curves.
//!
//! A drawing's start point and a reference's stored start point are
//! unrelated, so order-sensitive metrics compare against several cyclic
//! rotations of the reference and keep the best. This is a rotation of the
//! parameterization (start index), never a geometric rotation.
//!
//! Tradeoff
//! - `offsets` candidates spaced `len / offsets` apart; 8 out of 64 samples
//!   is the default. Any `offsets >= len` is the exhaustive search.

use crate::curve::{Curve, Point};
use crate::metrics::MetricFn;

/// Copy of `curve` starting at index `start` (wrapped modulo the length).
pub fn rotate_cyclic(curve: &[Point], start: usize) -> Curve {
    if curve.is_empty() {
        return Vec::new();
    }
    let k = start % curve.len();
    let mut out = Vec::with_capacity(curve.len());
    out.extend_from_slice(&curve[k..]);
    out.extend_from_slice(&curve[..k]);
    out
}

/// Candidate start indices for a curve of `len` points: `0, step, 2·step, …`
/// with `step = max(1, len / offsets)`.
pub fn candidate_offsets(len: usize, offsets: usize) -> impl Iterator<Item = usize> {
    let step = (len / offsets.max(1)).max(1);
    (0..len).step_by(step)
}

/// Minimum of `metric(a, rotate_cyclic(b, k))` over the candidate offsets.
///
/// Returns `(distance, best_offset)`; `(+∞, 0)` when either curve is empty.
/// Ties keep the earliest offset.
pub fn best_offset(a: &[Point], b: &[Point], metric: MetricFn, offsets: usize) -> (f64, usize) {
    if a.is_empty() || b.is_empty() {
        return (f64::INFINITY, 0);
    }
    let mut best = (f64::INFINITY, 0);
    for k in candidate_offsets(b.len(), offsets) {
        let d = metric(a, &rotate_cyclic(b, k));
        if d < best.0 {
            best = (d, k);
        }
    }
    best
}

/// Best (smallest) distance over the candidate offsets of `b`.
#[inline]
pub fn best_offset_distance(a: &[Point], b: &[Point], metric: MetricFn, offsets: usize) -> f64 {
    best_offset(a, b, metric, offsets).0
}

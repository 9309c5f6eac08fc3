use crate::curve::{bounding_box, Point};
use std::f64::consts::{PI, TAU};

/// Segments shorter than this fraction of the curve's extent have no
/// direction. Covers the rounding-sized closing gap a resampled loop leaves.
const DEGENERATE_SEGMENT: f64 = 1e-12;

/// Wrap an angle difference into (−π, π].
#[inline]
pub fn wrap_angle(a: f64) -> f64 {
    if !a.is_finite() {
        return a;
    }
    let r = a.rem_euclid(TAU);
    if r > PI {
        r - TAU
    } else {
        r
    }
}

/// Heading of the segment `from → to`; 0 when it is shorter than `eps`.
#[inline]
fn heading(from: &Point, to: &Point, eps: f64) -> f64 {
    let d = to - from;
    if d.norm() <= eps {
        0.0
    } else {
        d.y.atan2(d.x)
    }
}

/// Signed turning angle at every vertex, treating the curve as cyclic.
///
/// Vertex `i` uses predecessor `i-1` and successor `i+1` (mod len). A
/// neighbor segment of (near) zero length has heading 0, as `atan2(0, 0)`
/// would give for an exact duplicate. "Near" is relative to the curve's
/// extent, so scaled copies of a curve get the same angles.
pub fn turning_angles(curve: &[Point]) -> Vec<f64> {
    let n = curve.len();
    let eps = DEGENERATE_SEGMENT * bounding_box(curve).extent();
    (0..n)
        .map(|i| {
            let prev = &curve[(i + n - 1) % n];
            let curr = &curve[i];
            let next = &curve[(i + 1) % n];
            wrap_angle(heading(curr, next, eps) - heading(prev, curr, eps))
        })
        .collect()
}

/// Mean absolute difference of the per-vertex turning angles, paired by index
/// and truncated to the shorter curve. `+∞` if either curve is empty.
pub fn turning_angle_distance(a: &[Point], b: &[Point]) -> f64 {
    let len = a.len().min(b.len());
    if len == 0 {
        return f64::INFINITY;
    }
    let ta = turning_angles(a);
    let tb = turning_angles(b);
    let sum: f64 = ta.iter().zip(&tb).map(|(x, y)| (x - y).abs()).sum();
    sum / len as f64
}

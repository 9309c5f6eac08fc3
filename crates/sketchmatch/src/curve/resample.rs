use super::types::{distance, path_length, Curve, Point};

/// Re-parameterize `curve` to exactly `n` points evenly spaced by arc length.
///
/// Walks the polyline accumulating length and emits a linearly interpolated
/// point every `total / (n - 1)`. The first output point is `curve[0]`; if
/// floating accumulation under-shoots, the tail is padded with the last input
/// point so the output always has length `n`.
///
/// Edge policy
/// - empty curve or `n == 0` → empty output;
/// - `n == 1` → `[curve[0]]`;
/// - zero total length (single point, all points coincident) → `n` copies of
///   `curve[0]`.
pub fn resample(curve: &[Point], n: usize) -> Curve {
    let Some(&first) = curve.first() else {
        return Vec::new();
    };
    match n {
        0 => return Vec::new(),
        1 => return vec![first],
        _ => {}
    }
    let total = path_length(curve);
    // also catches NaN lengths from non-finite input
    if !(total > 0.0) {
        return vec![first; n];
    }
    let step = total / (n - 1) as f64;
    let mut out = Vec::with_capacity(n);
    out.push(first);
    let mut acc = 0.0;
    for w in curve.windows(2) {
        let (prev, curr) = (w[0], w[1]);
        let seg = distance(&prev, &curr);
        acc += seg;
        while acc >= step && out.len() < n {
            // `acc - step` is how far past the new sample `curr` lies.
            let ratio = (acc - step) / seg;
            out.push(curr - (curr - prev) * ratio);
            acc -= step;
        }
    }
    out.resize(n, curve[curve.len() - 1]);
    out
}

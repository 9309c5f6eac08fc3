use super::types::{bounding_box, Curve, Point};

/// Translate to the bounding-box origin and scale isotropically so the larger
/// side spans exactly one unit.
///
/// Aspect ratio and orientation are preserved; no rotation is applied.
/// Empty input returns empty output. A degenerate box (all points identical)
/// returns the input unchanged instead of dividing by zero.
pub fn normalize(curve: &[Point]) -> Curve {
    if curve.is_empty() {
        return Vec::new();
    }
    let bbox = bounding_box(curve);
    let scale = bbox.extent();
    if scale == 0.0 {
        return curve.to_vec();
    }
    let origin = bbox.min_corner();
    curve.iter().map(|p| (p - origin) / scale).collect()
}

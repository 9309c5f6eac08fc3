use crate::curve::{distance, Point};

/// Directed Hausdorff distance: worst nearest-neighbor distance from `from`
/// into `to`. `+∞` when either side is empty.
pub fn directed_hausdorff(from: &[Point], to: &[Point]) -> f64 {
    if from.is_empty() || to.is_empty() {
        return f64::INFINITY;
    }
    from.iter()
        .map(|a| to.iter().map(|b| distance(a, b)).fold(f64::INFINITY, f64::min))
        .fold(0.0, f64::max)
}

/// Symmetric Hausdorff distance between two point sets. Order-independent.
pub fn hausdorff_distance(a: &[Point], b: &[Point]) -> f64 {
    directed_hausdorff(a, b).max(directed_hausdorff(b, a))
}

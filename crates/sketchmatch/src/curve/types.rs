//! Basic 2D types shared by every stage of the matcher.
//!
//! - `Point`: plain `Vector2<f64>`, units arbitrary but consistent per curve.
//! - `BoundingBox`: axis-aligned extent of a curve.
//! - `distance`, `path_length`: Euclidean primitives.

use nalgebra::Vector2;

/// A planar point. Curves are ordered slices of these.
pub type Point = Vector2<f64>;

/// Owned point sequence; treated as a closed polyline when matching.
pub type Curve = Vec<Point>;

/// Axis-aligned bounding box of a curve.
///
/// Invariant: `width >= 0` and `height >= 0`. A box with both zero is
/// degenerate (all points coincide, or the curve was empty).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl BoundingBox {
    /// Larger of the two side lengths.
    #[inline]
    pub fn extent(&self) -> f64 {
        self.width.max(self.height)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    #[inline]
    pub fn min_corner(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}

/// Bounding box over all points; the all-zero box for an empty curve.
pub fn bounding_box(curve: &[Point]) -> BoundingBox {
    let Some(first) = curve.first() else {
        return BoundingBox::default();
    };
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for p in &curve[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    BoundingBox {
        min_x,
        max_x,
        min_y,
        max_y,
        width: max_x - min_x,
        height: max_y - min_y,
        center_x: (min_x + max_x) / 2.0,
        center_y: (min_y + max_y) / 2.0,
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: &Point, q: &Point) -> f64 {
    (p - q).norm()
}

/// Total polyline length (open: the closing segment is not added).
pub fn path_length(curve: &[Point]) -> f64 {
    curve.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

/// Append the first point if the curve does not already end on it.
///
/// Drawing surfaces hand over an open stroke; the matcher expects the loop
/// closed. Empty input is returned as is.
pub fn close_curve(points: &[Point]) -> Curve {
    let mut out = points.to_vec();
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        if points.len() > 1 && first != last {
            out.push(*first);
        }
    }
    out
}

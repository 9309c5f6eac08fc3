//! Closed reference shapes built from closed-form parameterizations.
//!
//! All outputs start at angle 0, run counter-clockwise and repeat the first
//! point at the end.

use super::types::{close_curve, Curve, Point};
use std::f64::consts::TAU;

/// Axis-aligned ellipse centered at the origin with `n` distinct vertices.
pub fn ellipse(n: usize, rx: f64, ry: f64) -> Curve {
    let n = n.max(3);
    let pts: Vec<Point> = (0..n)
        .map(|k| {
            let th = TAU * k as f64 / n as f64;
            Point::new(rx * th.cos(), ry * th.sin())
        })
        .collect();
    close_curve(&pts)
}

/// Star polygon with `tips` outer vertices of radius 1 and inner vertices of
/// radius `inner`.
pub fn star(tips: usize, inner: f64) -> Curve {
    let tips = tips.max(2);
    let m = 2 * tips;
    let pts: Vec<Point> = (0..m)
        .map(|k| {
            let th = TAU * k as f64 / m as f64;
            let r = if k % 2 == 0 { 1.0 } else { inner };
            Point::new(r * th.cos(), r * th.sin())
        })
        .collect();
    close_curve(&pts)
}

/// Closed polyline through `vertices` given as `(x, y)` pairs.
pub fn polyline(vertices: &[(f64, f64)]) -> Curve {
    let pts: Vec<Point> = vertices.iter().map(|&(x, y)| Point::new(x, y)).collect();
    close_curve(&pts)
}

//! Display-side transforms.
//!
//! Nothing here is on the matching path: matching always uses the isotropic
//! `normalize`. These helpers place a reference outline over a drawing for
//! display, and turn geographic track coordinates into catalog layouts.

use super::types::{bounding_box, Curve, Point};

/// Fit `reference` into the bounding box of `drawn` for an overlay.
///
/// Uses the smaller of the two per-axis scale ratios (so the outline fits
/// inside the drawing's box) and centers it along the slack axis. Returns the
/// reference unchanged when either curve is empty or either box is degenerate.
pub fn align_to_drawing(reference: &[Point], drawn: &[Point]) -> Curve {
    if reference.is_empty() || drawn.is_empty() {
        return reference.to_vec();
    }
    let target = bounding_box(drawn);
    let source = bounding_box(reference);
    if target.is_degenerate() || source.is_degenerate() {
        return reference.to_vec();
    }
    // a zero-width side gives inf or NaN on that axis; f64::min discards both
    let scale = (target.width / source.width).min(target.height / source.height);
    let pad = Point::new(
        (target.width - source.width * scale) / 2.0,
        (target.height - source.height * scale) / 2.0,
    );
    let from = source.min_corner();
    let to = target.min_corner() + pad;
    reference.iter().map(|p| to + (p - from) * scale).collect()
}

/// Project `(lon, lat)` pairs into the unit square, north up.
///
/// Each axis is stretched independently to [0, 1] and `y` is flipped so that
/// larger latitudes land near `y = 0` (screen convention). An axis with zero
/// range collapses to 0.5.
pub fn project_lonlat(coords: &[Point]) -> Curve {
    let b = bounding_box(coords);
    let unit = |v: f64, lo: f64, range: f64| {
        if range > 0.0 {
            (v - lo) / range
        } else {
            0.5
        }
    };
    coords
        .iter()
        .map(|c| {
            Point::new(
                unit(c.x, b.min_x, b.width),
                1.0 - unit(c.y, b.min_y, b.height),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::bounding_box;

    #[test]
    fn overlay_fits_and_centers() {
        // 2x1 reference into a 4x4 drawing box at (10,10): scale 2, centered vertically
        let reference = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let drawn = vec![Point::new(10.0, 10.0), Point::new(14.0, 14.0)];
        let out = align_to_drawing(&reference, &drawn);
        let b = bounding_box(&out);
        assert!((b.min_x - 10.0).abs() < 1e-12 && (b.max_x - 14.0).abs() < 1e-12);
        assert!((b.min_y - 11.0).abs() < 1e-12 && (b.max_y - 13.0).abs() < 1e-12);
    }

    #[test]
    fn overlay_degenerate_returns_reference() {
        let reference = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let dot = vec![Point::new(3.0, 3.0); 4];
        assert_eq!(align_to_drawing(&reference, &dot), reference);
        assert_eq!(align_to_drawing(&reference, &[]), reference);
    }

    #[test]
    fn lonlat_flips_latitude() {
        let coords = vec![
            Point::new(9.28, 45.62),
            Point::new(9.29, 45.63),
            Point::new(9.30, 45.61),
        ];
        let out = project_lonlat(&coords);
        assert!((out[0] - Point::new(0.0, 0.5)).norm() < 1e-9);
        assert!((out[1] - Point::new(0.5, 0.0)).norm() < 1e-9);
        assert!((out[2] - Point::new(1.0, 1.0)).norm() < 1e-9);
    }
}

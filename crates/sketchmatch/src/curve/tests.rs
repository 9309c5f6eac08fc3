use super::*;
use nalgebra::vector;
use ::rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn bbox_basic_and_empty() {
    let c = vec![vector![1.0, -1.0], vector![3.0, 2.0], vector![-2.0, 0.5]];
    let b = bounding_box(&c);
    assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (-2.0, 3.0, -1.0, 2.0));
    assert_eq!((b.width, b.height), (5.0, 3.0));
    assert_eq!(b.center(), vector![0.5, 0.5]);
    assert!(!b.is_degenerate());

    let e = bounding_box(&[]);
    assert_eq!(e, BoundingBox::default());
    assert!(e.is_degenerate());
}

#[test]
fn distance_and_length() {
    assert!((distance(&vector![0.0, 0.0], &vector![3.0, 4.0]) - 5.0).abs() < 1e-12);
    let sq = shapes::polyline(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    assert!((path_length(&sq) - 4.0).abs() < 1e-12);
    assert_eq!(path_length(&sq[..1]), 0.0);
}

#[test]
fn close_curve_only_when_open() {
    let open = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
    let closed = close_curve(&open);
    assert_eq!(closed.len(), 4);
    assert_eq!(closed.first(), closed.last());
    assert_eq!(close_curve(&closed), closed);
    assert!(close_curve(&[]).is_empty());
}

#[test]
fn normalize_invariant_under_similarity_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    let base = shapes::star(5, 0.45);
    for _ in 0..20 {
        let k = rng.gen_range(0.01..100.0);
        let t = vector![rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)];
        let moved: Vec<Point> = base.iter().map(|p| p * k + t).collect();
        let a = normalize(&base);
        let b = normalize(&moved);
        for (p, q) in a.iter().zip(&b) {
            assert!((p - q).norm() < 1e-9);
        }
    }
}

#[test]
fn resampled_loop_stays_closed() {
    let r = resample(&shapes::ellipse(30, 2.0, 1.0), 64);
    assert_eq!(r.len(), 64);
    assert!((r[0] - r[63]).norm() < 1e-9);
}

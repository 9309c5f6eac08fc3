use super::*;
use crate::curve::{normalize, resample, shapes};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_curve(rng: &mut StdRng, n: usize) -> Vec<Vector2<f64>> {
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

#[test]
fn frechet_bounds_hausdorff_seeded() {
    // every point is coupled within the Fréchet distance, so it bounds Hausdorff
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..25 {
        let n = rng.gen_range(2..30);
        let m = rng.gen_range(2..30);
        let a = random_curve(&mut rng, n);
        let b = random_curve(&mut rng, m);
        assert!(frechet_distance(&a, &b) + 1e-12 >= hausdorff_distance(&a, &b));
    }
}

#[test]
fn all_metrics_zero_on_self() {
    let c = resample(&normalize(&shapes::star(6, 0.5)), 64);
    let metrics: [MetricFn; 3] = [hausdorff_distance, frechet_distance, turning_angle_distance];
    for f in metrics {
        assert_eq!(f(&c, &c), 0.0);
    }
}

#[test]
fn circle_closer_to_oval_than_star() {
    let prep = |c: &[Vector2<f64>]| resample(&normalize(c), 64);
    let circle = prep(&shapes::ellipse(90, 1.0, 1.0));
    let oval = prep(&shapes::ellipse(90, 1.0, 0.85));
    let star = prep(&shapes::star(5, 0.4));
    let metrics: [MetricFn; 3] = [hausdorff_distance, frechet_distance, turning_angle_distance];
    for f in metrics {
        assert!(f(&circle, &oval) < f(&circle, &star));
    }
}

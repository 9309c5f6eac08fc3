//! Property tests for the matching invariants.

use proptest::prelude::*;
use sketchmatch::curve::bounding_box;
use sketchmatch::metrics::hausdorff_distance;
use sketchmatch::prelude::*;

fn curve(min: usize, max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), min..max)
        .prop_map(|v| v.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn normalize_ignores_scale_and_translation(
        c in curve(3, 40),
        k in 0.01f64..100.0,
        tx in -1000.0f64..1000.0,
        ty in -1000.0f64..1000.0,
    ) {
        prop_assume!(bounding_box(&c).extent() > 1.0);
        let moved: Vec<Point> = c.iter().map(|p| p * k + Point::new(tx, ty)).collect();
        let a = normalize(&c);
        let b = normalize(&moved);
        prop_assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(&b) {
            prop_assert!((p - q).norm() < 1e-8);
        }
    }

    #[test]
    fn resample_has_exact_cardinality(c in curve(2, 40), n in 2usize..200) {
        prop_assume!(c.iter().any(|p| *p != c[0]));
        let r = resample(&c, n);
        prop_assert_eq!(r.len(), n);
        prop_assert_eq!(r[0], c[0]);
    }

    #[test]
    fn hausdorff_is_symmetric(a in curve(1, 30), b in curve(1, 30)) {
        prop_assert_eq!(hausdorff_distance(&a, &b), hausdorff_distance(&b, &a));
    }

    #[test]
    fn similarity_stays_in_range(a in curve(0, 25), b in curve(0, 25)) {
        for alg in Algorithm::ALL {
            let s = match_shape(&a, &b, alg);
            prop_assert!((0.0..=100.0).contains(&s), "{} gave {}", alg, s);
        }
    }

    #[test]
    fn closed_self_match_near_full(c in curve(4, 30)) {
        prop_assume!(bounding_box(&c).extent() > 1e-3);
        let closed = close_curve(&c);
        for alg in Algorithm::ALL {
            let s = match_shape(&closed, &closed, alg);
            prop_assert!(s > 99.999, "{} gave {}", alg, s);
        }
    }
}

use super::*;
use crate::align::rotate_cyclic;
use crate::catalog::{self, Catalog, CatalogEntry};
use crate::curve::{close_curve, shapes};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::TAU;

/// Limaçon `r = 1 + 0.5 cos θ`: smooth, closed, no rotational symmetry.
fn limacon(n: usize) -> Vec<Point> {
    (0..n)
        .map(|k| {
            let th = TAU * k as f64 / n as f64;
            let r = 1.0 + 0.5 * th.cos();
            Point::new(r * th.cos(), r * th.sin())
        })
        .collect()
}

#[test]
fn self_match_is_full_score() {
    let monza = catalog::builtin().iter().next().unwrap().layout.clone();
    for c in [close_curve(&limacon(80)), shapes::star(5, 0.45), monza] {
        for a in Algorithm::ALL {
            let s = match_shape(&c, &c, a);
            assert!((s - 100.0).abs() < 1e-6, "{a}: {s}");
        }
    }
}

#[test]
fn scale_and_translation_do_not_matter() {
    let c = shapes::star(7, 0.6);
    let moved: Vec<Point> = c
        .iter()
        .map(|p| p * 37.5 + Point::new(-120.0, 44.0))
        .collect();
    for a in Algorithm::ALL {
        assert!(match_shape(&c, &moved, a) > 99.999);
    }
}

#[test]
fn turning_angle_ignores_scale_and_translation_seeded() {
    let mut rng = StdRng::seed_from_u64(31);
    let outlines = [
        shapes::star(7, 0.6),
        shapes::star(5, 0.45),
        shapes::ellipse(40, 1.0, 0.7),
        close_curve(&limacon(50)),
    ];
    for _ in 0..40 {
        let c = &outlines[rng.gen_range(0..outlines.len())];
        let k = rng.gen_range(0.01..100.0);
        let t = Point::new(
            rng.gen_range(-1000.0..1000.0),
            rng.gen_range(-1000.0..1000.0),
        );
        let moved: Vec<Point> = c.iter().map(|p| p * k + t).collect();
        let s = match_shape(c, &moved, Algorithm::TurningAngle);
        assert!(s > 99.999, "scale {k}: {s}");
    }
}

#[test]
fn scores_bounded_seeded() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..30 {
        let n = rng.gen_range(1..40);
        let m = rng.gen_range(1..40);
        let a: Vec<Point> = (0..n)
            .map(|_| Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
            .collect();
        let b: Vec<Point> = (0..m)
            .map(|_| Point::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();
        for alg in Algorithm::ALL {
            let s = match_shape(&a, &b, alg);
            assert!((0.0..=100.0).contains(&s), "{alg}: {s}");
        }
    }
}

#[test]
fn cyclic_rotation_beats_different_shape() {
    let verts = limacon(120);
    let c = close_curve(&verts);
    let other = shapes::star(5, 0.45);
    let full = MatchCfg::default().exhaustive();
    for r in [15usize, 30, 45, 60, 90] {
        let mut rotated = verts.clone();
        rotated.rotate_left(r);
        let c_rot = close_curve(&rotated);

        let same = match_shape(&c, &c_rot, Algorithm::TurningAngle);
        let diff = match_shape(&c, &other, Algorithm::TurningAngle);
        assert!(same > diff + 15.0, "turning r={r}: {same} vs {diff}");

        // 8 sampled offsets leave up to half a step of misalignment, which
        // Fréchet punishes hard; the exhaustive search closes the gap.
        let same = match_shape(&c, &c_rot, Algorithm::Frechet);
        let diff = match_shape(&c, &other, Algorithm::Frechet);
        assert!(same > diff * 1.5, "frechet r={r}: {same} vs {diff}");
        let same = match_shape_with(&c, &c_rot, Algorithm::Frechet, &full);
        let diff = match_shape_with(&c, &other, Algorithm::Frechet, &full);
        assert!(same > diff + 40.0, "exhaustive frechet r={r}: {same} vs {diff}");
    }
}

#[test]
fn exhaustive_search_never_worse() {
    let verts = limacon(100);
    let c = close_curve(&verts);
    let mut rotated = verts.clone();
    rotated.rotate_left(37);
    let c_rot = close_curve(&rotated);
    let sampled = MatchCfg::default();
    let full = sampled.exhaustive();
    for alg in [Algorithm::Frechet, Algorithm::TurningAngle] {
        let s = match_shape_with(&c, &c_rot, alg, &sampled);
        let f = match_shape_with(&c, &c_rot, alg, &full);
        assert!(f >= s, "{alg}: exhaustive {f} < sampled {s}");
    }
}

#[test]
fn hausdorff_ignores_start_point() {
    let s = resample(&normalize(&shapes::star(6, 0.5)), 64);
    let a = score_prepared(&s, &rotate_cyclic(&s, 19), Algorithm::Hausdorff, 8);
    assert_eq!(a, 100.0);
}

#[test]
fn pathological_inputs_stay_finite() {
    let tri4 = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(2.0, 3.0),
        Point::new(0.0, 0.0),
    ];
    let dot = vec![Point::new(2.0, 2.0); 4];
    let reference = shapes::ellipse(40, 1.0, 0.7);
    for alg in Algorithm::ALL {
        for drawn in [&tri4, &dot] {
            let s = match_shape(drawn, &reference, alg);
            assert!(s.is_finite() && (0.0..=100.0).contains(&s), "{alg}: {s}");
        }
        assert_eq!(match_shape(&[], &reference, alg), 0.0);
        assert_eq!(match_shape(&reference, &[], alg), 0.0);
    }
}

#[test]
fn rank_sorted_descending_with_all_ids() {
    let cat = catalog::builtin();
    let drawn = shapes::ellipse(60, 1.0, 0.8);
    for alg in Algorithm::ALL {
        let out = rank(&drawn, cat.curves(), alg, &MatchCfg::default());
        assert_eq!(out.len(), cat.len());
        assert!(out.windows(2).all(|w| w[0].similarity >= w[1].similarity));
        let mut ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        let mut want: Vec<&str> = cat.ids().collect();
        want.sort_unstable();
        assert_eq!(ids, want);
    }
}

#[test]
fn matcher_agrees_with_free_rank() {
    let cat = catalog::builtin();
    let m = Matcher::with_defaults(&cat);
    let drawn = shapes::star(4, 0.7);
    for alg in Algorithm::ALL {
        assert_eq!(m.rank(&drawn, alg), rank(&drawn, cat.curves(), alg, m.cfg()));
    }
}

#[test]
fn check_drawing_gate() {
    let cfg = MatchCfg::default();
    let few = vec![Point::new(0.0, 0.0); 9];
    assert_eq!(
        check_drawing(&few, &cfg),
        Err(CurveError::TooFewPoints { got: 9, min: 10 })
    );
    let mut ok = shapes::ellipse(20, 1.0, 1.0);
    assert!(check_drawing(&ok, &cfg).is_ok());
    ok[3].y = f64::INFINITY;
    assert_eq!(check_drawing(&ok, &cfg), Err(CurveError::NonFinite { index: 3 }));
}

#[test]
fn evaluate_reports_tiers() {
    let cat = Catalog::new(vec![
        CatalogEntry::new("round", shapes::ellipse(64, 1.0, 1.0)),
        CatalogEntry::new("spiky", shapes::star(5, 0.3)),
    ])
    .unwrap();
    let m = Matcher::with_defaults(&cat);

    let report = m
        .evaluate(&shapes::ellipse(50, 3.0, 3.0), Algorithm::Hausdorff)
        .unwrap();
    assert_eq!(report.verdict, Verdict::Excellent);
    assert_eq!(report.best().map(|r| r.id.as_str()), Some("round"));

    let strict = Matcher::new(
        &cat,
        MatchCfg {
            confidence_floor: 100.5,
            ..MatchCfg::default()
        },
    );
    let report = strict
        .evaluate(&shapes::ellipse(50, 3.0, 3.0), Algorithm::Hausdorff)
        .unwrap();
    assert_eq!(report.verdict, Verdict::NoMatch);
    assert!(report.best().is_none());
    assert_eq!(report.ranking.len(), 2);

    assert!(m.evaluate(&shapes::star(2, 0.5), Algorithm::Frechet).is_err());
}

#[test]
fn empty_catalog_has_no_best() {
    let cat = Catalog::default();
    let m = Matcher::with_defaults(&cat);
    assert!(m.best(&shapes::star(5, 0.5), Algorithm::Frechet).is_none());
    let report = m
        .evaluate(&shapes::ellipse(30, 1.0, 1.0), Algorithm::Hausdorff)
        .unwrap();
    assert_eq!(report.verdict, Verdict::NoMatch);
}

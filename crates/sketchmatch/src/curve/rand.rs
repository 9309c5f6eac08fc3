//! Synthetic "hand-drawn" curves (replay tokens + bounded jitter).
//!
//! Purpose
//! - Produce reproducible drawings of a known outline for tests, benches and
//!   the CLI demo, without a drawing surface.
//!
//! Model
//! - Drop the closing duplicate, optionally start at a random vertex, resample
//!   the loop to `points` samples, jitter each sample by at most
//!   `jitter * extent` per axis, then apply a random uniform scale and
//!   translation and close the loop again.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::resample::resample;
use super::types::{bounding_box, close_curve, Curve, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sketch sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SketchCfg {
    /// Samples along the loop before closing (the output has one more).
    pub points: usize,
    /// Per-axis jitter amplitude relative to the outline's larger side.
    pub jitter: f64,
    /// Uniform scale drawn from `[scale_min, scale_max]`.
    pub scale_min: f64,
    pub scale_max: f64,
    /// Translation components drawn from `[-max_offset, max_offset]`.
    pub max_offset: f64,
    /// Start the stroke at a random vertex of the outline?
    pub random_start: bool,
}

impl Default for SketchCfg {
    fn default() -> Self {
        Self {
            points: 96,
            jitter: 0.01,
            scale_min: 50.0,
            scale_max: 400.0,
            max_offset: 500.0,
            random_start: true,
        }
    }
}

/// Replay token to make sketches reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a jittered, scaled, translated copy of `outline`.
///
/// Returns `None` for outlines with fewer than two distinct vertices.
pub fn sketch_of(outline: &[Point], cfg: SketchCfg, tok: ReplayToken) -> Option<Curve> {
    let mut verts = outline.to_vec();
    if verts.len() > 1 && verts.first() == verts.last() {
        verts.pop();
    }
    if verts.len() < 2 {
        return None;
    }
    let mut rng = tok.to_std_rng();
    if cfg.random_start {
        let k = rng.gen_range(0..verts.len());
        verts.rotate_left(k);
    }
    let extent = bounding_box(&verts).extent();
    if extent == 0.0 {
        return None;
    }
    let n = cfg.points.max(3);
    let mut samples = resample(&close_curve(&verts), n + 1);
    samples.pop();

    let amp = cfg.jitter.max(0.0) * extent;
    let lo = cfg.scale_min.max(1e-9);
    let hi = cfg.scale_max.max(lo);
    let scale = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
    let off = cfg.max_offset.abs();
    let shift = Point::new(rng.gen_range(-off..=off), rng.gen_range(-off..=off));
    let drawn: Vec<Point> = samples
        .into_iter()
        .map(|p| {
            let noise = Point::new(
                (rng.gen::<f64>() * 2.0 - 1.0) * amp,
                (rng.gen::<f64>() * 2.0 - 1.0) * amp,
            );
            (p + noise) * scale + shift
        })
        .collect();
    Some(close_curve(&drawn))
}

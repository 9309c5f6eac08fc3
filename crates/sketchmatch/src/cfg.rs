//! Matching defaults.
//!
//! Policy
//! - Fixed constants reproduce the reference scoring exactly. `MatchCfg`
//!   carries the ones callers may want to tune; the decay rates stay
//!   constants so scores remain comparable across runs.

/// Samples per curve after arc-length resampling.
pub const SAMPLES: usize = 64;
/// Candidate start offsets tried by the rotation search.
pub const OFFSETS: usize = 8;
/// Below this top score a ranking is reported as "no confident match".
pub const CONFIDENCE_FLOOR: f64 = 20.0;
/// Drawings with fewer raw points are rejected before matching.
pub const MIN_DRAWN_POINTS: usize = 10;
/// Lower bound of the "good match" tier.
pub const GOOD_MATCH: f64 = 50.0;
/// Lower bound of the "excellent match" tier.
pub const EXCELLENT_MATCH: f64 = 75.0;

/// Decay rate of the Hausdorff score, `100·exp(−8d)`.
pub const HAUSDORFF_DECAY: f64 = 8.0;
/// Decay rate of the Fréchet score, `100·exp(−10d)`.
pub const FRECHET_DECAY: f64 = 10.0;
/// Decay rate of the turning-angle score, `100·exp(−2d)`.
pub const TURNING_DECAY: f64 = 2.0;

/// Tunable matching parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchCfg {
    pub samples: usize,
    pub offsets: usize,
    pub confidence_floor: f64,
    pub min_points: usize,
}

impl Default for MatchCfg {
    fn default() -> Self {
        Self {
            samples: SAMPLES,
            offsets: OFFSETS,
            confidence_floor: CONFIDENCE_FLOOR,
            min_points: MIN_DRAWN_POINTS,
        }
    }
}

impl MatchCfg {
    /// Try every start offset instead of a sample of them.
    pub fn exhaustive(self) -> Self {
        Self {
            offsets: self.samples.max(1),
            ..self
        }
    }
}

//! Selector, result and error types for the orchestrator.

use crate::cfg::{EXCELLENT_MATCH, FRECHET_DECAY, GOOD_MATCH, HAUSDORFF_DECAY, TURNING_DECAY};
use crate::metrics::{frechet_distance, hausdorff_distance, turning_angle_distance, MetricFn};
use std::fmt;
use std::str::FromStr;

/// Which distance + score pair to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Hausdorff,
    Frechet,
    TurningAngle,
}

/// Distance function, score decay, and whether the rotation search applies.
#[derive(Clone, Copy)]
pub struct MetricSpec {
    pub distance: MetricFn,
    pub decay: f64,
    pub needs_alignment: bool,
}

impl fmt::Debug for MetricSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricSpec")
            .field("decay", &self.decay)
            .field("needs_alignment", &self.needs_alignment)
            .finish_non_exhaustive()
    }
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Hausdorff,
        Algorithm::Frechet,
        Algorithm::TurningAngle,
    ];

    /// Table entry for this algorithm.
    pub fn metric(self) -> MetricSpec {
        match self {
            Algorithm::Hausdorff => MetricSpec {
                distance: hausdorff_distance,
                decay: HAUSDORFF_DECAY,
                needs_alignment: false,
            },
            Algorithm::Frechet => MetricSpec {
                distance: frechet_distance,
                decay: FRECHET_DECAY,
                needs_alignment: true,
            },
            Algorithm::TurningAngle => MetricSpec {
                distance: turning_angle_distance,
                decay: TURNING_DECAY,
                needs_alignment: true,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Hausdorff => "hausdorff",
            Algorithm::Frechet => "frechet",
            Algorithm::TurningAngle => "turning-angle",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm `{}` (expected hausdorff, frechet or turning-angle)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hausdorff" => Ok(Algorithm::Hausdorff),
            "frechet" | "fréchet" => Ok(Algorithm::Frechet),
            "turning-angle" | "turning_angle" | "turning" => Ok(Algorithm::TurningAngle),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// One ranked catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    pub id: String,
    /// Score in [0, 100].
    pub similarity: f64,
}

/// Confidence tier of a top score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verdict {
    NoMatch,
    Found,
    Good,
    Excellent,
}

impl Verdict {
    /// Tier for `score` given the caller's confidence floor.
    pub fn classify(score: f64, floor: f64) -> Self {
        if !(score >= floor) {
            Verdict::NoMatch
        } else if score >= EXCELLENT_MATCH {
            Verdict::Excellent
        } else if score >= GOOD_MATCH {
            Verdict::Good
        } else {
            Verdict::Found
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::NoMatch => "no close match",
            Verdict::Found => "match found",
            Verdict::Good => "good match",
            Verdict::Excellent => "excellent match",
        })
    }
}

/// Ranking plus the tier of its top entry.
#[derive(Clone, Debug)]
pub struct MatchReport {
    pub algorithm: Algorithm,
    pub ranking: Vec<MatchResult>,
    pub verdict: Verdict,
}

impl MatchReport {
    /// Top entry, unless it fell below the confidence floor.
    pub fn best(&self) -> Option<&MatchResult> {
        match self.verdict {
            Verdict::NoMatch => None,
            _ => self.ranking.first(),
        }
    }
}

/// Input rejected before matching, or an inconsistent catalog.
#[derive(Clone, Debug, PartialEq)]
pub enum CurveError {
    TooFewPoints { got: usize, min: usize },
    NonFinite { index: usize },
    DuplicateId { id: String },
    InvalidLayout { id: String, reason: String },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { got, min } => {
                write!(f, "drawing has {got} points, need at least {min}")
            }
            Self::NonFinite { index } => write!(f, "non-finite coordinate at point {index}"),
            Self::DuplicateId { id } => write!(f, "duplicate catalog id `{id}`"),
            Self::InvalidLayout { id, reason } => write!(f, "invalid layout for `{id}`: {reason}"),
        }
    }
}

impl std::error::Error for CurveError {}

//! Freehand sketch → reference outline matching.
//!
//! A drawn closed curve is compared against a small catalog of closed
//! polylines (circuit layouts) with one of three shape distances, each turned
//! into a 0–100 similarity.
//!
//! Layout
//! - `curve`: points, bounding boxes, `normalize`, `resample`, display helpers.
//! - `metrics`: Hausdorff, discrete Fréchet, turning angle.
//! - `align`: cyclic start-offset search for order-sensitive metrics.
//! - `score`: distance → similarity decay.
//! - `matching`: `match_shape`, `rank`, `Matcher`, verdict tiers.
//! - `catalog`: reference entries and the bundled outlines.
//!
//! Everything here is synchronous and pure; no I/O, no global state.

pub mod align;
pub mod api;
pub mod catalog;
pub mod cfg;
pub mod curve;
pub mod matching;
pub mod metrics;
pub mod score;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::MatchCfg;
pub use curve::{normalize, resample, Point};
pub use matching::{match_shape, rank, Algorithm, MatchResult};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::catalog::{builtin as builtin_catalog, Catalog, CatalogEntry};
    pub use crate::cfg::MatchCfg;
    pub use crate::curve::{close_curve, normalize, resample, Curve, Point};
    pub use crate::matching::{
        check_drawing, match_shape, match_shape_with, rank, Algorithm, CurveError, MatchReport,
        MatchResult, Matcher, Verdict,
    };
}

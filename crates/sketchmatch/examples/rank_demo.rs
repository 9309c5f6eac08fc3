//! Rank a few synthetic sketches against the bundled catalog.
//!
//! Usage:
//!   cargo run -p sketchmatch --example rank_demo -- [hausdorff|frechet|turning-angle]
//!
//! For every bundled outline, draws one jittered sketch and prints the top
//! three matches with their scores.

use sketchmatch::catalog::builtin;
use sketchmatch::curve::rand::{sketch_of, ReplayToken, SketchCfg};
use sketchmatch::prelude::*;

fn main() {
    let algorithm = match std::env::args().nth(1).map(|s| s.parse::<Algorithm>()) {
        None => Algorithm::Hausdorff,
        Some(Ok(a)) => a,
        Some(Err(e)) => {
            eprintln!("{e}");
            return;
        }
    };
    let cat = builtin();
    let matcher = Matcher::with_defaults(&cat);
    for (i, entry) in cat.iter().enumerate() {
        let tok = ReplayToken {
            seed: 2025,
            index: i as u64,
        };
        let Some(drawn) = sketch_of(&entry.layout, SketchCfg::default(), tok) else {
            continue;
        };
        let top: Vec<String> = matcher
            .rank(&drawn, algorithm)
            .into_iter()
            .take(3)
            .map(|r| format!("{} {:.1}", r.id, r.similarity))
            .collect();
        println!("{algorithm} sketch of {}: {}", entry.id, top.join(", "));
    }
}

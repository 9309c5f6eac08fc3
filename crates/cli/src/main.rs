use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use sketchmatch::curve::rand::{sketch_of, ReplayToken, SketchCfg};
use sketchmatch::prelude::*;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Match freehand drawings against circuit outlines")]
struct Cmd {
    /// Log per-entry scores
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    tuning: Tuning,

    #[command(subcommand)]
    action: Action,
}

/// Overrides for the default matching parameters.
#[derive(Args, Clone, Copy, Default)]
struct Tuning {
    /// Points per curve after resampling
    #[arg(long, global = true)]
    samples: Option<usize>,
    /// Start offsets tried by the rotation search
    #[arg(long, global = true)]
    offsets: Option<usize>,
    /// Scores below this are reported as no match
    #[arg(long, global = true)]
    floor: Option<f64>,
}

impl Tuning {
    fn cfg(self) -> MatchCfg {
        let base = MatchCfg::default();
        MatchCfg {
            samples: self.samples.unwrap_or(base.samples),
            offsets: self.offsets.unwrap_or(base.offsets),
            confidence_floor: self.floor.unwrap_or(base.confidence_floor),
            ..base
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Rank a drawing against the catalog and print the verdict
    Match {
        #[arg(long)]
        drawing: PathBuf,
        /// Catalog JSON; the bundled outlines when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long, default_value_t = Algorithm::Hausdorff)]
        algo: Algorithm,
        /// Ranking output (.json or .parquet) with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Score two curves against each other
    Compare {
        #[arg(long)]
        a: PathBuf,
        #[arg(long)]
        b: PathBuf,
        /// All algorithms when omitted
        #[arg(long)]
        algo: Option<Algorithm>,
    },
    /// Synthesize a sketch of a catalog outline and match it
    Demo {
        #[arg(long)]
        target: String,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long, default_value_t = Algorithm::Hausdorff)]
        algo: Algorithm,
    },
    /// List catalog entries
    Catalog {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print a provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(if cmd.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();
    let cfg = cmd.tuning.cfg();
    match cmd.action {
        Action::Match {
            drawing,
            catalog,
            algo,
            out,
        } => {
            let report = run_match(&drawing, catalog.as_deref(), algo, cfg, out.as_deref())?;
            print_report(&report);
            Ok(())
        }
        Action::Compare { a, b, algo } => compare(&a, &b, algo, &cfg),
        Action::Demo {
            target,
            seed,
            index,
            catalog,
            algo,
        } => {
            let tok = ReplayToken { seed, index };
            let report = demo(&target, tok, catalog.as_deref(), algo, cfg)?;
            print_report(&report);
            Ok(())
        }
        Action::Catalog { catalog } => list_catalog(catalog.as_deref()),
        Action::Report => report(&cfg),
    }
}

fn params(algo: Algorithm, cfg: &MatchCfg) -> serde_json::Value {
    json!({
        "algorithm": algo.as_str(),
        "samples": cfg.samples,
        "offsets": cfg.offsets,
        "confidence_floor": cfg.confidence_floor,
        "min_points": cfg.min_points,
    })
}

fn rank_logged(matcher: &Matcher, drawn: &[Point], algo: Algorithm) -> Result<MatchReport> {
    let report = matcher.evaluate(drawn, algo)?;
    for (i, r) in report.ranking.iter().enumerate() {
        tracing::debug!(rank = i + 1, id = %r.id, similarity = r.similarity, "scored");
    }
    let top = report.ranking.first();
    tracing::info!(
        algorithm = %algo,
        entries = report.ranking.len(),
        best = top.map(|r| r.id.as_str()),
        score = top.map(|r| r.similarity),
        verdict = %report.verdict,
        "ranked"
    );
    Ok(report)
}

fn run_match(
    drawing: &Path,
    catalog: Option<&Path>,
    algo: Algorithm,
    cfg: MatchCfg,
    out: Option<&Path>,
) -> Result<MatchReport> {
    let raw = io::read_curve(drawing)?;
    tracing::info!(drawing = %drawing.display(), points = raw.len(), "loaded drawing");
    let drawn = close_curve(&raw);
    let cat = io::load_catalog(catalog)?;
    let matcher = Matcher::new(&cat, cfg);
    let report = rank_logged(&matcher, &drawn, algo)
        .with_context(|| format!("matching {}", drawing.display()))?;

    if let Some(out) = out {
        io::write_report(out, &report)?;
        let mut payload = provenance::Payload::new(params(algo, &cfg)).with_input(drawing);
        if let Some(c) = catalog {
            payload = payload.with_input(c);
        }
        let sidecar = provenance::write_sidecar(out, payload)?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote ranking");
    }
    Ok(report)
}

fn compare(a: &Path, b: &Path, algo: Option<Algorithm>, cfg: &MatchCfg) -> Result<()> {
    let ca = close_curve(&io::read_curve(a)?);
    let cb = close_curve(&io::read_curve(b)?);
    let algos = match algo {
        Some(one) => vec![one],
        None => Algorithm::ALL.to_vec(),
    };
    for alg in algos {
        let s = match_shape_with(&ca, &cb, alg, cfg);
        tracing::info!(algorithm = %alg, similarity = s, "compared");
        println!("{:<14} {s:6.2}", alg.as_str());
    }
    Ok(())
}

fn demo(
    target: &str,
    tok: ReplayToken,
    catalog: Option<&Path>,
    algo: Algorithm,
    cfg: MatchCfg,
) -> Result<MatchReport> {
    let cat = io::load_catalog(catalog)?;
    let entry = cat
        .get(target)
        .with_context(|| format!("no catalog entry `{target}`"))?;
    let drawn = sketch_of(&entry.layout, SketchCfg::default(), tok)
        .with_context(|| format!("outline of `{target}` is empty"))?;
    tracing::info!(
        id = target,
        seed = tok.seed,
        index = tok.index,
        points = drawn.len(),
        "sketched"
    );
    rank_logged(&Matcher::new(&cat, cfg), &drawn, algo)
}

fn print_report(report: &MatchReport) {
    println!("{} ({})", report.verdict, report.algorithm);
    for (i, r) in report.ranking.iter().enumerate() {
        println!("{:>2}. {:<16} {:6.2}", i + 1, r.id, r.similarity);
    }
}

fn list_catalog(catalog: Option<&Path>) -> Result<()> {
    let cat = io::load_catalog(catalog)?;
    tracing::info!(entries = cat.len(), "catalog");
    for e in &cat {
        println!("{:<16} {:>4} pts  {} ({})", e.id, e.layout.len(), e.name, e.country);
    }
    Ok(())
}

fn report(cfg: &MatchCfg) -> Result<()> {
    let payload = provenance::Payload::new(params(Algorithm::Hausdorff, cfg));
    let doc = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

//! File formats for drawings, catalogs and rankings.
//!
//! Drawings: CSV with `x` and `y` columns (read through polars), or JSON as
//! `[[x, y], ...]` / `[{"x": .., "y": ..}, ...]`. Catalogs: JSON array of
//! entries with a `layout` in either point form. Rankings are written as JSON
//! or, for a `.parquet` path, as a `rank,id,similarity` table.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use sketchmatch::prelude::*;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Pair([f64; 2]),
    Xy { x: f64, y: f64 },
}

impl From<RawPoint> for Point {
    fn from(p: RawPoint) -> Self {
        match p {
            RawPoint::Pair([x, y]) | RawPoint::Xy { x, y } => Point::new(x, y),
        }
    }
}

#[derive(Deserialize)]
struct CatalogRecord {
    id: String,
    name: Option<String>,
    location: Option<String>,
    country: Option<String>,
    layout: Vec<RawPoint>,
    #[serde(default)]
    facts: Vec<String>,
    length: Option<String>,
    corners: Option<u32>,
}

impl From<CatalogRecord> for CatalogEntry {
    fn from(r: CatalogRecord) -> Self {
        let layout = r.layout.into_iter().map(Point::from).collect();
        let mut entry = CatalogEntry::new(r.id, layout);
        if let Some(name) = r.name {
            entry.name = name;
        }
        if let Some(location) = r.location {
            entry.location = location;
        }
        if let Some(country) = r.country {
            entry.country = country;
        }
        if !r.facts.is_empty() {
            entry.facts = r.facts;
        }
        entry.length = r.length;
        entry.corners = r.corners;
        entry
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}

/// Load a curve from `.csv` or `.json`.
pub fn read_curve(path: &Path) -> Result<Curve> {
    match extension(path).as_str() {
        "csv" => read_curve_csv(path),
        "json" => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let raw: Vec<RawPoint> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing points in {}", path.display()))?;
            Ok(raw.into_iter().map(Point::from).collect())
        }
        other => bail!("unsupported drawing format `{other}` for {}", path.display()),
    }
}

fn read_curve_csv(path: &Path) -> Result<Curve> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("missing coordinate in row {row} of {}", path.display()),
        })
        .collect()
}

/// Load and validate a catalog JSON file.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<CatalogRecord> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    let entries = records.into_iter().map(CatalogEntry::from).collect();
    Catalog::new(entries).with_context(|| format!("validating catalog {}", path.display()))
}

/// The catalog file when given, else the bundled outlines.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(p) => read_catalog(p),
        None => Ok(builtin_catalog()),
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct RankedRow {
    pub rank: u32,
    pub id: String,
    pub similarity: f64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ReportDoc {
    pub algorithm: String,
    pub verdict: String,
    pub best: Option<String>,
    pub ranking: Vec<RankedRow>,
}

impl From<&MatchReport> for ReportDoc {
    fn from(r: &MatchReport) -> Self {
        Self {
            algorithm: r.algorithm.to_string(),
            verdict: r.verdict.to_string(),
            best: r.best().map(|b| b.id.clone()),
            ranking: r
                .ranking
                .iter()
                .zip(1u32..)
                .map(|(m, rank)| RankedRow {
                    rank,
                    id: m.id.clone(),
                    similarity: m.similarity,
                })
                .collect(),
        }
    }
}

/// Write `report` as JSON, or as a parquet table when `path` ends in `.parquet`.
pub fn write_report(path: &Path, report: &MatchReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let doc = ReportDoc::from(report);
    if extension(path) == "parquet" {
        let mut df = df!(
            "rank" => doc.ranking.iter().map(|r| r.rank).collect::<Vec<_>>(),
            "id" => doc.ranking.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            "similarity" => doc.ranking.iter().map(|r| r.similarity).collect::<Vec<_>>(),
        )?;
        let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
        ParquetWriter::new(file).finish(&mut df)?;
    } else {
        fs::write(path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

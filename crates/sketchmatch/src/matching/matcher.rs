use super::types::{Algorithm, CurveError, MatchReport, MatchResult, Verdict};
use super::{check_drawing, prepare, score_prepared, sort_ranking};
use crate::catalog::Catalog;
use crate::cfg::MatchCfg;
use crate::curve::{Curve, Point};

/// Matches drawings against one catalog.
///
/// Built once per catalog: every reference is normalized and resampled at
/// construction, so a request only prepares the drawing.
pub struct Matcher<'c> {
    catalog: &'c Catalog,
    cfg: MatchCfg,
    prepared: Vec<Curve>,
}

impl<'c> Matcher<'c> {
    pub fn new(catalog: &'c Catalog, cfg: MatchCfg) -> Self {
        let prepared = catalog
            .iter()
            .map(|e| prepare(&e.layout, cfg.samples))
            .collect();
        Self {
            catalog,
            cfg,
            prepared,
        }
    }

    pub fn with_defaults(catalog: &'c Catalog) -> Self {
        Self::new(catalog, MatchCfg::default())
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn cfg(&self) -> &MatchCfg {
        &self.cfg
    }

    /// Every catalog entry scored against `drawn`, best first.
    pub fn rank(&self, drawn: &[Point], algorithm: Algorithm) -> Vec<MatchResult> {
        let a = prepare(drawn, self.cfg.samples);
        let results = self
            .catalog
            .iter()
            .zip(&self.prepared)
            .map(|(entry, b)| MatchResult {
                id: entry.id.clone(),
                similarity: score_prepared(&a, b, algorithm, self.cfg.offsets),
            })
            .collect();
        sort_ranking(results)
    }

    /// Top entry regardless of confidence; `None` for an empty catalog.
    pub fn best(&self, drawn: &[Point], algorithm: Algorithm) -> Option<MatchResult> {
        self.rank(drawn, algorithm).into_iter().next()
    }

    /// Gate the drawing, rank it, and classify the top score.
    pub fn evaluate(
        &self,
        drawn: &[Point],
        algorithm: Algorithm,
    ) -> Result<MatchReport, CurveError> {
        check_drawing(drawn, &self.cfg)?;
        let ranking = self.rank(drawn, algorithm);
        let top = ranking.first().map_or(0.0, |r| r.similarity);
        Ok(MatchReport {
            algorithm,
            verdict: Verdict::classify(top, self.cfg.confidence_floor),
            ranking,
        })
    }
}

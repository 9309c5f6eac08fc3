//! Reference catalog: named closed outlines plus descriptive metadata.
//!
//! The matching path only reads `id` and `layout`; the rest is carried for
//! callers that present results. A `Catalog` is built once and handed to a
//! `Matcher` by reference.
//!
//! `builtin()` ships a handful of simplified circuit outlines in the unit
//! square (x right, y down), enough for demos, tests and benches. Real
//! layouts come from `curve::overlay::project_lonlat` on track geodata and
//! are loaded by the caller.

use crate::curve::{close_curve, Curve, Point};
use crate::matching::CurveError;
use std::collections::HashSet;

/// One reference outline.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub location: String,
    pub country: String,
    pub layout: Curve,
    pub facts: Vec<String>,
    pub length: Option<String>,
    pub corners: Option<u32>,
}

impl CatalogEntry {
    /// Entry with placeholder metadata; the name defaults to the id.
    pub fn new(id: impl Into<String>, layout: Curve) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            location: "Unknown".to_string(),
            country: "Unknown".to_string(),
            layout,
            facts: vec!["Formula 1 racing circuit".to_string()],
            length: None,
            corners: None,
        }
    }
}

/// Ordered collection of entries with unique ids.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validate and wrap `entries`.
    ///
    /// Rejects duplicate ids, layouts with fewer than three points, and
    /// non-finite coordinates.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CurveError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
        for e in &entries {
            if !seen.insert(&e.id) {
                return Err(CurveError::DuplicateId { id: e.id.clone() });
            }
            if e.layout.len() < 3 {
                return Err(CurveError::InvalidLayout {
                    id: e.id.clone(),
                    reason: format!("{} points, need at least 3", e.layout.len()),
                });
            }
            if let Some(i) = e.layout.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
                return Err(CurveError::InvalidLayout {
                    id: e.id.clone(),
                    reason: format!("non-finite coordinate at point {i}"),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    /// `(id, layout)` pairs in catalog order, the shape `matching::rank` takes.
    pub fn curves(&self) -> impl Iterator<Item = (&str, &[Point])> {
        self.entries
            .iter()
            .map(|e| (e.id.as_str(), e.layout.as_slice()))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

struct Builtin {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    country: &'static str,
    length: &'static str,
    corners: u32,
    facts: &'static [&'static str],
    outline: &'static [(f64, f64)],
}

const BUILTIN: &[Builtin] = &[
    Builtin {
        id: "monza",
        name: "Autodromo Nazionale di Monza",
        location: "Monza, Italy",
        country: "Italy",
        length: "5.793 km",
        corners: 11,
        facts: &[
            "Known as the \"Temple of Speed\"",
            "Fastest track in F1 with high average speeds",
            "Located in a royal park near Milan",
        ],
        outline: &[
            (0.58, 0.98),
            (0.56, 0.60),
            (0.52, 0.56),
            (0.55, 0.52),
            (0.54, 0.34),
            (0.58, 0.20),
            (0.66, 0.08),
            (0.74, 0.03),
            (0.78, 0.08),
            (0.74, 0.16),
            (0.78, 0.22),
            (0.86, 0.20),
            (0.90, 0.27),
            (0.84, 0.34),
            (0.80, 0.44),
            (0.80, 0.62),
            (0.76, 0.66),
            (0.79, 0.70),
            (0.78, 0.86),
            (0.74, 0.97),
            (0.66, 1.00),
        ],
    },
    Builtin {
        id: "spa",
        name: "Circuit de Spa-Francorchamps",
        location: "Spa, Belgium",
        country: "Belgium",
        length: "7.004 km",
        corners: 19,
        facts: &[
            "Longest track on the F1 calendar",
            "Eau Rouge-Raidillon is one of the most feared corners",
            "Infamous for unpredictable weather",
        ],
        outline: &[
            (0.10, 0.18),
            (0.16, 0.10),
            (0.20, 0.16),
            (0.40, 0.08),
            (0.62, 0.04),
            (0.70, 0.10),
            (0.66, 0.22),
            (0.78, 0.30),
            (0.92, 0.42),
            (0.96, 0.60),
            (0.86, 0.70),
            (0.90, 0.84),
            (0.80, 0.96),
            (0.66, 0.86),
            (0.50, 0.64),
            (0.36, 0.50),
            (0.20, 0.38),
            (0.08, 0.28),
        ],
    },
    Builtin {
        id: "silverstone",
        name: "Silverstone Circuit",
        location: "Silverstone, England",
        country: "United Kingdom",
        length: "5.891 km",
        corners: 18,
        facts: &[
            "Home of British Grand Prix and birthplace of F1",
            "Built on a former RAF bomber station",
            "Copse, Maggotts, and Becketts are iconic fast corners",
        ],
        outline: &[
            (0.20, 0.62),
            (0.30, 0.40),
            (0.26, 0.30),
            (0.38, 0.16),
            (0.50, 0.18),
            (0.56, 0.10),
            (0.62, 0.14),
            (0.60, 0.24),
            (0.74, 0.30),
            (0.86, 0.22),
            (0.94, 0.32),
            (0.84, 0.48),
            (0.72, 0.52),
            (0.68, 0.66),
            (0.76, 0.80),
            (0.64, 0.88),
            (0.48, 0.80),
            (0.36, 0.86),
            (0.24, 0.80),
        ],
    },
    Builtin {
        id: "red-bull-ring",
        name: "Red Bull Ring",
        location: "Spielberg, Austria",
        country: "Austria",
        length: "4.318 km",
        corners: 10,
        facts: &[
            "Shortest lap on the F1 calendar",
            "Only 10 corners but extremely challenging",
            "Set in the Styrian mountains",
        ],
        outline: &[
            (0.12, 0.70),
            (0.60, 0.08),
            (0.70, 0.06),
            (0.72, 0.16),
            (0.66, 0.40),
            (0.90, 0.56),
            (0.92, 0.66),
            (0.70, 0.70),
            (0.56, 0.62),
            (0.48, 0.76),
            (0.40, 0.90),
            (0.18, 0.86),
        ],
    },
    Builtin {
        id: "interlagos",
        name: "Autódromo José Carlos Pace",
        location: "São Paulo, Brazil",
        country: "Brazil",
        length: "4.309 km",
        corners: 15,
        facts: &[
            "Run counter-clockwise, one of only a few circuits with this direction",
            "Scene of many dramatic championship deciders",
            "Significant elevation changes make it physically demanding",
        ],
        outline: &[
            (0.30, 0.10),
            (0.70, 0.08),
            (0.88, 0.20),
            (0.92, 0.40),
            (0.80, 0.50),
            (0.62, 0.42),
            (0.50, 0.52),
            (0.66, 0.64),
            (0.84, 0.70),
            (0.80, 0.90),
            (0.50, 0.94),
            (0.24, 0.86),
            (0.12, 0.60),
            (0.14, 0.30),
        ],
    },
    Builtin {
        id: "suzuka",
        name: "Suzuka International Racing Course",
        location: "Suzuka, Japan",
        country: "Japan",
        length: "5.807 km",
        corners: 18,
        facts: &[
            "Only figure-eight circuit on the calendar",
            "The 130R corner is one of the fastest",
            "Designed by Dutch legend John Hugenholtz",
        ],
        outline: &[
            (0.10, 0.70),
            (0.30, 0.78),
            (0.40, 0.68),
            (0.46, 0.56),
            (0.56, 0.50),
            (0.62, 0.40),
            (0.72, 0.34),
            (0.80, 0.22),
            (0.92, 0.20),
            (0.94, 0.34),
            (0.82, 0.42),
            (0.66, 0.56),
            (0.52, 0.48),
            (0.40, 0.40),
            (0.30, 0.46),
            (0.16, 0.52),
            (0.06, 0.60),
        ],
    },
    Builtin {
        id: "hungaroring",
        name: "Hungaroring",
        location: "Budapest, Hungary",
        country: "Hungary",
        length: "4.381 km",
        corners: 14,
        facts: &[
            "First F1 race behind the Iron Curtain in 1986",
            "Twisty, low-speed circuit often compared to Monaco",
            "Difficult to overtake, qualifying position is crucial",
        ],
        outline: &[
            (0.20, 0.80),
            (0.20, 0.30),
            (0.30, 0.16),
            (0.42, 0.24),
            (0.40, 0.40),
            (0.52, 0.46),
            (0.60, 0.30),
            (0.72, 0.20),
            (0.84, 0.28),
            (0.80, 0.46),
            (0.88, 0.60),
            (0.78, 0.72),
            (0.62, 0.66),
            (0.52, 0.80),
            (0.36, 0.88),
        ],
    },
    Builtin {
        id: "yas-marina",
        name: "Yas Marina Circuit",
        location: "Abu Dhabi, UAE",
        country: "United Arab Emirates",
        length: "5.281 km",
        corners: 16,
        facts: &[
            "Twilight race with stunning lighting transition",
            "Features the iconic Yas Hotel bridge",
            "Often hosts the season finale",
        ],
        outline: &[
            (0.06, 0.52),
            (0.14, 0.40),
            (0.60, 0.36),
            (0.90, 0.18),
            (0.96, 0.26),
            (0.72, 0.46),
            (0.64, 0.56),
            (0.74, 0.66),
            (0.66, 0.74),
            (0.50, 0.66),
            (0.36, 0.72),
            (0.22, 0.64),
            (0.12, 0.66),
        ],
    },
];

/// The bundled reference catalog.
pub fn builtin() -> Catalog {
    let entries = BUILTIN
        .iter()
        .map(|b| CatalogEntry {
            id: b.id.to_string(),
            name: b.name.to_string(),
            location: b.location.to_string(),
            country: b.country.to_string(),
            layout: close_curve(
                &b.outline
                    .iter()
                    .map(|&(x, y)| Point::new(x, y))
                    .collect::<Vec<_>>(),
            ),
            facts: b.facts.iter().map(|s| s.to_string()).collect(),
            length: Some(b.length.to_string()),
            corners: Some(b.corners),
        })
        .collect();
    Catalog { entries }
}

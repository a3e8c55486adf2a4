use serde::Serialize;

/// How a raw attribute value maps onto a unit-interval suitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMode {
    /// Higher values are better (land area). Scores scale up from the
    /// reference toward 1.0 at max.
    Above,
    /// Lower values are better (land price, electricity rate).
    Below,
    /// Linear scaling within [min, max], higher is better.
    Range,
    /// Binary equality against the reference (zoning designation).
    Match,
    /// Proximity to the reference within a tolerance band (population
    /// density); both too-low and too-high are penalized.
    Tolerance,
    /// Linear scaling within [min, max], lower is better (disaster count).
    ReverseRange,
}

/// Reference point for modes that need one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reference {
    Numeric(f64),
    Text(&'static str),
}

impl Reference {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Reference::Numeric(n) => Some(*n),
            Reference::Text(_) => None,
        }
    }
}

/// Static scoring standard for one attribute: domain bounds, optional
/// reference point, and the normalization mode.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttributeStandard {
    pub key: &'static str,
    pub min: f64,
    pub max: f64,
    pub reference: Option<Reference>,
    pub mode: ScoreMode,
    /// Tolerance band width; only meaningful for `ScoreMode::Tolerance`.
    pub tolerance: Option<f64>,
}

/// Manufacturing-site scoring standards. Bounds and references are fixed
/// calibration values; changing them changes every score.
pub const STANDARDS: &[AttributeStandard] = &[
    AttributeStandard {
        key: "land_area",
        min: 1000.0,
        max: 50000.0,
        reference: Some(Reference::Numeric(10000.0)),
        mode: ScoreMode::Above,
        tolerance: None,
    },
    AttributeStandard {
        key: "land_price",
        min: 50000.0,
        max: 500000.0,
        reference: Some(Reference::Numeric(200000.0)),
        mode: ScoreMode::Below,
        tolerance: None,
    },
    AttributeStandard {
        key: "zone_type",
        min: 0.0,
        max: 0.0,
        reference: Some(Reference::Text("industrial zone")),
        mode: ScoreMode::Match,
        tolerance: None,
    },
    AttributeStandard {
        key: "electricity_rate",
        min: 80.0,
        max: 150.0,
        reference: Some(Reference::Numeric(100.0)),
        mode: ScoreMode::Below,
        tolerance: None,
    },
    AttributeStandard {
        key: "substation_density",
        min: 0.0,
        max: 10.0,
        reference: None,
        mode: ScoreMode::Range,
        tolerance: None,
    },
    AttributeStandard {
        key: "transmission_density",
        min: 0.0,
        max: 5.0,
        reference: None,
        mode: ScoreMode::Range,
        tolerance: None,
    },
    AttributeStandard {
        key: "population_density",
        min: 0.0,
        max: 0.0,
        reference: Some(Reference::Numeric(3000.0)),
        mode: ScoreMode::Tolerance,
        tolerance: Some(700.0),
    },
    AttributeStandard {
        key: "disaster_count",
        min: 0.0,
        max: 20.0,
        reference: None,
        mode: ScoreMode::ReverseRange,
        tolerance: None,
    },
    AttributeStandard {
        key: "policy_support",
        min: 0.0,
        max: 10.0,
        reference: None,
        mode: ScoreMode::Range,
        tolerance: None,
    },
];

/// Look up the standard for an attribute key.
pub fn standard_for(key: &str) -> Option<&'static AttributeStandard> {
    STANDARDS.iter().find(|s| s.key == key)
}

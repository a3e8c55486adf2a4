use crate::candidate::{AttributeValue, Candidate};

use super::standards::{standard_for, ScoreMode};
use super::weights::WeightProfile;

/// Validate a weight profile at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weights(weights: &WeightProfile) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (key, weight) in weights {
        if *weight < 0.0 {
            errors.push(format!("weights.{}: must be non-negative", key));
        }
        if standard_for(key).is_none() {
            errors.push(format!("weights.{}: unknown attribute", key));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Candidate completeness report: advisory only, the engine skips what is
/// missing rather than failing.
#[derive(Debug, Clone)]
pub struct CandidateValidation {
    pub is_valid: bool,
    pub missing_fields: Vec<String>,
    pub invalid_fields: Vec<String>,
}

/// Attributes a full scoring run expects to find on a candidate.
const REQUIRED_FIELDS: &[&str] = &[
    "land_price",
    "electricity_rate",
    "zone_type",
    "land_area",
    "substation_density",
    "transmission_density",
];

/// Check a candidate for missing required attributes and type mismatches
/// (text where the standard's mode is numeric).
pub fn validate_candidate(candidate: &Candidate) -> CandidateValidation {
    let mut missing_fields = Vec::new();
    let mut invalid_fields = Vec::new();

    for field in REQUIRED_FIELDS {
        match candidate.get(field) {
            None => missing_fields.push(field.to_string()),
            Some(value) => {
                let numeric_expected = standard_for(field)
                    .map(|s| s.mode != ScoreMode::Match)
                    .unwrap_or(false);
                if numeric_expected && matches!(value, AttributeValue::Text(_)) {
                    invalid_fields.push(field.to_string());
                }
            }
        }
    }

    CandidateValidation {
        is_valid: missing_fields.is_empty() && invalid_fields.is_empty(),
        missing_fields,
        invalid_fields,
    }
}

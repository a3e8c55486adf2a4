use serde::Serialize;
use std::collections::BTreeMap;

use crate::candidate::{AttributeValue, Candidate};

use super::normalize::normalize;
use super::standards::standard_for;
use super::weights::WeightProfile;

/// Final score when no weighted attribute could be applied at all.
const FALLBACK_SCORE: f64 = 50.0;

/// Per-attribute scoring breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeScore {
    pub raw_value: AttributeValue,
    pub normalized_score: f64,
    pub weight: f64,
    pub weighted_score: f64,
}

/// Composite score for one candidate under one weight profile.
///
/// Scoring never panics and never returns an error: configuration faults
/// surface as `success == false` with `final_score == 0`, so a caller can
/// always render a partial report.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub success: bool,
    /// 0-100, rounded to two decimals
    pub final_score: f64,
    pub grade: String,
    pub detailed_scores: BTreeMap<String, AttributeScore>,
    pub total_indicators: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScoreResult {
    fn failure(message: String) -> Self {
        ScoreResult {
            success: false,
            final_score: 0.0,
            grade: score_grade(0.0).to_string(),
            detailed_scores: BTreeMap::new(),
            total_indicators: 0,
            error: Some(message),
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Letter grade for a composite score (inclusive lower bounds).
pub fn score_grade(score: f64) -> &'static str {
    if score >= 90.0 {
        "A+"
    } else if score >= 80.0 {
        "A"
    } else if score >= 70.0 {
        "B+"
    } else if score >= 60.0 {
        "B"
    } else if score >= 50.0 {
        "C+"
    } else {
        "C"
    }
}

/// Score one candidate under one weight profile.
///
/// Attributes missing from either the candidate or the standards table are
/// silently skipped; they contribute no weight and do not appear in
/// `detailed_scores`. With no applicable attributes the final score is the
/// fixed fallback of 50.0 (a degraded but successful result).
pub fn calculate_score(candidate: &Candidate, weights: &WeightProfile) -> ScoreResult {
    let mut detailed_scores = BTreeMap::new();
    let mut total_weighted_score = 0.0;
    let mut total_weight = 0.0;

    for (key, weight) in weights {
        let Some(standard) = standard_for(key) else {
            continue;
        };
        let Some(value) = candidate.get(key) else {
            continue;
        };

        let normalized_score = match normalize(value, standard) {
            Ok(score) => score,
            Err(e) => return ScoreResult::failure(format!("scoring '{}' failed: {}", key, e)),
        };

        let weighted_score = normalized_score * (weight / 100.0);
        detailed_scores.insert(
            key.clone(),
            AttributeScore {
                raw_value: value.clone(),
                normalized_score: round3(normalized_score),
                weight: *weight,
                weighted_score: round3(weighted_score),
            },
        );

        total_weighted_score += weighted_score;
        total_weight += weight / 100.0;
    }

    let final_score = if total_weight > 0.0 {
        (total_weighted_score / total_weight) * 100.0
    } else {
        FALLBACK_SCORE
    };

    ScoreResult {
        success: true,
        final_score: round2(final_score),
        grade: score_grade(final_score).to_string(),
        total_indicators: detailed_scores.len(),
        detailed_scores,
        error: None,
    }
}

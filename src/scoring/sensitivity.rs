use serde::Serialize;
use std::collections::BTreeMap;

use crate::candidate::Candidate;

use super::engine::{calculate_score, round2};
use super::weights::{builtin_scenarios, default_weights, WeightProfile, BASELINE_SCENARIO};

/// Score under one scenario's weights.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub final_score: f64,
    pub grade: String,
    pub weights: WeightProfile,
}

/// Delta of a scenario relative to the default-weights baseline.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreVariation {
    pub score_change: f64,
    pub percentage_change: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SensitivityResult {
    pub success: bool,
    pub baseline_scenario: String,
    pub baseline_score: f64,
    pub scenarios: BTreeMap<String, ScenarioOutcome>,
    pub variations: BTreeMap<String, ScoreVariation>,
    /// Scenario with the largest absolute score change (first on ties)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_sensitive_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SensitivityResult {
    fn failure(message: String) -> Self {
        SensitivityResult {
            success: false,
            baseline_scenario: BASELINE_SCENARIO.to_string(),
            baseline_score: 0.0,
            scenarios: BTreeMap::new(),
            variations: BTreeMap::new(),
            most_sensitive_to: None,
            error: Some(message),
        }
    }
}

/// Quantify how one candidate's score shifts under alternative weight
/// profiles.
///
/// The default-weights baseline is always evaluated and cannot be shadowed
/// by an extra scenario of the same name. Built-in scenarios (cost,
/// infrastructure, stability focus) run alongside any caller-supplied ones.
/// Scenarios that fail to score are left out of the results; a failed
/// baseline fails the whole analysis.
pub fn analyze_sensitivity(
    candidate: &Candidate,
    extra_scenarios: &BTreeMap<String, WeightProfile>,
) -> SensitivityResult {
    let baseline = calculate_score(candidate, &default_weights());
    if !baseline.success {
        return SensitivityResult::failure(
            baseline
                .error
                .unwrap_or_else(|| "baseline score calculation failed".to_string()),
        );
    }
    let baseline_score = baseline.final_score;

    let mut all_scenarios = builtin_scenarios();
    for (name, weights) in extra_scenarios {
        if name != BASELINE_SCENARIO {
            all_scenarios.insert(name.clone(), weights.clone());
        }
    }

    let mut scenarios = BTreeMap::new();
    scenarios.insert(
        BASELINE_SCENARIO.to_string(),
        ScenarioOutcome {
            final_score: baseline_score,
            grade: baseline.grade,
            weights: default_weights(),
        },
    );

    let mut variations = BTreeMap::new();
    for (name, weights) in all_scenarios {
        let result = calculate_score(candidate, &weights);
        if !result.success {
            continue;
        }
        let score_change = round2(result.final_score - baseline_score);
        let percentage_change = if baseline_score == 0.0 {
            0.0
        } else {
            round2((result.final_score - baseline_score) / baseline_score * 100.0)
        };
        variations.insert(
            name.clone(),
            ScoreVariation {
                score_change,
                percentage_change,
            },
        );
        scenarios.insert(
            name,
            ScenarioOutcome {
                final_score: result.final_score,
                grade: result.grade,
                weights,
            },
        );
    }

    let most_sensitive_to = variations
        .iter()
        .fold(None::<(&String, f64)>, |best, (name, variation)| {
            let magnitude = variation.score_change.abs();
            match best {
                Some((_, best_magnitude)) if best_magnitude >= magnitude => best,
                _ => Some((name, magnitude)),
            }
        })
        .map(|(name, _)| name.clone());

    SensitivityResult {
        success: true,
        baseline_scenario: BASELINE_SCENARIO.to_string(),
        baseline_score,
        scenarios,
        variations,
        most_sensitive_to,
        error: None,
    }
}

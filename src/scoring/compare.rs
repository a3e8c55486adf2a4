use serde::Serialize;

use crate::candidate::Candidate;

use super::engine::{calculate_score, round2, ScoreResult};
use super::weights::WeightProfile;

/// One candidate's position in a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    /// 1-based; ties keep input order
    pub rank: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(flatten)]
    pub result: ScoreResult,
}

/// A candidate excluded from ranking because its score calculation failed.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedCandidate {
    pub label: String,
    pub error: String,
}

/// Summary statistics over the ranked final scores.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonStatistics {
    pub average_score: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
    pub score_range: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub rankings: Vec<RankedCandidate>,
    /// None when no candidate scored successfully
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ComparisonStatistics>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedCandidate>,
}

/// Rank multiple candidates under one weight profile.
///
/// Failed scores are reported in `skipped` and excluded from ranking and
/// statistics. An empty candidate list yields an empty ranking, not an
/// error.
pub fn compare_candidates(candidates: &[Candidate], weights: &WeightProfile) -> ComparisonResult {
    let mut ranked = Vec::new();
    let mut skipped = Vec::new();

    for candidate in candidates {
        let result = calculate_score(candidate, weights);
        if result.success {
            ranked.push(RankedCandidate {
                rank: 0,
                id: candidate.id.clone(),
                address: candidate.address.clone(),
                result,
            });
        } else {
            skipped.push(SkippedCandidate {
                label: candidate.label().to_string(),
                error: result
                    .error
                    .unwrap_or_else(|| "score calculation failed".to_string()),
            });
        }
    }

    // Stable sort: ties keep input order.
    ranked.sort_by(|a, b| {
        b.result
            .final_score
            .partial_cmp(&a.result.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (i, entry) in ranked.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    let statistics = if ranked.is_empty() {
        None
    } else {
        let scores: Vec<f64> = ranked.iter().map(|r| r.result.final_score).collect();
        let sum: f64 = scores.iter().sum();
        let highest = scores.iter().cloned().fold(f64::MIN, f64::max);
        let lowest = scores.iter().cloned().fold(f64::MAX, f64::min);
        Some(ComparisonStatistics {
            average_score: round2(sum / scores.len() as f64),
            highest_score: highest,
            lowest_score: lowest,
            score_range: round2(highest - lowest),
        })
    };

    ComparisonResult {
        rankings: ranked,
        statistics,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::AttributeValue;
    use crate::scoring::weights::default_weights;
    use std::collections::BTreeMap;

    fn candidate(id: &str, land_area: f64, disaster_count: f64) -> Candidate {
        let mut attributes = BTreeMap::new();
        attributes.insert("land_area".to_string(), AttributeValue::Number(land_area));
        attributes.insert(
            "disaster_count".to_string(),
            AttributeValue::Number(disaster_count),
        );
        Candidate {
            id: Some(id.to_string()),
            address: None,
            attributes,
        }
    }

    #[test]
    fn test_rankings_sorted_descending() {
        let candidates = vec![
            candidate("low", 5000.0, 15.0),
            candidate("high", 40000.0, 0.0),
            candidate("mid", 20000.0, 5.0),
        ];
        let result = compare_candidates(&candidates, &default_weights());

        assert_eq!(result.rankings.len(), 3);
        assert_eq!(result.rankings[0].id.as_deref(), Some("high"));
        assert_eq!(result.rankings[2].id.as_deref(), Some("low"));
        for window in result.rankings.windows(2) {
            assert!(window[0].result.final_score >= window[1].result.final_score);
        }
    }

    #[test]
    fn test_ranks_are_one_based_and_increasing() {
        let candidates = vec![
            candidate("a", 5000.0, 15.0),
            candidate("b", 40000.0, 0.0),
        ];
        let result = compare_candidates(&candidates, &default_weights());
        let ranks: Vec<usize> = result.rankings.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = vec![
            candidate("first", 20000.0, 5.0),
            candidate("second", 20000.0, 5.0),
        ];
        let result = compare_candidates(&candidates, &default_weights());
        assert_eq!(result.rankings[0].id.as_deref(), Some("first"));
        assert_eq!(result.rankings[1].id.as_deref(), Some("second"));
    }

    #[test]
    fn test_statistics_are_consistent() {
        let candidates = vec![
            candidate("a", 5000.0, 15.0),
            candidate("b", 40000.0, 0.0),
            candidate("c", 20000.0, 5.0),
        ];
        let result = compare_candidates(&candidates, &default_weights());
        let stats = result.statistics.unwrap();

        assert!(stats.highest_score >= stats.average_score);
        assert!(stats.average_score >= stats.lowest_score);
        assert_eq!(
            stats.score_range,
            super::round2(stats.highest_score - stats.lowest_score)
        );
        assert_eq!(stats.highest_score, result.rankings[0].result.final_score);
    }

    #[test]
    fn test_empty_candidate_list() {
        let result = compare_candidates(&[], &default_weights());
        assert!(result.rankings.is_empty());
        assert!(result.statistics.is_none());
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_single_candidate_statistics() {
        let candidates = vec![candidate("only", 20000.0, 5.0)];
        let result = compare_candidates(&candidates, &default_weights());
        let stats = result.statistics.unwrap();
        assert_eq!(stats.highest_score, stats.lowest_score);
        assert_eq!(stats.score_range, 0.0);
        assert_eq!(stats.average_score, stats.highest_score);
    }
}

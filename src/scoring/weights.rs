use std::collections::BTreeMap;

/// Per-attribute weights. Weights are percentages by convention but any
/// non-negative values work; the aggregator normalizes by the total weight
/// actually applied.
pub type WeightProfile = BTreeMap<String, f64>;

/// Scenario name used as the sensitivity baseline.
pub const BASELINE_SCENARIO: &str = "default";

fn profile(entries: &[(&str, f64)]) -> WeightProfile {
    entries
        .iter()
        .map(|(key, weight)| (key.to_string(), *weight))
        .collect()
}

/// Default manufacturing-site weights, summing to 100.
///
/// Priorities: acquisition/operating cost (45) over siting and
/// infrastructure (40) over stability and policy (10), with the remainder
/// on population fit.
pub fn default_weights() -> WeightProfile {
    profile(&[
        ("land_price", 25.0),
        ("electricity_rate", 20.0),
        ("zone_type", 15.0),
        ("land_area", 10.0),
        ("substation_density", 8.0),
        ("transmission_density", 7.0),
        ("population_density", 5.0),
        ("disaster_count", 5.0),
        ("policy_support", 5.0),
    ])
}

/// Built-in sensitivity scenarios, each a full weight profile.
pub fn builtin_scenarios() -> BTreeMap<String, WeightProfile> {
    let mut scenarios = BTreeMap::new();
    scenarios.insert(
        "cost_focus".to_string(),
        profile(&[
            ("land_price", 35.0),
            ("electricity_rate", 25.0),
            ("zone_type", 10.0),
            ("land_area", 5.0),
            ("substation_density", 8.0),
            ("transmission_density", 7.0),
            ("population_density", 5.0),
            ("disaster_count", 3.0),
            ("policy_support", 2.0),
        ]),
    );
    scenarios.insert(
        "infrastructure_focus".to_string(),
        profile(&[
            ("land_price", 20.0),
            ("electricity_rate", 15.0),
            ("zone_type", 15.0),
            ("land_area", 10.0),
            ("substation_density", 15.0),
            ("transmission_density", 12.0),
            ("population_density", 8.0),
            ("disaster_count", 3.0),
            ("policy_support", 2.0),
        ]),
    );
    scenarios.insert(
        "stability_focus".to_string(),
        profile(&[
            ("land_price", 20.0),
            ("electricity_rate", 15.0),
            ("zone_type", 20.0),
            ("land_area", 10.0),
            ("substation_density", 5.0),
            ("transmission_density", 5.0),
            ("population_density", 5.0),
            ("disaster_count", 10.0),
            ("policy_support", 10.0),
        ]),
    );
    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_100() {
        let total: f64 = default_weights().values().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_weights_cover_all_standards() {
        let weights = default_weights();
        for standard in crate::scoring::standards::STANDARDS {
            assert!(weights.contains_key(standard.key), "missing {}", standard.key);
        }
        assert_eq!(weights.len(), crate::scoring::standards::STANDARDS.len());
    }

    #[test]
    fn test_builtin_scenarios_sum_to_100() {
        for (name, weights) in builtin_scenarios() {
            let total: f64 = weights.values().sum();
            assert!((total - 100.0).abs() < 1e-9, "{} sums to {}", name, total);
        }
    }

    #[test]
    fn test_builtin_scenarios_exclude_baseline() {
        assert!(!builtin_scenarios().contains_key(BASELINE_SCENARIO));
    }

    #[test]
    fn test_cost_focus_prioritizes_price() {
        let scenarios = builtin_scenarios();
        let cost = &scenarios["cost_focus"];
        assert_eq!(cost["land_price"], 35.0);
        assert_eq!(cost["electricity_rate"], 25.0);
    }
}

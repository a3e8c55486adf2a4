use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scoring::WeightProfile;

/// Top-level configuration.
///
/// Example YAML:
/// ```yaml
/// weights:
///   land_price: 25
///   electricity_rate: 20
///   zone_type: 15
/// scenarios:
///   coastal:
///     land_price: 30
///     disaster_count: 15
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Active weight profile; omitted means the built-in defaults
    #[serde(default)]
    pub weights: Option<WeightProfile>,

    /// Named weight profiles selectable with --profile and added to
    /// sensitivity analysis
    #[serde(default)]
    pub scenarios: Option<BTreeMap<String, WeightProfile>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.weights.is_none());
        assert!(config.scenarios.is_none());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
weights:
  land_price: 30
  electricity_rate: 25
scenarios:
  coastal:
    land_price: 20
    disaster_count: 15
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();

        let weights = config.weights.unwrap();
        assert_eq!(weights["land_price"], 30.0);
        assert_eq!(weights.len(), 2);

        let scenarios = config.scenarios.unwrap();
        assert_eq!(scenarios["coastal"]["disaster_count"], 15.0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("wieghts: {}");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut weights = WeightProfile::new();
        weights.insert("land_price".to_string(), 40.0);
        let config = Config {
            weights: Some(weights),
            scenarios: None,
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}

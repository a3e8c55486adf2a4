use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A raw attribute value as it appears in candidate data.
///
/// Most attributes are numeric (area, price, densities); a few are
/// categorical strings (zoning designation). Untagged so candidate files
/// can write plain scalars.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

impl AttributeValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            AttributeValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Number(_) => None,
            AttributeValue::Text(s) => Some(s),
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

/// One candidate land parcel: optional labels plus a key -> raw value map.
///
/// Supplied externally per request; never mutated during scoring.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Candidate {
    /// Caller-supplied identifier (e.g. a parcel id from the land table)
    #[serde(default)]
    pub id: Option<String>,

    /// Human-readable address or label for display
    #[serde(default)]
    pub address: Option<String>,

    /// Attribute key -> raw value (e.g. land_area: 15000)
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl Candidate {
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Display label: id if present, else address, else a placeholder.
    pub fn label(&self) -> &str {
        self.id
            .as_deref()
            .or(self.address.as_deref())
            .unwrap_or("(unnamed)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_value_as_number() {
        assert_eq!(AttributeValue::Number(3.5).as_number(), Some(3.5));
        assert_eq!(AttributeValue::from("industrial zone").as_number(), None);
    }

    #[test]
    fn test_attribute_value_as_text() {
        assert_eq!(
            AttributeValue::from("industrial zone").as_text(),
            Some("industrial zone")
        );
        assert_eq!(AttributeValue::Number(1.0).as_text(), None);
    }

    #[test]
    fn test_attribute_value_untagged_parse() {
        let v: AttributeValue = serde_saphyr::from_str("15000").unwrap();
        assert_eq!(v, AttributeValue::Number(15000.0));

        let v: AttributeValue = serde_saphyr::from_str("\"industrial zone\"").unwrap();
        assert_eq!(v, AttributeValue::from("industrial zone"));
    }

    #[test]
    fn test_candidate_label_prefers_id() {
        let candidate = Candidate {
            id: Some("lot-7".to_string()),
            address: Some("12 Harbor Rd".to_string()),
            attributes: BTreeMap::new(),
        };
        assert_eq!(candidate.label(), "lot-7");
    }

    #[test]
    fn test_candidate_label_falls_back_to_address() {
        let candidate = Candidate {
            id: None,
            address: Some("12 Harbor Rd".to_string()),
            attributes: BTreeMap::new(),
        };
        assert_eq!(candidate.label(), "12 Harbor Rd");
    }

    #[test]
    fn test_candidate_label_unnamed() {
        let candidate = Candidate {
            id: None,
            address: None,
            attributes: BTreeMap::new(),
        };
        assert_eq!(candidate.label(), "(unnamed)");
    }

    #[test]
    fn test_candidate_parse_yaml() {
        let yaml = r#"
id: lot-1
attributes:
  land_area: 15000
  zone_type: "industrial zone"
"#;
        let candidate: Candidate = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(candidate.id.as_deref(), Some("lot-1"));
        assert_eq!(
            candidate.get("land_area"),
            Some(&AttributeValue::Number(15000.0))
        );
        assert_eq!(
            candidate.get("zone_type"),
            Some(&AttributeValue::from("industrial zone"))
        );
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentScore {
    pub name: String,
    #[serde(default)]
    pub confidence: f64,
}

/// One extracted entity value. Ambiguous date/time parses carry their
/// alternatives in `values`; the first candidate is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityValue {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub values: Vec<EntityCandidate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityCandidate {
    #[serde(default)]
    pub value: Option<String>,
}

impl EntityValue {
    /// The usable text of this entity, if any.
    pub fn text(&self) -> Option<&str> {
        self.value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                self.values
                    .first()
                    .and_then(|c| c.value.as_deref())
                    .filter(|v| !v.trim().is_empty())
            })
    }
}

/// Classifier output for one user message: intents ordered by descending
/// confidence, entities keyed by the classifier's entity keys. The same
/// semantic entity has shipped under different keys across app versions, so
/// consumers look slots up through alias chains rather than single keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierResult {
    #[serde(default)]
    pub intents: Vec<IntentScore>,
    #[serde(default)]
    pub entities: HashMap<String, Vec<EntityValue>>,
}

impl ClassifierResult {
    pub fn top_intent(&self) -> Option<&str> {
        self.intents.first().map(|i| i.name.as_str())
    }

    pub fn top_confidence(&self) -> f64 {
        self.intents.first().map(|i| i.confidence).unwrap_or(0.0)
    }

    /// First non-empty value for any of the given entity keys, tried in order.
    pub fn entity_for(&self, keys: &[String]) -> Option<String> {
        keys.iter().find_map(|key| {
            self.entities
                .get(key)?
                .iter()
                .find_map(|e| e.text())
                .map(|s| s.trim().to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classifier_payload() {
        let json = r#"{
            "text": "yarın Acıbadem için randevu",
            "intents": [
                {"id": "1", "name": "randevu_al", "confidence": 0.93},
                {"id": "2", "name": "selamlama", "confidence": 0.12}
            ],
            "entities": {
                "hastane:hastane": [{"value": "Acıbadem", "confidence": 0.99}],
                "wit$datetime:datetime": [
                    {"values": [{"value": "2025-06-15T14:00:00"}, {"value": "2025-06-16T14:00:00"}]}
                ]
            }
        }"#;

        let result: ClassifierResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.top_intent(), Some("randevu_al"));
        assert!(result.top_confidence() > 0.9);
        assert_eq!(
            result.entity_for(&["hastane:hastane".to_string()]),
            Some("Acıbadem".to_string())
        );
        // Ambiguous datetime resolves to the first candidate
        assert_eq!(
            result.entity_for(&["wit$datetime:datetime".to_string()]),
            Some("2025-06-15T14:00:00".to_string())
        );
    }

    #[test]
    fn test_empty_payload_defaults() {
        let result: ClassifierResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.top_intent(), None);
        assert_eq!(result.top_confidence(), 0.0);
    }

    #[test]
    fn test_alias_chain_order() {
        let json = r#"{
            "entities": {
                "hastane": [{"value": "Memorial"}],
                "hastane:hastane": [{"value": "Acıbadem"}]
            }
        }"#;
        let result: ClassifierResult = serde_json::from_str(json).unwrap();

        let keys = vec!["hastane".to_string(), "hastane:hastane".to_string()];
        assert_eq!(result.entity_for(&keys), Some("Memorial".to_string()));

        let reversed = vec!["hastane:hastane".to_string(), "hastane".to_string()];
        assert_eq!(result.entity_for(&reversed), Some("Acıbadem".to_string()));
    }

    #[test]
    fn test_blank_value_falls_through() {
        let json = r#"{
            "entities": {
                "bolum": [{"value": "  "}],
                "bolum:bolum": [{"value": "Kardiyoloji"}]
            }
        }"#;
        let result: ClassifierResult = serde_json::from_str(json).unwrap();

        let keys = vec!["bolum".to_string(), "bolum:bolum".to_string()];
        assert_eq!(result.entity_for(&keys), Some("Kardiyoloji".to_string()));
    }
}

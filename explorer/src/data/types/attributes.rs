//! Telemetry attribute values
//!
//! Span `attributes` and `resource` bags arrive as arbitrary JSON objects.
//! They are modelled as a closed variant type instead of raw JSON so that
//! lookups in the renderer stay typed.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Key-ordered attribute bag
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<AttributeValue>),
    Map(AttributeMap),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value would read as "present" in a chip (non-empty, non-zero)
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Self::String(s) => !s.is_empty(),
            Self::List(_) | Self::Map(_) => true,
        }
    }

    /// Convert back to JSON for pretty printing
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => serde_json::Value::Number(n.clone()),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::List(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Map(map) => map_to_json(map),
        }
    }
}

/// Chip label form: strings verbatim, everything else as compact JSON
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Null => f.write_str("null"),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

/// Convert an attribute bag to a JSON object
pub fn map_to_json(map: &AttributeMap) -> serde_json::Value {
    serde_json::Value::Object(
        map.iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_mixed_bag() {
        let value = json!({
            "s": "text",
            "n": 42,
            "f": 0.5,
            "b": true,
            "z": null,
            "l": [1, "two"],
            "m": { "inner": "x" }
        });
        let map: AttributeMap = serde_json::from_value(value).unwrap();

        assert_eq!(map["s"], AttributeValue::String("text".to_string()));
        assert!(matches!(map["n"], AttributeValue::Number(_)));
        assert_eq!(map["b"], AttributeValue::Bool(true));
        assert_eq!(map["z"], AttributeValue::Null);
        assert!(matches!(&map["l"], AttributeValue::List(items) if items.len() == 2));
        match &map["m"] {
            AttributeValue::Map(inner) => {
                assert_eq!(inner["inner"].as_str(), Some("x"));
            }
            other => panic!("expected map, got {:?}", other),
        }
    }

    #[test]
    fn test_truthiness() {
        assert!(!AttributeValue::Null.is_truthy());
        assert!(!AttributeValue::String(String::new()).is_truthy());
        assert!(AttributeValue::String("gpt-4".to_string()).is_truthy());
        assert!(!AttributeValue::Number(0.into()).is_truthy());
        assert!(AttributeValue::Number(12.into()).is_truthy());
        assert!(!AttributeValue::Bool(false).is_truthy());
    }

    #[test]
    fn test_display() {
        assert_eq!(AttributeValue::String("abc".to_string()).to_string(), "abc");
        assert_eq!(AttributeValue::Number(150.into()).to_string(), "150");
        let list = AttributeValue::List(vec![AttributeValue::Bool(true)]);
        assert_eq!(list.to_string(), "[true]");
    }

    #[test]
    fn test_map_to_json_is_key_ordered() {
        let mut map = AttributeMap::new();
        map.insert("b".to_string(), AttributeValue::Number(2.into()));
        map.insert("a".to_string(), AttributeValue::Number(1.into()));
        let json = map_to_json(&map);
        assert_eq!(json.to_string(), r#"{"a":1,"b":2}"#);
    }
}

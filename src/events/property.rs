//! Property value types carried by CDC snapshots
//!
//! Values arrive as plain JSON from the event source, so the enum is
//! untagged: `1` is an Integer, `1.5` a Float, `null` is Null.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Property value supporting the scalar and collection types a property
/// graph stores on nodes and relationships
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<PropertyValue>),
    Map(HashMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

// Convenience conversions
impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<&PropertyValue> for serde_json::Value {
    fn from(value: &PropertyValue) -> Self {
        match value {
            PropertyValue::Null => serde_json::Value::Null,
            PropertyValue::Boolean(b) => serde_json::Value::Bool(*b),
            PropertyValue::Integer(i) => serde_json::Value::from(*i),
            PropertyValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            PropertyValue::String(s) => serde_json::Value::String(s.clone()),
            PropertyValue::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            PropertyValue::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Property map for node and relationship snapshots
pub type PropertyMap = HashMap<String, PropertyValue>;

/// Render a property map as a JSON object for use in statement parameters
pub fn to_json_object(properties: &PropertyMap) -> serde_json::Value {
    serde_json::Value::Object(
        properties
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_wire_format() {
        let props: PropertyMap = serde_json::from_str(
            r#"{"name": "Alice", "age": 30, "score": 1.5, "active": true, "nickname": null}"#,
        )
        .unwrap();

        assert_eq!(props["name"], PropertyValue::String("Alice".to_string()));
        assert_eq!(props["age"], PropertyValue::Integer(30));
        assert_eq!(props["score"], PropertyValue::Float(1.5));
        assert_eq!(props["active"], PropertyValue::Boolean(true));
        assert!(props["nickname"].is_null());
    }

    #[test]
    fn test_to_json_object() {
        let mut props = PropertyMap::new();
        props.insert("name".to_string(), "Alice".into());
        props.insert("age".to_string(), 30i64.into());
        props.insert(
            "skills".to_string(),
            PropertyValue::Array(vec!["Rust".into(), "Go".into()]),
        );

        let json = to_json_object(&props);
        assert_eq!(json["name"], serde_json::json!("Alice"));
        assert_eq!(json["age"], serde_json::json!(30));
        assert_eq!(json["skills"], serde_json::json!(["Rust", "Go"]));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(PropertyValue::from("x").as_string(), Some("x"));
        assert_eq!(PropertyValue::from(7i64).as_integer(), Some(7));
        assert_eq!(PropertyValue::from(7i64).as_string(), None);
    }
}

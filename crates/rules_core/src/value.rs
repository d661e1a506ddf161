//! Value representation for records and expected values.
//!
//! Records are open mappings whose values can be any JSON-like data, and
//! rules carry expected values of the same shape. Both use [`DataValue`].

use crate::Pattern;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A record under validation: field name to value.
///
/// A field counts as present when its key is in the map, even if the value
/// is [`DataValue::Null`].
pub type Record = BTreeMap<String, DataValue>;

/// A value in a record or in a rule's expected parameter.
///
/// `Null` stands for both an explicit null and an undefined value; the
/// transports rules travel over have no separate notion of undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum DataValue {
    /// Null/undefined value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
    /// List/array value
    List(Vec<DataValue>),
    /// Map/struct value
    Map(BTreeMap<String, DataValue>),
    /// Compiled pattern, only meaningful as an expected value
    Pattern(Pattern),
}

impl DataValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::Bool(_) => "boolean",
            DataValue::Int(_) => "int64",
            DataValue::Float(_) => "float64",
            DataValue::String(_) => "string",
            DataValue::List(_) => "list",
            DataValue::Map(_) => "map",
            DataValue::Pattern(_) => "pattern",
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DataValue::Float(f) => Some(*f),
            DataValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Attempts to get this value as a list.
    pub fn as_list(&self) -> Option<&[DataValue]> {
        match self {
            DataValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to get this value as a map.
    pub fn as_map(&self) -> Option<&BTreeMap<String, DataValue>> {
        match self {
            DataValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for DataValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => DataValue::Null,
            serde_json::Value::Bool(b) => DataValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => DataValue::Int(i),
                None => DataValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => DataValue::String(s),
            serde_json::Value::Array(items) => {
                DataValue::List(items.into_iter().map(DataValue::from).collect())
            }
            serde_json::Value::Object(map) => DataValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, DataValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<DataValue> for serde_json::Value {
    fn from(value: DataValue) -> Self {
        match value {
            DataValue::Null => serde_json::Value::Null,
            DataValue::Bool(b) => serde_json::Value::Bool(b),
            DataValue::Int(i) => serde_json::Value::from(i),
            // Non-finite floats have no JSON form and serialize as null
            DataValue::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            DataValue::String(s) => serde_json::Value::String(s),
            DataValue::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            DataValue::Map(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
            DataValue::Pattern(p) => serde_json::Value::String(p.source().to_string()),
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<i32> for DataValue {
    fn from(i: i32) -> Self {
        DataValue::Int(i64::from(i))
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Float(f)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

impl From<Pattern> for DataValue {
    fn from(p: Pattern) -> Self {
        DataValue::Pattern(p)
    }
}

impl<T: Into<DataValue>> From<Vec<T>> for DataValue {
    fn from(items: Vec<T>) -> Self {
        DataValue::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_data_value_types() {
        assert_eq!(DataValue::Null.type_name(), "null");
        assert_eq!(DataValue::String("test".into()).type_name(), "string");
        assert_eq!(DataValue::Int(42).type_name(), "int64");
        assert_eq!(DataValue::Float(3.5).type_name(), "float64");
        assert_eq!(DataValue::Bool(true).type_name(), "boolean");
        assert_eq!(DataValue::from(vec![1, 2]).type_name(), "list");
    }

    #[test]
    fn test_accessors() {
        assert!(DataValue::Null.is_null());
        assert!(!DataValue::from("").is_null());
        assert_eq!(DataValue::from("x").as_string(), Some("x"));
        assert_eq!(DataValue::Int(1).as_string(), None);
        assert!(DataValue::Map(BTreeMap::new()).as_map().is_some());
    }

    #[test]
    fn test_from_json() {
        let value = DataValue::from(json!({
            "age": 42,
            "ratio": 0.5,
            "tags": ["a", null],
        }));

        let map = value.as_map().unwrap();
        assert_eq!(map.get("age"), Some(&DataValue::Int(42)));
        assert_eq!(map.get("ratio"), Some(&DataValue::Float(0.5)));
        assert_eq!(
            map.get("tags"),
            Some(&DataValue::List(vec![DataValue::from("a"), DataValue::Null]))
        );
    }

    #[test]
    fn test_deserialize_and_serialize() {
        let value: DataValue = serde_json::from_str(r#"[1, "two", {"three": false}]"#).unwrap();
        assert_eq!(value.as_list().map(<[DataValue]>::len), Some(3));

        let pattern = Pattern::parse_literal("/^a$/i").unwrap();
        let text = serde_json::to_string(&DataValue::Pattern(pattern)).unwrap();
        assert_eq!(text, r#""/^a$/i""#);
    }
}

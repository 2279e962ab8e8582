//! Call-time variables.
//!
//! Any name, any JSON-like value. Names referenced by the template are the
//! renderer's business; extra entries are carried along untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::DomainError;

/// Named values supplied to a single render call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables(BTreeMap<String, Value>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a value, returning the previous one under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Overlay `other` on top of `self`; entries in `other` win.
    pub fn merge(mut self, other: Variables) -> Self {
        if self.is_empty() {
            return other;
        }
        self.0.extend(other.0);
        self
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Map<String, Value>> for Variables {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl TryFrom<Value> for Variables {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into()),
            other => Err(DomainError::InvalidVariables(format!(
                "expected an object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_accepts_mixed_value_types() {
        let vars = Variables::new()
            .with("name", "spanish")
            .with("count", 3)
            .with("flag", true)
            .with("items", json!(["a", "b"]));

        assert_eq!(vars.len(), 4);
        assert_eq!(vars.get("count"), Some(&json!(3)));
        assert!(vars.contains("items"));
    }

    #[test]
    fn try_from_object() {
        let vars = Variables::try_from(json!({ "a": 1, "b": "two" })).unwrap();
        assert_eq!(vars.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn try_from_non_object_is_error() {
        let err = Variables::try_from(json!([1, 2])).unwrap_err();
        assert!(matches!(err, DomainError::InvalidVariables(msg) if msg.contains("an array")));
    }

    #[test]
    fn merge_prefers_right_hand_side() {
        let base = Variables::new().with("a", "base").with("b", "kept");
        let merged = base.merge(Variables::new().with("a", "override"));

        assert_eq!(merged.get("a"), Some(&json!("override")));
        assert_eq!(merged.get("b"), Some(&json!("kept")));
    }

    #[test]
    fn merge_into_empty_takes_other() {
        let merged = Variables::new().merge(Variables::new().with("a", 1));
        assert_eq!(merged.len(), 1);
        assert!(Variables::new().merge(Variables::new()).is_empty());
    }

    #[test]
    fn serializes_as_flat_object() {
        let vars: Variables = [("x", 1)].into_iter().collect();
        assert_eq!(serde_json::to_value(&vars).unwrap(), json!({ "x": 1 }));
    }
}

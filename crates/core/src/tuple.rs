//! Untyped tuples
//!
//! A [`Tuple`] is the raw record kept by a tuple store: a map from attribute
//! name to [`Value`] with no schema. Schemas only appear when a mapper
//! selects a fixed attribute set out of a tuple.

use crate::error::{StoreError, StoreResult};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the generated identifier attribute shared by every relation
pub const ID_ATTRIBUTE: &str = "id";

/// An untyped key-to-value record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuple {
    attributes: HashMap<String, Value>,
}

impl Tuple {
    /// Create an empty tuple
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute assignment
    ///
    /// ```
    /// use bucketdb_core::{Tuple, Value};
    ///
    /// let t = Tuple::new().with("email", "ann@example.com");
    /// assert_eq!(t.get("email"), Some(&Value::from("ann@example.com")));
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Build a tuple from a JSON object
    ///
    /// Anything other than an object is rejected with `InvalidInput`.
    pub fn from_json(json: serde_json::Value) -> StoreResult<Self> {
        match json {
            serde_json::Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect()),
            other => Err(StoreError::invalid_input(format!(
                "tuple data must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Convert into a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.to_json()))
                .collect(),
        )
    }

    /// Set an attribute, returning the previous value if any
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Get an attribute
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Get an attribute as a string slice
    ///
    /// Returns `None` when absent or not a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// The generated identifier, if this tuple has been stored
    pub fn id(&self) -> Option<&str> {
        self.get_str(ID_ATTRIBUTE)
    }

    /// Merge another tuple into this one; `other` wins on conflicts
    pub fn merge(mut self, other: Tuple) -> Self {
        self.attributes.extend(other.attributes);
        self
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if the tuple has no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate over attribute names and values (unordered)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Tuple {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, Value>> for Tuple {
    fn from(attributes: HashMap<String, Value>) -> Self {
        Self { attributes }
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

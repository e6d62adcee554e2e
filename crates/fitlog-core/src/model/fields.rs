use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::FitlogError;

/// Free-form JSON fields for records without a fixed schema
///
/// Keys are kept sorted so serialized output is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Fields {
    data: BTreeMap<String, serde_json::Value>,
}

impl Fields {
    /// Create a new empty Fields instance
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Set a value by key
    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    /// Builder-style `set`
    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.set(key, value);
        self
    }

    /// Remove a value by key
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.data.remove(key)
    }

    /// Check if a key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Iterate over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.data.iter()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Parse a `key=value` assignment
    ///
    /// The value is read as JSON when it parses (`true`, `3`, `"x"`, `[1]`),
    /// otherwise it is kept as a plain string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidField` when there is no `=` or the key is blank.
    pub fn parse_assignment(input: &str) -> Result<(String, serde_json::Value), FitlogError> {
        let (key, raw) = input
            .split_once('=')
            .ok_or_else(|| FitlogError::invalid_field(input, "expected key=value"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(FitlogError::invalid_field(input, "key cannot be empty"));
        }
        let value = serde_json::from_str(raw)
            .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
        Ok((key.to_string(), value))
    }
}

impl From<BTreeMap<String, serde_json::Value>> for Fields {
    fn from(data: BTreeMap<String, serde_json::Value>) -> Self {
        Self { data }
    }
}

impl IntoIterator for Fields {
    type Item = (String, serde_json::Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, serde_json::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

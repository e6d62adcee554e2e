//! Record identifiers
//!
//! Every record in every collection carries a `RecordId`. New ids are UUIDv7
//! strings, which stay unique across rapid successive calls within the same
//! millisecond. Older persisted data may carry plain numeric ids; those are
//! accepted on deserialization and kept as their decimal string.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Unique identifier of a record within its collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a new RecordId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for lookups and deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecordId {
    Text(String),
    Integer(u64),
    Float(f64),
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawRecordId::deserialize(deserializer)? {
            RawRecordId::Text(s) => Self(s),
            RawRecordId::Integer(n) => Self(n.to_string()),
            RawRecordId::Float(f) => Self(f.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_generation() {
        let id1 = RecordId::new();
        let id2 = RecordId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_record_id_display() {
        let id = RecordId::new();
        assert_eq!(format!("{}", id), id.as_str());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = RecordId::from("abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");

        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_numeric_id_accepted() {
        let id: RecordId = serde_json::from_str("1700000000000").unwrap();
        assert_eq!(id.as_str(), "1700000000000");
    }

    #[test]
    fn test_rapid_generation_is_unique() {
        let ids: std::collections::HashSet<RecordId> = (0..1000).map(|_| RecordId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }
}

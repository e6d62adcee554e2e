use chrono::{DateTime, Utc};
use fitlog_core_types::RecordId;
use serde::{Deserialize, Serialize};

use super::fields::Fields;

/// Keys owned by the store; callers cannot set them through fields
pub const RESERVED_KEYS: [&str; 2] = ["id", "createdAt"];

/// A reminder with free-form fields
///
/// Only `id` and `createdAt` are fixed; every other key is carried as-is and
/// flattened into the same JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,

    #[serde(flatten)]
    pub fields: Fields,
}

impl Reminder {
    pub fn create(id: RecordId, created_at: DateTime<Utc>, fields: Fields) -> Self {
        let mut reminder = Self {
            id,
            created_at,
            fields: Fields::new(),
        };
        reminder.apply(fields);
        reminder
    }

    /// Shallow-merge fields into this reminder, ignoring reserved keys
    pub fn apply(&mut self, patch: Fields) {
        for (key, value) in patch {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            self.fields.set(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reserved_keys_ignored() {
        let fields = Fields::new()
            .with("id", json!("spoofed"))
            .with("createdAt", json!("1999-01-01T00:00:00Z"))
            .with("title", json!("Drink water"));
        let reminder = Reminder::create(RecordId::from("r-1"), Utc::now(), fields);

        assert_eq!(reminder.id.as_str(), "r-1");
        assert!(!reminder.fields.contains_key("id"));
        assert_eq!(reminder.fields.get("title"), Some(&json!("Drink water")));
    }

    #[test]
    fn test_flattened_json_round_trip() {
        let reminder = Reminder::create(
            RecordId::from("r-1"),
            Utc::now(),
            Fields::new().with("time", json!("07:30")).with("enabled", json!(true)),
        );

        let value = serde_json::to_value(&reminder).unwrap();
        assert_eq!(value["time"], json!("07:30"));
        assert_eq!(value["id"], json!("r-1"));

        let back: Reminder = serde_json::from_value(value).unwrap();
        assert_eq!(back, reminder);
    }
}

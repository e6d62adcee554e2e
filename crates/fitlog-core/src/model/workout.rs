use chrono::{DateTime, NaiveDate, Utc};
use fitlog_core_types::RecordId;
use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// A logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique identifier (UUID v7)
    pub id: RecordId,

    /// Calendar day the workout was logged on
    pub date: NaiveDate,

    /// Creation instant
    pub timestamp: DateTime<Utc>,

    /// Workout type, e.g. "Running"
    #[serde(rename = "type")]
    pub kind: String,

    /// Duration in minutes
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: u32,

    /// Calories burned
    #[serde(default, deserialize_with = "null_as_default")]
    pub calories: u32,

    #[serde(default)]
    pub notes: String,
}

/// Caller-supplied fields for a new workout
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewWorkout {
    pub kind: String,
    pub duration: u32,
    pub calories: u32,
    pub notes: String,
}

impl NewWorkout {
    pub fn new(kind: impl Into<String>, duration: u32, calories: u32) -> Self {
        Self {
            kind: kind.into(),
            duration,
            calories,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Partial update for a workout; `None` fields are left untouched
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkoutPatch {
    pub date: Option<NaiveDate>,
    pub kind: Option<String>,
    pub duration: Option<u32>,
    pub calories: Option<u32>,
    pub notes: Option<String>,
}

impl WorkoutPatch {
    /// Check if the patch names no fields
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Workout {
    /// Build a workout from caller fields plus the assigned id and creation stamp
    pub fn create(
        id: RecordId,
        date: NaiveDate,
        timestamp: DateTime<Utc>,
        fields: NewWorkout,
    ) -> Self {
        Self {
            id,
            date,
            timestamp,
            kind: fields.kind,
            duration: fields.duration,
            calories: fields.calories,
            notes: fields.notes,
        }
    }

    /// Shallow-merge a patch into this workout
    pub fn apply(&mut self, patch: WorkoutPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(calories) = patch.calories {
            self.calories = calories;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Workout {
        Workout::create(
            RecordId::from("w-1"),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Utc::now(),
            NewWorkout::new("Running", 30, 250).with_notes("easy pace"),
        )
    }

    #[test]
    fn test_json_shape_uses_type_key() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["type"], json!("Running"));
        assert_eq!(value["date"], json!("2024-03-01"));
        assert_eq!(value["duration"], json!(30));
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_apply_preserves_unspecified_fields() {
        let mut workout = sample();
        workout.apply(WorkoutPatch {
            duration: Some(45),
            ..Default::default()
        });

        assert_eq!(workout.duration, 45);
        assert_eq!(workout.kind, "Running");
        assert_eq!(workout.calories, 250);
        assert_eq!(workout.notes, "easy pace");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let workout: Workout = serde_json::from_value(json!({
            "id": 1700000000000u64,
            "date": "2024-03-01",
            "timestamp": "2024-03-01T08:00:00Z",
            "type": "Yoga"
        }))
        .unwrap();

        assert_eq!(workout.id.as_str(), "1700000000000");
        assert_eq!(workout.calories, 0);
        assert!(workout.notes.is_empty());
    }
}

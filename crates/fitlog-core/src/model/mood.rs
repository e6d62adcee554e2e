use chrono::{DateTime, NaiveDate, Utc};
use fitlog_core_types::RecordId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A mood check-in; append-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: RecordId,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,

    /// Mood on a 1-10 scale
    pub mood: u8,

    #[serde(default)]
    pub note: String,

    /// Contributing factor tags, e.g. "sleep", "exercise"
    #[serde(default)]
    pub factors: BTreeSet<String>,
}

/// Caller-supplied fields for a new mood entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewMoodEntry {
    pub mood: u8,
    pub note: String,
    pub factors: BTreeSet<String>,
}

impl NewMoodEntry {
    pub fn new(mood: u8) -> Self {
        Self {
            mood,
            ..Default::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_factor(mut self, factor: impl Into<String>) -> Self {
        self.factors.insert(factor.into());
        self
    }
}

impl MoodEntry {
    pub fn create(
        id: RecordId,
        date: NaiveDate,
        timestamp: DateTime<Utc>,
        fields: NewMoodEntry,
    ) -> Self {
        Self {
            id,
            date,
            timestamp,
            mood: fields.mood,
            note: fields.note,
            factors: fields.factors,
        }
    }
}

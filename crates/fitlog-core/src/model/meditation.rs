use chrono::{DateTime, NaiveDate, Utc};
use fitlog_core_types::RecordId;
use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// A meditation session; append-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeditationSession {
    pub id: RecordId,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,

    /// Session type, e.g. "mindfulness"
    #[serde(rename = "type")]
    pub kind: String,

    /// Minutes actually meditated
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: u32,

    /// False when the session was stopped before the planned duration
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

/// Caller-supplied fields for a new meditation session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewMeditationSession {
    pub kind: String,
    pub duration: u32,
    pub completed: bool,
}

impl NewMeditationSession {
    pub fn new(kind: impl Into<String>, duration: u32, completed: bool) -> Self {
        Self {
            kind: kind.into(),
            duration,
            completed,
        }
    }

    /// A session stopped early: `remaining_secs` were left of `planned_minutes`
    ///
    /// Elapsed time is rounded up to whole minutes.
    pub fn stopped_early(
        kind: impl Into<String>,
        planned_minutes: u32,
        remaining_secs: u32,
    ) -> Self {
        let elapsed_secs = planned_minutes.saturating_mul(60).saturating_sub(remaining_secs);
        Self {
            kind: kind.into(),
            duration: elapsed_secs.div_ceil(60),
            completed: false,
        }
    }
}

impl MeditationSession {
    pub fn create(
        id: RecordId,
        date: NaiveDate,
        timestamp: DateTime<Utc>,
        fields: NewMeditationSession,
    ) -> Self {
        Self {
            id,
            date,
            timestamp,
            kind: fields.kind,
            duration: fields.duration,
            completed: fields.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_early_rounds_up() {
        let session = NewMeditationSession::stopped_early("breathing", 10, 530);
        assert_eq!(session.duration, 2);
        assert!(!session.completed);
    }

    #[test]
    fn test_stopped_early_with_more_remaining_than_planned() {
        let session = NewMeditationSession::stopped_early("breathing", 1, 600);
        assert_eq!(session.duration, 0);
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use fitlog_core_types::RecordId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::nullable::{finite_or_zero, null_as_default};
use crate::errors::FitlogError;

/// Goal priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Priority {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(FitlogError::invalid_field(
                "priority",
                format!("expected low, medium or high, got '{}'", other),
            )),
        }
    }
}

/// A measurable goal
///
/// `progress` is stored redundantly alongside `current_value` and
/// `target_value`; see [`compute_progress`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: RecordId,

    pub created_at: DateTime<Utc>,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub target_value: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub current_value: f64,

    #[serde(default)]
    pub unit: String,

    #[serde(default, with = "optional_date")]
    pub deadline: Option<NaiveDate>,

    #[serde(default)]
    pub priority: Priority,

    /// Percentage in [0, 100]
    #[serde(default, deserialize_with = "null_as_default")]
    pub progress: f64,
}

/// Caller-supplied fields for a new goal
///
/// `progress` is computed from the values when left as `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub category: String,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
    pub progress: Option<f64>,
}

impl NewGoal {
    pub fn new(title: impl Into<String>, target_value: f64, current_value: f64) -> Self {
        Self {
            title: title.into(),
            target_value,
            current_value,
            ..Default::default()
        }
    }
}

/// Partial update for a goal
///
/// A plain merge: changing `current_value` or `target_value` does not
/// recompute `progress`. Send `progress` alongside, or use
/// `goal_ops::set_goal_value`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
    pub unit: Option<String>,
    /// `Some(None)` clears the deadline
    pub deadline: Option<Option<NaiveDate>>,
    pub priority: Option<Priority>,
    pub progress: Option<f64>,
}

/// Progress percentage for a value against a target, clamped to [0, 100]
///
/// A target that is not a positive number yields 0.
pub fn compute_progress(current_value: f64, target_value: f64) -> f64 {
    if !target_value.is_finite() || target_value <= 0.0 {
        return 0.0;
    }
    clamp_progress(current_value / target_value * 100.0)
}

/// Clamp a caller-supplied progress value to [0, 100], mapping NaN to 0
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 100.0)
    }
}

impl Goal {
    /// Build a goal from caller fields plus the assigned id and creation instant
    ///
    /// Non-finite values are stored as 0.
    pub fn create(id: RecordId, created_at: DateTime<Utc>, fields: NewGoal) -> Self {
        let target_value = finite_or_zero(fields.target_value);
        let current_value = finite_or_zero(fields.current_value);
        let progress = match fields.progress {
            Some(p) => clamp_progress(p),
            None => compute_progress(current_value, target_value),
        };
        Self {
            id,
            created_at,
            title: fields.title,
            description: fields.description,
            category: fields.category,
            target_value,
            current_value,
            unit: fields.unit,
            deadline: fields.deadline,
            priority: fields.priority,
            progress,
        }
    }

    /// Shallow-merge a patch into this goal
    pub fn apply(&mut self, patch: GoalPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(target_value) = patch.target_value {
            self.target_value = finite_or_zero(target_value);
        }
        if let Some(current_value) = patch.current_value {
            self.current_value = finite_or_zero(current_value);
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(progress) = patch.progress {
            self.progress = clamp_progress(progress);
        }
    }

    /// Check if the goal has reached its target
    pub fn is_completed(&self) -> bool {
        self.progress >= 100.0
    }

    /// Check if no progress has been recorded
    pub fn is_not_started(&self) -> bool {
        self.progress == 0.0
    }
}

/// Serde adapter for optional calendar days
///
/// Serializes `None` as `null`; deserializes `null`, a missing field or an
/// empty string as `None`.
mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compute_progress() {
        assert_eq!(compute_progress(5.0, 10.0), 50.0);
        assert_eq!(compute_progress(15.0, 10.0), 100.0);
        assert_eq!(compute_progress(-3.0, 10.0), 0.0);
        assert_eq!(compute_progress(5.0, 0.0), 0.0);
        assert_eq!(compute_progress(5.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_create_computes_missing_progress() {
        let goal = Goal::create(RecordId::from("g-1"), Utc::now(), NewGoal::new("Run", 10.0, 5.0));
        assert_eq!(goal.progress, 50.0);
    }

    #[test]
    fn test_create_clamps_supplied_progress() {
        let fields = NewGoal {
            progress: Some(140.0),
            ..NewGoal::new("Run", 10.0, 5.0)
        };
        let goal = Goal::create(RecordId::from("g-1"), Utc::now(), fields);
        assert_eq!(goal.progress, 100.0);
    }

    #[test]
    fn test_patch_does_not_recompute_progress() {
        let fields = NewGoal::new("Run", 10.0, 5.0);
        let mut goal = Goal::create(RecordId::from("g-1"), Utc::now(), fields);
        goal.apply(GoalPatch {
            current_value: Some(10.0),
            ..Default::default()
        });
        assert_eq!(goal.current_value, 10.0);
        assert_eq!(goal.progress, 50.0);
    }

    #[test]
    fn test_non_finite_values_are_stored_as_zero() {
        let mut goal = Goal::create(
            RecordId::from("g-1"),
            Utc::now(),
            NewGoal::new("Odd", f64::NAN, f64::INFINITY),
        );
        assert_eq!((goal.target_value, goal.current_value, goal.progress), (0.0, 0.0, 0.0));

        goal.apply(GoalPatch {
            target_value: Some(f64::NEG_INFINITY),
            ..Default::default()
        });
        assert_eq!(goal.target_value, 0.0);

        let json = serde_json::to_string(&goal).unwrap();
        assert_eq!(serde_json::from_str::<Goal>(&json).unwrap(), goal);
    }

    #[test]
    fn test_null_numbers_read_as_zero() {
        let goal: Goal = serde_json::from_value(json!({
            "id": 1717171717171u64,
            "createdAt": "2024-05-31T16:08:37.171Z",
            "title": "Bench 100kg",
            "targetValue": 100,
            "currentValue": null,
            "progress": null
        }))
        .unwrap();

        assert_eq!(goal.current_value, 0.0);
        assert_eq!(goal.progress, 0.0);
    }

    #[test]
    fn test_camel_case_json_and_empty_deadline() {
        let goal: Goal = serde_json::from_value(json!({
            "id": 42,
            "createdAt": "2024-01-01T00:00:00Z",
            "title": "Lose weight",
            "targetValue": 5,
            "currentValue": 1,
            "deadline": "",
            "priority": "high",
            "progress": 20
        }))
        .unwrap();

        assert_eq!(goal.deadline, None);
        assert_eq!(goal.priority, Priority::High);
        assert_eq!(goal.target_value, 5.0);

        let value = serde_json::to_value(&goal).unwrap();
        assert!(value.get("targetValue").is_some());
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }
}

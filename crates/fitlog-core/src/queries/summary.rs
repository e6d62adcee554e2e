use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::{MeditationSession, Workout};
use crate::ops::Store;

/// Headline counters shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_workouts: usize,
    pub completed_goals: usize,
    /// Mean mood over every entry; 0 when there are none
    pub average_mood: f64,
    pub total_meditation_minutes: u64,
}

/// Meditation totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeditationSummary {
    pub total_minutes: u64,
    pub completed_sessions: usize,
    pub total_sessions: usize,
}

pub fn dashboard_summary(store: &Store) -> DashboardSummary {
    let moods = store.mood_entries();
    let average_mood = if moods.is_empty() {
        0.0
    } else {
        moods.iter().map(|m| f64::from(m.mood)).sum::<f64>() / moods.len() as f64
    };

    DashboardSummary {
        total_workouts: store.workouts().len(),
        completed_goals: store.goals().iter().filter(|g| g.is_completed()).count(),
        average_mood,
        total_meditation_minutes: meditation_summary(store.meditation_sessions()).total_minutes,
    }
}

pub fn meditation_summary(sessions: &[MeditationSession]) -> MeditationSummary {
    MeditationSummary {
        total_minutes: sessions.iter().map(|s| u64::from(s.duration)).sum(),
        completed_sessions: sessions.iter().filter(|s| s.completed).count(),
        total_sessions: sessions.len(),
    }
}

/// Number of workouts per workout type, ordered by type name
pub fn workout_distribution(workouts: &[Workout]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for workout in workouts {
        *counts.entry(workout.kind.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewGoal, NewMeditationSession, NewMoodEntry, NewWorkout};
    use crate::ops::{goal_ops, meditation_ops, mood_ops, workout_ops};

    #[test]
    fn test_dashboard_summary() {
        let mut store = Store::new();
        workout_ops::add_workout(&mut store, NewWorkout::new("Running", 30, 250));
        workout_ops::add_workout(&mut store, NewWorkout::new("Cycling", 45, 400));
        goal_ops::add_goal(&mut store, NewGoal::new("Done", 10.0, 10.0));
        goal_ops::add_goal(&mut store, NewGoal::new("Half", 10.0, 5.0));
        mood_ops::add_mood_entry(&mut store, NewMoodEntry::new(6));
        mood_ops::add_mood_entry(&mut store, NewMoodEntry::new(9));
        meditation_ops::add_meditation_session(
            &mut store,
            NewMeditationSession::new("mindfulness", 10, true),
        );
        meditation_ops::add_meditation_session(
            &mut store,
            NewMeditationSession::new("breathing", 4, false),
        );

        let summary = dashboard_summary(&store);

        assert_eq!(summary.total_workouts, 2);
        assert_eq!(summary.completed_goals, 1);
        assert!((summary.average_mood - 7.5).abs() < f64::EPSILON);
        assert_eq!(summary.total_meditation_minutes, 14);

        let meditation = meditation_summary(store.meditation_sessions());
        assert_eq!(meditation.completed_sessions, 1);
        assert_eq!(meditation.total_sessions, 2);
    }

    #[test]
    fn test_empty_store_summary() {
        let summary = dashboard_summary(&Store::new());
        assert_eq!(summary.total_workouts, 0);
        assert_eq!(summary.average_mood, 0.0);
    }

    #[test]
    fn test_distribution_ordered_by_type() {
        let mut store = Store::new();
        for kind in ["Yoga", "Running", "Yoga"] {
            workout_ops::add_workout(&mut store, NewWorkout::new(kind, 30, 100));
        }

        let distribution = workout_distribution(store.workouts());

        let pairs: Vec<(&str, usize)> = distribution
            .iter()
            .map(|(kind, count)| (kind.as_str(), *count))
            .collect();
        assert_eq!(pairs, vec![("Running", 1), ("Yoga", 2)]);
    }
}

use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;

use crate::model::Workout;

/// Consecutive days with at least one workout
///
/// Counts back from `today`. If nothing has been logged today yet the streak
/// is still alive and counts back from yesterday. Several workouts on one day
/// count once; workouts dated after `today` are ignored.
pub fn workout_streak(workouts: &[Workout], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = workouts
        .iter()
        .map(|w| w.date)
        .filter(|d| *d <= today)
        .collect();

    let mut cursor = if days.contains(&today) {
        today
    } else {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) => yesterday,
            None => return 0,
        }
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        cursor = match cursor.checked_sub_days(Days::new(1)) {
            Some(previous) => previous,
            None => break,
        };
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewWorkout;
    use chrono::Utc;
    use fitlog_core_types::RecordId;

    fn on(days: &[(i32, u32, u32)]) -> Vec<Workout> {
        days.iter()
            .map(|(y, m, d)| {
                Workout::create(
                    RecordId::new(),
                    NaiveDate::from_ymd_opt(*y, *m, *d).unwrap(),
                    Utc::now(),
                    NewWorkout::new("Running", 30, 200),
                )
            })
            .collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        let workouts = on(&[
            (2024, 3, 10),
            (2024, 3, 9),
            (2024, 3, 9),
            (2024, 3, 8),
            (2024, 3, 6),
        ]);
        assert_eq!(workout_streak(&workouts, today()), 3);
    }

    #[test]
    fn test_streak_survives_until_end_of_today() {
        let workouts = on(&[(2024, 3, 9), (2024, 3, 8)]);
        assert_eq!(workout_streak(&workouts, today()), 2);
    }

    #[test]
    fn test_streak_broken() {
        let workouts = on(&[(2024, 3, 8), (2024, 3, 7)]);
        assert_eq!(workout_streak(&workouts, today()), 0);
        assert_eq!(workout_streak(&[], today()), 0);
    }

    #[test]
    fn test_future_workouts_ignored() {
        let workouts = on(&[(2024, 3, 11), (2024, 3, 10)]);
        assert_eq!(workout_streak(&workouts, today()), 1);
    }
}

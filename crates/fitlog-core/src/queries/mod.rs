//! Read-only statistics over the collections, plus exercise catalog search
//!
//! Every function here is pure: it takes slices (or the whole [`Store`]) and
//! an explicit `today` where the result depends on the calendar.
//!
//! [`Store`]: crate::ops::Store

pub mod activity;
pub mod exercises;
pub mod goals;
pub mod journal;
pub mod mood;
pub mod streak;
pub mod summary;

pub use activity::{daily_activity, range_activity, ActivityBucket, TimeRange};
pub use exercises::{find_exercise, search_exercises};
pub use goals::{goal_breakdown, CategoryProgress, GoalBreakdown};
pub use journal::{search_journal, MoodBand};
pub use mood::{mood_stats, MoodStats};
pub use streak::workout_streak;
pub use summary::{
    dashboard_summary, meditation_summary, workout_distribution, DashboardSummary,
    MeditationSummary,
};

//! Statistics commands

use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use fitlog_core::queries::{
    daily_activity, dashboard_summary, goal_breakdown, meditation_summary, mood_stats,
    range_activity, workout_distribution, workout_streak, TimeRange,
};
use serde_json::json;

use super::{print_json, AppStore, CommandResult};

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommand,
}

#[derive(Debug, Subcommand)]
pub enum StatsCommand {
    /// Dashboard counters
    Summary,
    /// Per-day or per-month activity
    Activity(ActivityArgs),
    /// Consecutive days with a workout
    Streak,
    /// Mood average, best, worst and trend
    Mood,
    /// Goals by completion state and category
    Goals,
    /// Workouts per type
    Distribution,
}

#[derive(Debug, Args)]
pub struct ActivityArgs {
    /// week, month or year
    #[arg(long, default_value = "week", conflicts_with = "days")]
    pub range: TimeRange,

    /// The last N days instead of a named range
    #[arg(long)]
    pub days: Option<u32>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn execute(args: StatsArgs, store: &AppStore) -> CommandResult {
    let collections = store.store();
    match args.command {
        StatsCommand::Summary => {
            let summary = dashboard_summary(collections);
            let meditation = meditation_summary(collections.meditation_sessions());
            print_json(&json!({
                "totalWorkouts": summary.total_workouts,
                "completedGoals": summary.completed_goals,
                "averageMood": summary.average_mood,
                "totalMeditationMinutes": summary.total_meditation_minutes,
                "completedMeditationSessions": meditation.completed_sessions,
                "workoutStreak": workout_streak(collections.workouts(), today()),
            }))?;
        }
        StatsCommand::Activity(activity) => {
            let buckets = match activity.days {
                Some(days) => daily_activity(collections, today(), days),
                None => range_activity(collections, activity.range, today()),
            };
            print_json(&buckets)?;
        }
        StatsCommand::Streak => {
            let streak = workout_streak(collections.workouts(), today());
            print_json(&json!({ "workoutStreak": streak }))?;
        }
        StatsCommand::Mood => print_json(&mood_stats(collections.mood_entries()))?,
        StatsCommand::Goals => {
            let breakdown = goal_breakdown(collections.goals());
            print_json(&json!({
                "completionRate": breakdown.completion_rate(),
                "breakdown": breakdown,
            }))?;
        }
        StatsCommand::Distribution => {
            print_json(&workout_distribution(collections.workouts()))?;
        }
    }
    Ok(())
}

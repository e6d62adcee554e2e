//! Workout commands

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use fitlog_core::model::{NewWorkout, WorkoutPatch};
use fitlog_core::RecordId;

use super::{print_json, report_match, AppStore, CommandResult};

#[derive(Debug, Args)]
pub struct WorkoutArgs {
    #[command(subcommand)]
    pub command: WorkoutCommand,
}

#[derive(Debug, Subcommand)]
pub enum WorkoutCommand {
    /// Log a workout
    Add(AddArgs),
    /// Change fields of a logged workout
    Update(UpdateArgs),
    /// Delete a workout
    Delete { id: String },
    /// Print all workouts, newest first
    List,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Workout type, e.g. Running
    #[arg(long = "type")]
    pub kind: String,

    /// Minutes
    #[arg(long)]
    pub duration: u32,

    #[arg(long, default_value_t = 0)]
    pub calories: u32,

    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: String,

    #[arg(long = "type")]
    pub kind: Option<String>,

    #[arg(long)]
    pub duration: Option<u32>,

    #[arg(long)]
    pub calories: Option<u32>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Calendar day, yyyy-mm-dd
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub fn execute(args: WorkoutArgs, store: &mut AppStore) -> CommandResult {
    match args.command {
        WorkoutCommand::Add(add) => {
            let fields =
                NewWorkout::new(add.kind, add.duration, add.calories).with_notes(add.notes);
            let workout = store.add_workout(fields)?;
            println!("Workout added: {}", workout.id);
        }
        WorkoutCommand::Update(update) => {
            let id = RecordId::from(update.id);
            let patch = WorkoutPatch {
                date: update.date,
                kind: update.kind,
                duration: update.duration,
                calories: update.calories,
                notes: update.notes,
            };
            if patch.is_empty() {
                return Err("Nothing to update: pass at least one field".into());
            }
            let matched = store.update_workout(&id, patch)?;
            report_match("Workout", "updated", &id, matched);
        }
        WorkoutCommand::Delete { id } => {
            let id = RecordId::from(id);
            let removed = store.delete_workout(&id)?;
            report_match("Workout", "deleted", &id, removed);
        }
        WorkoutCommand::List => print_json(store.workouts())?,
    }
    Ok(())
}

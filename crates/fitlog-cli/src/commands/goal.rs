//! Goal commands

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use fitlog_core::model::{GoalPatch, NewGoal, Priority};
use fitlog_core::RecordId;

use super::{parse_finite, print_json, report_match, AppStore, CommandResult};

#[derive(Debug, Args)]
pub struct GoalArgs {
    #[command(subcommand)]
    pub command: GoalCommand,
}

#[derive(Debug, Subcommand)]
pub enum GoalCommand {
    /// Create a goal
    Add(AddArgs),
    /// Change fields of a goal without recomputing progress
    Update(UpdateArgs),
    /// Record a new current value and recompute progress
    Progress {
        id: String,
        #[arg(value_parser = parse_finite)]
        value: f64,
    },
    /// Delete a goal
    Delete { id: String },
    /// Print all goals, newest first
    List,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long, value_parser = parse_finite)]
    pub target: f64,

    #[arg(long, default_value_t = 0.0, value_parser = parse_finite)]
    pub current: f64,

    #[arg(long, default_value = "")]
    pub unit: String,

    #[arg(long, default_value = "fitness")]
    pub category: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// yyyy-mm-dd
    #[arg(long)]
    pub deadline: Option<NaiveDate>,

    /// low, medium or high
    #[arg(long, default_value = "medium")]
    pub priority: Priority,

    /// Explicit progress percentage; computed when omitted
    #[arg(long, value_parser = parse_finite)]
    pub progress: Option<f64>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, value_parser = parse_finite)]
    pub target: Option<f64>,

    #[arg(long, value_parser = parse_finite)]
    pub current: Option<f64>,

    #[arg(long)]
    pub unit: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, conflicts_with = "clear_deadline")]
    pub deadline: Option<NaiveDate>,

    /// Remove the deadline
    #[arg(long)]
    pub clear_deadline: bool,

    #[arg(long)]
    pub priority: Option<Priority>,

    #[arg(long, value_parser = parse_finite)]
    pub progress: Option<f64>,
}

pub fn execute(args: GoalArgs, store: &mut AppStore) -> CommandResult {
    match args.command {
        GoalCommand::Add(add) => {
            let fields = NewGoal {
                title: add.title,
                description: add.description,
                category: add.category,
                target_value: add.target,
                current_value: add.current,
                unit: add.unit,
                deadline: add.deadline,
                priority: add.priority,
                progress: add.progress,
            };
            let goal = store.add_goal(fields)?;
            println!("Goal added: {} ({}% complete)", goal.id, goal.progress);
        }
        GoalCommand::Update(update) => {
            let id = RecordId::from(update.id);
            let deadline = if update.clear_deadline {
                Some(None)
            } else {
                update.deadline.map(Some)
            };
            let patch = GoalPatch {
                title: update.title,
                description: update.description,
                category: update.category,
                target_value: update.target,
                current_value: update.current,
                unit: update.unit,
                deadline,
                priority: update.priority,
                progress: update.progress,
            };
            let matched = store.update_goal(&id, patch)?;
            report_match("Goal", "updated", &id, matched);
        }
        GoalCommand::Progress { id, value } => {
            let id = RecordId::from(id);
            let matched = store.set_goal_value(&id, value)?;
            match store.find_goal(&id) {
                Some(goal) if matched => {
                    println!("Goal progress: {} ({}% complete)", goal.id, goal.progress)
                }
                _ => report_match("Goal", "updated", &id, false),
            }
        }
        GoalCommand::Delete { id } => {
            let id = RecordId::from(id);
            let removed = store.delete_goal(&id)?;
            report_match("Goal", "deleted", &id, removed);
        }
        GoalCommand::List => print_json(store.goals())?,
    }
    Ok(())
}

//! Exercise catalog commands
//!
//! The catalog is built in, so these never touch the data directory.

use clap::{Args, Subcommand};
use fitlog_core::model::{Difficulty, ExerciseCategory};
use fitlog_core::queries::{find_exercise, search_exercises};

use super::{print_json, CommandResult};

#[derive(Debug, Args)]
pub struct ExerciseArgs {
    #[command(subcommand)]
    pub command: ExerciseCommand,
}

#[derive(Debug, Subcommand)]
pub enum ExerciseCommand {
    /// Print catalog exercises matching a name or muscle
    List(ListArgs),
    /// Print one exercise by id or name
    Show { key: String },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Text to look for in names and worked muscles
    #[arg(default_value = "")]
    pub term: String,

    /// strength, cardio or flexibility
    #[arg(long)]
    pub category: Option<ExerciseCategory>,

    /// beginner, intermediate or advanced
    #[arg(long)]
    pub difficulty: Option<Difficulty>,
}

pub fn execute(args: ExerciseArgs) -> CommandResult {
    match args.command {
        ExerciseCommand::List(list) => {
            print_json(&search_exercises(&list.term, list.category, list.difficulty))?
        }
        ExerciseCommand::Show { key } => match find_exercise(&key) {
            Some(exercise) => print_json(exercise)?,
            None => return Err(format!("No exercise matching '{}'", key).into()),
        },
    }
    Ok(())
}

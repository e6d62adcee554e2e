//! Mood commands (append-only)

use clap::{Args, Subcommand};
use fitlog_core::model::NewMoodEntry;

use super::{print_json, AppStore, CommandResult};

#[derive(Debug, Args)]
pub struct MoodArgs {
    #[command(subcommand)]
    pub command: MoodCommand,
}

#[derive(Debug, Subcommand)]
pub enum MoodCommand {
    /// Record a mood check-in
    Add(AddArgs),
    /// Print all mood entries, newest first
    List,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// 1 (worst) to 10 (best)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub mood: u8,

    #[arg(long, default_value = "")]
    pub note: String,

    /// Contributing factor; repeat for several
    #[arg(long = "factor")]
    pub factors: Vec<String>,
}

pub fn execute(args: MoodArgs, store: &mut AppStore) -> CommandResult {
    match args.command {
        MoodCommand::Add(add) => {
            let fields = add
                .factors
                .into_iter()
                .fold(NewMoodEntry::new(add.mood).with_note(add.note), |f, factor| {
                    f.with_factor(factor)
                });
            let entry = store.add_mood_entry(fields)?;
            println!("Mood entry added: {}", entry.id);
        }
        MoodCommand::List => print_json(store.mood_entries())?,
    }
    Ok(())
}

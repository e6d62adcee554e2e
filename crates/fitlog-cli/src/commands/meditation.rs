//! Meditation commands (append-only)

use clap::{Args, Subcommand};
use fitlog_core::model::NewMeditationSession;

use super::{print_json, AppStore, CommandResult};

#[derive(Debug, Args)]
pub struct MeditationArgs {
    #[command(subcommand)]
    pub command: MeditationCommand,
}

#[derive(Debug, Subcommand)]
pub enum MeditationCommand {
    /// Record a session
    Add(AddArgs),
    /// Print all sessions, newest first
    List,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Session type, e.g. mindfulness
    #[arg(long = "type")]
    pub kind: String,

    /// Planned minutes
    #[arg(long)]
    pub duration: u32,

    /// Seconds left on the timer when stopped early
    #[arg(long)]
    pub remaining_secs: Option<u32>,
}

pub fn execute(args: MeditationArgs, store: &mut AppStore) -> CommandResult {
    match args.command {
        MeditationCommand::Add(add) => {
            let fields = match add.remaining_secs {
                Some(remaining) if remaining > 0 => {
                    NewMeditationSession::stopped_early(add.kind, add.duration, remaining)
                }
                _ => NewMeditationSession::new(add.kind, add.duration, true),
            };
            let session = store.add_meditation_session(fields)?;
            println!(
                "Meditation session added: {} ({} min)",
                session.id, session.duration
            );
        }
        MeditationCommand::List => print_json(store.meditation_sessions())?,
    }
    Ok(())
}

//! Fitlog CLI
//!
//! Command-line interface for Fitlog

use clap::{Parser, Subcommand};
use fitlog_core::logging_facility;

mod commands;
mod settings;

#[derive(Debug, Parser)]
#[command(name = "fitlog")]
#[command(about = "Fitlog - Workouts, goals, mood and mindfulness log", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: settings::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Workout log
    Workout(commands::workout::WorkoutArgs),
    /// Measurable goals
    Goal(commands::goal::GoalArgs),
    /// Mood check-ins
    Mood(commands::mood::MoodArgs),
    /// Journal entries
    Journal(commands::journal::JournalArgs),
    /// Meditation sessions
    Meditation(commands::meditation::MeditationArgs),
    /// Reminders with free-form fields
    Reminder(commands::reminder::ReminderArgs),
    /// Statistics over the collections
    Stats(commands::stats::StatsArgs),
    /// Built-in exercise catalog
    Exercise(commands::exercise::ExerciseArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::Settings::resolve(&cli.global)?;
    logging_facility::init(settings.log_profile);

    // The exercise catalog is built in and never opens the data directory
    let open = || commands::open_store(&settings);

    match cli.command {
        Commands::Workout(args) => commands::workout::execute(args, &mut open()?),
        Commands::Goal(args) => commands::goal::execute(args, &mut open()?),
        Commands::Mood(args) => commands::mood::execute(args, &mut open()?),
        Commands::Journal(args) => commands::journal::execute(args, &mut open()?),
        Commands::Meditation(args) => commands::meditation::execute(args, &mut open()?),
        Commands::Reminder(args) => commands::reminder::execute(args, &mut open()?),
        Commands::Stats(args) => commands::stats::execute(args, &open()?),
        Commands::Exercise(args) => commands::exercise::execute(args),
    }
}

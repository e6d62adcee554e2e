//! Journal commands

use clap::{Args, Subcommand};
use fitlog_core::model::{parse_tags, JournalPatch, NewJournalEntry};
use fitlog_core::queries::{search_journal, MoodBand};
use fitlog_core::RecordId;

use super::{print_json, report_match, AppStore, CommandResult};

#[derive(Debug, Args)]
pub struct JournalArgs {
    #[command(subcommand)]
    pub command: JournalCommand,
}

#[derive(Debug, Subcommand)]
pub enum JournalCommand {
    /// Write an entry
    Add(AddArgs),
    /// Change fields of an entry
    Update(UpdateArgs),
    /// Delete an entry
    Delete { id: String },
    /// Print all entries, newest first
    List,
    /// Find entries by text and mood
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub content: String,

    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub mood: u8,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,

    #[arg(long, default_value = "")]
    pub gratitude: String,

    #[arg(long, default_value = "")]
    pub goals: String,

    #[arg(long, default_value = "")]
    pub challenges: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub content: Option<String>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub mood: Option<u8>,

    /// Comma-separated tags; replaces the existing list
    #[arg(long)]
    pub tags: Option<String>,

    #[arg(long)]
    pub gratitude: Option<String>,

    #[arg(long)]
    pub goals: Option<String>,

    #[arg(long)]
    pub challenges: Option<String>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in titles, content and tags
    #[arg(default_value = "")]
    pub term: String,

    /// all, positive, neutral or negative
    #[arg(long, default_value = "all")]
    pub mood: MoodBand,
}

pub fn execute(args: JournalArgs, store: &mut AppStore) -> CommandResult {
    match args.command {
        JournalCommand::Add(add) => {
            let fields = NewJournalEntry {
                title: add.title,
                content: add.content,
                mood: add.mood,
                tags: parse_tags(&add.tags),
                gratitude: add.gratitude,
                goals: add.goals,
                challenges: add.challenges,
            };
            let entry = store.add_journal_entry(fields)?;
            println!("Journal entry added: {}", entry.id);
        }
        JournalCommand::Update(update) => {
            let id = RecordId::from(update.id);
            let patch = JournalPatch {
                title: update.title,
                content: update.content,
                mood: update.mood,
                tags: update.tags.as_deref().map(parse_tags),
                gratitude: update.gratitude,
                goals: update.goals,
                challenges: update.challenges,
            };
            let matched = store.update_journal_entry(&id, patch)?;
            report_match("Journal entry", "updated", &id, matched);
        }
        JournalCommand::Delete { id } => {
            let id = RecordId::from(id);
            let removed = store.delete_journal_entry(&id)?;
            report_match("Journal entry", "deleted", &id, removed);
        }
        JournalCommand::List => print_json(store.journal_entries())?,
        JournalCommand::Search(search) => {
            let hits = search_journal(store.journal_entries(), &search.term, search.mood);
            print_json(&hits)?;
        }
    }
    Ok(())
}

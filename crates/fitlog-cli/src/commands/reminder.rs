//! Reminder commands

use clap::{Args, Subcommand};
use fitlog_core::model::Fields;
use fitlog_core::RecordId;

use super::{print_json, report_match, AppStore, CommandResult};

#[derive(Debug, Args)]
pub struct ReminderArgs {
    #[command(subcommand)]
    pub command: ReminderCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReminderCommand {
    /// Create a reminder from key=value fields
    Add(FieldArgs),
    /// Merge key=value fields into a reminder
    Update {
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a reminder
    Delete { id: String },
    /// Print all reminders, newest first
    List,
}

#[derive(Debug, Args)]
pub struct FieldArgs {
    /// key=value; the value is read as JSON when it parses, else as text
    #[arg(long = "field", required = true, value_parser = parse_field)]
    pub fields: Vec<(String, serde_json::Value)>,
}

impl FieldArgs {
    fn into_fields(self) -> Fields {
        self.fields
            .into_iter()
            .fold(Fields::new(), |acc, (key, value)| acc.with(key, value))
    }
}

fn parse_field(input: &str) -> Result<(String, serde_json::Value), String> {
    Fields::parse_assignment(input).map_err(|e| e.to_string())
}

pub fn execute(args: ReminderArgs, store: &mut AppStore) -> CommandResult {
    match args.command {
        ReminderCommand::Add(fields) => {
            let reminder = store.add_reminder(fields.into_fields())?;
            println!("Reminder added: {}", reminder.id);
        }
        ReminderCommand::Update { id, fields } => {
            let id = RecordId::from(id);
            let matched = store.update_reminder(&id, fields.into_fields())?;
            report_match("Reminder", "updated", &id, matched);
        }
        ReminderCommand::Delete { id } => {
            let id = RecordId::from(id);
            let removed = store.delete_reminder(&id)?;
            report_match("Reminder", "deleted", &id, removed);
        }
        ReminderCommand::List => print_json(store.reminders())?,
    }
    Ok(())
}

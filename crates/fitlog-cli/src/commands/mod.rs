//! Subcommand handlers
//!
//! Each handler receives the store opened by `main` and returns
//! `Box<dyn Error>` so clap, store and serde failures share one exit path.

pub mod exercise;
pub mod goal;
pub mod journal;
pub mod meditation;
pub mod mood;
pub mod reminder;
pub mod stats;
pub mod workout;

use fitlog_core::errors::FlError;
use fitlog_core::RecordId;
use fitlog_store::errors::io_error;
use fitlog_store::{FsStorage, KvStorage, PersistedStore, SqliteStorage};
use serde::Serialize;

use crate::settings::{Backend, Settings};

/// File name of the SQLite database inside the data directory
pub const SQLITE_FILE_NAME: &str = "fitlog.db";

/// The store every handler operates on
pub type AppStore = PersistedStore<Box<dyn KvStorage>>;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Open the configured backend and hydrate the store from it
pub fn open_store(settings: &Settings) -> Result<AppStore, FlError> {
    let storage: Box<dyn KvStorage> = match settings.backend {
        Backend::Fs => Box::new(FsStorage::new(&settings.data_dir)),
        Backend::Sqlite => {
            std::fs::create_dir_all(&settings.data_dir)
                .map_err(|e| io_error("create_data_dir", e))?;
            Box::new(SqliteStorage::open(
                settings.data_dir.join(SQLITE_FILE_NAME),
            )?)
        }
    };
    Ok(PersistedStore::open(storage))
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse a finite number; NaN and the infinities are rejected
pub fn parse_finite(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.trim().parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("expected a finite number, got '{raw}'"))
    }
}

/// Report the outcome of an update or delete
pub fn report_match(what: &str, verb: &str, id: &RecordId, matched: bool) {
    if matched {
        println!("{} {}: {}", what, verb, id);
    } else {
        println!("No {} with id {}", what.to_lowercase(), id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_finite() {
        assert_eq!(parse_finite("12.5"), Ok(12.5));
        assert!(parse_finite("NaN").is_err());
        assert!(parse_finite("inf").is_err());
        assert!(parse_finite("ten").is_err());
    }
}

// Integration tests for the filesystem and SQLite backends

mod common;

use common::stored_array;
use fitlog_core::model::{Fields, NewJournalEntry, NewWorkout};
use fitlog_store::{FsStorage, KvStorage, PersistedStore, SqliteStorage};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_fs_backend_survives_reopen() {
    // Given: A filesystem-backed store with data
    let dir = TempDir::new().unwrap();
    let workout_id = {
        let mut store = PersistedStore::open(FsStorage::new(dir.path()));
        store.add_workout(NewWorkout::new("Run", 30, 250)).unwrap().id
    };

    // When: The store is opened again from the same directory
    let store = PersistedStore::open(FsStorage::new(dir.path()));

    // Then: The workout is back
    assert_eq!(store.workouts().len(), 1);
    assert_eq!(store.workouts()[0].id, workout_id);
    assert!(dir.path().join("fitness-workouts.json").exists());
    assert!(!dir.path().join("fitness-workouts.tmp").exists());
}

#[test]
fn test_fs_backend_corrupt_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("fitness-journal.json"), "<html>").unwrap();

    let mut store = PersistedStore::open(FsStorage::new(dir.path()));
    assert!(store.journal_entries().is_empty());

    store
        .add_journal_entry(NewJournalEntry::new("Recovered", "fresh start"))
        .unwrap();
    assert_eq!(stored_array(store.storage(), "fitness-journal").len(), 1);
}

#[test]
fn test_sqlite_backend_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("fitlog.db");

    {
        let mut store = PersistedStore::open(SqliteStorage::open(&db_path).unwrap());
        store
            .add_reminder(Fields::new().with("title", json!("Stretch")))
            .unwrap();
    }

    let store = PersistedStore::open(SqliteStorage::open(&db_path).unwrap());
    assert_eq!(store.reminders().len(), 1);
    assert_eq!(
        store.reminders()[0].fields.get("title"),
        Some(&json!("Stretch"))
    );
}

#[test]
fn test_boxed_backend() {
    let storage: Box<dyn KvStorage> = Box::new(SqliteStorage::open_in_memory().unwrap());
    let mut store = PersistedStore::open(storage);

    store.add_workout(NewWorkout::new("Row", 20, 150)).unwrap();

    assert!(store.storage().get("fitness-workouts").unwrap().is_some());
}

#[test]
fn test_sqlite_schema_is_a_single_table() {
    // Given: A database file opened twice
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("fitlog.db");
    drop(SqliteStorage::open(&db_path).unwrap());

    // When: It is opened again
    let storage = SqliteStorage::open(&db_path).unwrap();

    // Then: Only the key-value table exists
    let mut stmt = storage
        .connection()
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    let tables = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(tables, vec!["kv_entries"]);
}

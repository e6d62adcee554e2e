//! Full-collection persistence
//!
//! Every write serializes the whole collection and overwrites its entry.

use crate::errors::{persistence_error, serialization_error, Result};
use crate::keys::storage_key;
use crate::storage::KvStorage;
use fitlog_core::model::{
    Goal, JournalEntry, MeditationSession, MoodEntry, Reminder, Workout,
};
use fitlog_core::ops::{Record, Store};

/// Serialize one collection as a JSON array and write it to its entry
///
/// # Errors
///
/// Returns a `Serialization` error if the records cannot be encoded, or a
/// `Persistence` error wrapping the backend failure if the write fails.
pub fn persist_collection<R: Record, S: KvStorage + ?Sized>(
    storage: &mut S,
    store: &Store,
) -> Result<()> {
    let collection = R::COLLECTION;
    let key = storage_key(collection);

    let json = serde_json::to_string(store.records::<R>())
        .map_err(|e| serialization_error(key, e).with_collection(collection.name()))?;

    storage
        .set(key, &json)
        .map_err(|e| persistence_error(collection.name(), key, e))
}

/// Write every collection
///
/// # Errors
///
/// Stops at and returns the first failing collection's error.
pub fn persist_all<S: KvStorage + ?Sized>(storage: &mut S, store: &Store) -> Result<()> {
    persist_collection::<Workout, S>(storage, store)?;
    persist_collection::<Goal, S>(storage, store)?;
    persist_collection::<MoodEntry, S>(storage, store)?;
    persist_collection::<JournalEntry, S>(storage, store)?;
    persist_collection::<MeditationSession, S>(storage, store)?;
    persist_collection::<Reminder, S>(storage, store)?;
    Ok(())
}

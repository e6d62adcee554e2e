//! Generic collection operations
//!
//! Every collection is a newest-first `Vec` inside [`Store`]. The functions
//! here implement the shared add/update/delete contract once; the
//! per-collection `*_ops` modules build records and delegate to them.

use fitlog_core_types::RecordId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::store::Store;
use crate::model::{
    Collection, Goal, JournalEntry, MeditationSession, MoodEntry, Reminder, Workout,
};

/// A record type stored in one of the six collections
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// The collection this record type lives in
    const COLLECTION: Collection;

    /// The record's unique id
    fn id(&self) -> &RecordId;

    /// The owning collection inside a store
    fn records(store: &Store) -> &Vec<Self>;

    /// Mutable access to the owning collection
    fn records_mut(store: &mut Store) -> &mut Vec<Self>;
}

/// Prepend a record, keeping the collection newest-first
pub fn prepend<R: Record>(store: &mut Store, record: R) -> &R {
    let records = R::records_mut(store);
    records.insert(0, record);
    &records[0]
}

/// Apply `merge` to the record with the given id
///
/// Returns `false` and leaves the collection untouched when no record matches.
pub fn merge_by_id<R, F>(store: &mut Store, id: &RecordId, merge: F) -> bool
where
    R: Record,
    F: FnOnce(&mut R),
{
    match R::records_mut(store).iter_mut().find(|r| r.id() == id) {
        Some(record) => {
            merge(record);
            true
        }
        None => false,
    }
}

/// Remove the record with the given id, preserving the order of the rest
///
/// Returns `false` when no record matches.
pub fn remove_by_id<R: Record>(store: &mut Store, id: &RecordId) -> bool {
    let records = R::records_mut(store);
    match records.iter().position(|r| r.id() == id) {
        Some(index) => {
            records.remove(index);
            true
        }
        None => false,
    }
}

/// Find a record by id
pub fn find_by_id<'a, R: Record>(store: &'a Store, id: &RecordId) -> Option<&'a R> {
    R::records(store).iter().find(|r| r.id() == id)
}

/// Replace a whole collection (used by hydration)
pub fn replace_all<R: Record>(store: &mut Store, records: Vec<R>) {
    *R::records_mut(store) = records;
}

impl Record for Workout {
    const COLLECTION: Collection = Collection::Workouts;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn records(store: &Store) -> &Vec<Self> {
        &store.workouts
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.workouts
    }
}

impl Record for Goal {
    const COLLECTION: Collection = Collection::Goals;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn records(store: &Store) -> &Vec<Self> {
        &store.goals
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.goals
    }
}

impl Record for MoodEntry {
    const COLLECTION: Collection = Collection::MoodEntries;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn records(store: &Store) -> &Vec<Self> {
        &store.mood_entries
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.mood_entries
    }
}

impl Record for JournalEntry {
    const COLLECTION: Collection = Collection::JournalEntries;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn records(store: &Store) -> &Vec<Self> {
        &store.journal_entries
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.journal_entries
    }
}

impl Record for MeditationSession {
    const COLLECTION: Collection = Collection::MeditationSessions;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn records(store: &Store) -> &Vec<Self> {
        &store.meditation_sessions
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.meditation_sessions
    }
}

impl Record for Reminder {
    const COLLECTION: Collection = Collection::Reminders;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn records(store: &Store) -> &Vec<Self> {
        &store.reminders
    }

    fn records_mut(store: &mut Store) -> &mut Vec<Self> {
        &mut store.reminders
    }
}

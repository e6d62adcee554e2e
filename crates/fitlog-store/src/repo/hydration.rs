//! Hydration layer - loads collections from storage into a Store
//!
//! A collection whose entry is absent, unreadable or malformed starts empty;
//! the other collections are unaffected. Hydration never fails.

use crate::keys::storage_key;
use crate::storage::KvStorage;
use fitlog_core::model::{
    Collection, Goal, JournalEntry, MeditationSession, MoodEntry, Reminder, Workout,
};
use fitlog_core::ops::collection::replace_all;
use fitlog_core::ops::{Record, Store};

/// Build a Store from every collection in storage
pub fn hydrate<S: KvStorage + ?Sized>(storage: &S) -> Store {
    let mut store = Store::new();
    hydrate_into::<Workout, S>(storage, &mut store);
    hydrate_into::<Goal, S>(storage, &mut store);
    hydrate_into::<MoodEntry, S>(storage, &mut store);
    hydrate_into::<JournalEntry, S>(storage, &mut store);
    hydrate_into::<MeditationSession, S>(storage, &mut store);
    hydrate_into::<Reminder, S>(storage, &mut store);
    store
}

fn hydrate_into<R: Record, S: KvStorage + ?Sized>(storage: &S, store: &mut Store) {
    let records = load_collection::<R, S>(storage);
    replace_all(store, records);
}

/// Load one collection, falling back to empty on any failure
pub fn load_collection<R: Record, S: KvStorage + ?Sized>(storage: &S) -> Vec<R> {
    let collection: Collection = R::COLLECTION;
    let key = storage_key(collection);

    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!(
                collection = collection.name(),
                storage_key = key,
                err.code = err.code(),
                error = %err,
                "storage read failed, starting collection empty"
            );
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<R>>(&raw) {
        Ok(records) => {
            tracing::debug!(
                collection = collection.name(),
                record_count = records.len(),
                "hydrated collection"
            );
            records
        }
        Err(err) => {
            tracing::warn!(
                collection = collection.name(),
                storage_key = key,
                error = %err,
                "malformed collection in storage, starting collection empty"
            );
            Vec::new()
        }
    }
}

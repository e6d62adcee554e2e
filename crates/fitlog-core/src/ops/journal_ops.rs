use fitlog_core_types::RecordId;

use super::collection::{merge_by_id, prepend, remove_by_id};
use super::{creation_stamp, store::Store};
use crate::model::{JournalEntry, JournalPatch, NewJournalEntry};

/// Write a new journal entry
pub fn add_journal_entry(store: &mut Store, fields: NewJournalEntry) -> JournalEntry {
    let (date, timestamp) = creation_stamp();
    let entry = JournalEntry::create(RecordId::new(), date, timestamp, fields);
    prepend(store, entry).clone()
}

/// Merge a patch into the journal entry with the given id
pub fn update_journal_entry(store: &mut Store, id: &RecordId, patch: JournalPatch) -> bool {
    merge_by_id::<JournalEntry, _>(store, id, |entry| entry.apply(patch))
}

/// Delete the journal entry with the given id
pub fn delete_journal_entry(store: &mut Store, id: &RecordId) -> bool {
    remove_by_id::<JournalEntry>(store, id)
}

use fitlog_core_types::RecordId;

use super::collection::prepend;
use super::{creation_stamp, store::Store};
use crate::model::{MoodEntry, NewMoodEntry};

/// Record a mood check-in
///
/// Mood entries are append-only; there is no update or delete.
pub fn add_mood_entry(store: &mut Store, fields: NewMoodEntry) -> MoodEntry {
    let (date, timestamp) = creation_stamp();
    let entry = MoodEntry::create(RecordId::new(), date, timestamp, fields);
    prepend(store, entry).clone()
}

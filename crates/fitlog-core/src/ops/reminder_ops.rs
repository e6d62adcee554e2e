use chrono::Utc;
use fitlog_core_types::RecordId;

use super::collection::{merge_by_id, prepend, remove_by_id};
use super::store::Store;
use crate::model::{Fields, Reminder};

/// Create a reminder from free-form fields
///
/// `id` and `createdAt` keys in `fields` are ignored.
pub fn add_reminder(store: &mut Store, fields: Fields) -> Reminder {
    let reminder = Reminder::create(RecordId::new(), Utc::now(), fields);
    prepend(store, reminder).clone()
}

/// Merge fields into the reminder with the given id
pub fn update_reminder(store: &mut Store, id: &RecordId, patch: Fields) -> bool {
    merge_by_id::<Reminder, _>(store, id, |reminder| reminder.apply(patch))
}

/// Delete the reminder with the given id
pub fn delete_reminder(store: &mut Store, id: &RecordId) -> bool {
    remove_by_id::<Reminder>(store, id)
}

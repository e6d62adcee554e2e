//! Stable storage keys, one per collection

use fitlog_core::model::Collection;

/// Storage key holding the JSON array of a collection
///
/// These names are part of the on-disk format and must never change.
pub fn storage_key(collection: Collection) -> &'static str {
    match collection {
        Collection::Workouts => "fitness-workouts",
        Collection::Goals => "fitness-goals",
        Collection::MoodEntries => "fitness-mood",
        Collection::JournalEntries => "fitness-journal",
        Collection::MeditationSessions => "fitness-meditation",
        Collection::Reminders => "fitness-reminders",
    }
}

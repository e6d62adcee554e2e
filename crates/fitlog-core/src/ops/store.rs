use fitlog_core_types::RecordId;

use super::collection::{find_by_id, Record};
use crate::model::{Goal, JournalEntry, MeditationSession, MoodEntry, Reminder, Workout};

/// In-memory store for the six collections
///
/// Each collection is ordered newest-first. Not thread-safe (no Arc/RwLock);
/// designed for a single owner on one thread. Durable persistence is layered
/// on top by `fitlog-store`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub(crate) workouts: Vec<Workout>,
    pub(crate) goals: Vec<Goal>,
    pub(crate) mood_entries: Vec<MoodEntry>,
    pub(crate) journal_entries: Vec<JournalEntry>,
    pub(crate) meditation_sessions: Vec<MeditationSession>,
    pub(crate) reminders: Vec<Reminder>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn mood_entries(&self) -> &[MoodEntry] {
        &self.mood_entries
    }

    pub fn journal_entries(&self) -> &[JournalEntry] {
        &self.journal_entries
    }

    pub fn meditation_sessions(&self) -> &[MeditationSession] {
        &self.meditation_sessions
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Get any record by id, typed by the collection it lives in
    pub fn find<R: Record>(&self, id: &RecordId) -> Option<&R> {
        find_by_id(self, id)
    }

    /// All records of one type, newest first
    pub fn records<R: Record>(&self) -> &[R] {
        R::records(self)
    }

    /// Total number of records across every collection
    pub fn total_records(&self) -> usize {
        self.workouts.len()
            + self.goals.len()
            + self.mood_entries.len()
            + self.journal_entries.len()
            + self.meditation_sessions.len()
            + self.reminders.len()
    }

    /// Check if every collection is empty
    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.workouts().len(), 0);
        assert_eq!(store.reminders().len(), 0);
    }

    #[test]
    fn test_find_on_empty_store() {
        let store = Store::new();
        assert!(store.find::<Goal>(&RecordId::from("missing")).is_none());
    }
}

//! Persisted store - the single source of truth for all six collections
//!
//! Wraps the in-memory [`Store`] and a [`KvStorage`] backend. Construction
//! hydrates every collection; every mutation applies the in-memory change
//! first and then rewrites the owning collection's entry in full, whether or
//! not the targeted record existed.

use std::time::Instant;

use fitlog_core::model::{
    Fields, Goal, GoalPatch, JournalEntry, JournalPatch, MeditationSession, MoodEntry, NewGoal,
    NewJournalEntry, NewMeditationSession, NewMoodEntry, NewWorkout, Reminder, Workout,
    WorkoutPatch,
};
use fitlog_core::ops::{
    goal_ops, journal_ops, meditation_ops, mood_ops, reminder_ops, workout_ops, Record, Store,
};
use fitlog_core::{log_op_end, log_op_error, log_op_start, RecordId};

use crate::errors::Result;
use crate::repo::{hydrate, persist_collection};
use crate::storage::KvStorage;

/// In-memory collections mirrored to durable storage
pub struct PersistedStore<S: KvStorage> {
    store: Store,
    storage: S,
}

impl<S: KvStorage> PersistedStore<S> {
    /// Hydrate every collection from `storage`
    ///
    /// Never fails: unreadable or malformed entries start empty.
    pub fn open(storage: S) -> Self {
        let started = Instant::now();
        log_op_start!("open_store");
        let store = hydrate(&storage);
        log_op_end!(
            "open_store",
            duration_ms = elapsed_ms(started),
            record_count = store.total_records()
        );
        Self { store, storage }
    }

    /// Discard in-memory state and hydrate again from storage
    pub fn reload(&mut self) {
        self.store = hydrate(&self.storage);
    }

    /// Read-only view of the in-memory collections
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend, dropping in-memory state
    pub fn into_storage(self) -> S {
        self.storage
    }

    // ===== Read accessors =====

    pub fn workouts(&self) -> &[Workout] {
        self.store.workouts()
    }

    pub fn goals(&self) -> &[Goal] {
        self.store.goals()
    }

    pub fn mood_entries(&self) -> &[MoodEntry] {
        self.store.mood_entries()
    }

    pub fn journal_entries(&self) -> &[JournalEntry] {
        self.store.journal_entries()
    }

    pub fn meditation_sessions(&self) -> &[MeditationSession] {
        self.store.meditation_sessions()
    }

    pub fn reminders(&self) -> &[Reminder] {
        self.store.reminders()
    }

    pub fn find_workout(&self, id: &RecordId) -> Option<&Workout> {
        self.store.find(id)
    }

    pub fn find_goal(&self, id: &RecordId) -> Option<&Goal> {
        self.store.find(id)
    }

    pub fn find_journal_entry(&self, id: &RecordId) -> Option<&JournalEntry> {
        self.store.find(id)
    }

    pub fn find_reminder(&self, id: &RecordId) -> Option<&Reminder> {
        self.store.find(id)
    }

    // ===== Workouts =====

    /// Log a workout
    ///
    /// # Errors
    ///
    /// Returns an error if the workouts entry cannot be written; the workout
    /// stays in memory.
    pub fn add_workout(&mut self, fields: NewWorkout) -> Result<Workout> {
        let started = Instant::now();
        log_op_start!("add_workout", collection = Workout::COLLECTION.name());
        let workout = workout_ops::add_workout(&mut self.store, fields);
        let id = workout.id.clone();
        self.commit::<Workout, _>("add_workout", &id, started, workout)
    }

    /// Merge a patch into a workout; `false` when the id matched nothing
    ///
    /// # Errors
    ///
    /// Returns an error if the workouts entry cannot be written.
    pub fn update_workout(&mut self, id: &RecordId, patch: WorkoutPatch) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("update_workout", record_id = id.as_str());
        let matched = workout_ops::update_workout(&mut self.store, id, patch);
        self.commit::<Workout, _>("update_workout", id, started, matched)
    }

    /// Delete a workout; `false` when the id matched nothing
    ///
    /// # Errors
    ///
    /// Returns an error if the workouts entry cannot be written.
    pub fn delete_workout(&mut self, id: &RecordId) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("delete_workout", record_id = id.as_str());
        let removed = workout_ops::delete_workout(&mut self.store, id);
        self.commit::<Workout, _>("delete_workout", id, started, removed)
    }

    // ===== Goals =====

    /// Create a goal, computing progress when the caller leaves it unset
    ///
    /// # Errors
    ///
    /// Returns an error if the goals entry cannot be written.
    pub fn add_goal(&mut self, fields: NewGoal) -> Result<Goal> {
        let started = Instant::now();
        log_op_start!("add_goal", collection = Goal::COLLECTION.name());
        let goal = goal_ops::add_goal(&mut self.store, fields);
        let id = goal.id.clone();
        self.commit::<Goal, _>("add_goal", &id, started, goal)
    }

    /// Merge a patch into a goal without recomputing progress
    ///
    /// # Errors
    ///
    /// Returns an error if the goals entry cannot be written.
    pub fn update_goal(&mut self, id: &RecordId, patch: GoalPatch) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("update_goal", record_id = id.as_str());
        let matched = goal_ops::update_goal(&mut self.store, id, patch);
        self.commit::<Goal, _>("update_goal", id, started, matched)
    }

    /// Set a goal's current value and recompute its progress
    ///
    /// # Errors
    ///
    /// Returns an error if the goals entry cannot be written.
    pub fn set_goal_value(&mut self, id: &RecordId, current_value: f64) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("set_goal_value", record_id = id.as_str());
        let matched = goal_ops::set_goal_value(&mut self.store, id, current_value);
        self.commit::<Goal, _>("set_goal_value", id, started, matched)
    }

    /// Delete a goal; `false` when the id matched nothing
    ///
    /// # Errors
    ///
    /// Returns an error if the goals entry cannot be written.
    pub fn delete_goal(&mut self, id: &RecordId) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("delete_goal", record_id = id.as_str());
        let removed = goal_ops::delete_goal(&mut self.store, id);
        self.commit::<Goal, _>("delete_goal", id, started, removed)
    }

    // ===== Mood entries (append-only) =====

    /// Record a mood check-in
    ///
    /// # Errors
    ///
    /// Returns an error if the mood entry cannot be written.
    pub fn add_mood_entry(&mut self, fields: NewMoodEntry) -> Result<MoodEntry> {
        let started = Instant::now();
        log_op_start!("add_mood_entry", collection = MoodEntry::COLLECTION.name());
        let entry = mood_ops::add_mood_entry(&mut self.store, fields);
        let id = entry.id.clone();
        self.commit::<MoodEntry, _>("add_mood_entry", &id, started, entry)
    }

    // ===== Journal entries =====

    /// Write a journal entry
    ///
    /// # Errors
    ///
    /// Returns an error if the journal entry cannot be written.
    pub fn add_journal_entry(&mut self, fields: NewJournalEntry) -> Result<JournalEntry> {
        let started = Instant::now();
        log_op_start!(
            "add_journal_entry",
            collection = JournalEntry::COLLECTION.name()
        );
        let entry = journal_ops::add_journal_entry(&mut self.store, fields);
        let id = entry.id.clone();
        self.commit::<JournalEntry, _>("add_journal_entry", &id, started, entry)
    }

    /// Merge a patch into a journal entry
    ///
    /// # Errors
    ///
    /// Returns an error if the journal entry cannot be written.
    pub fn update_journal_entry(&mut self, id: &RecordId, patch: JournalPatch) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("update_journal_entry", record_id = id.as_str());
        let matched = journal_ops::update_journal_entry(&mut self.store, id, patch);
        self.commit::<JournalEntry, _>("update_journal_entry", id, started, matched)
    }

    /// Delete a journal entry
    ///
    /// # Errors
    ///
    /// Returns an error if the journal entry cannot be written.
    pub fn delete_journal_entry(&mut self, id: &RecordId) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("delete_journal_entry", record_id = id.as_str());
        let removed = journal_ops::delete_journal_entry(&mut self.store, id);
        self.commit::<JournalEntry, _>("delete_journal_entry", id, started, removed)
    }

    // ===== Meditation sessions (append-only) =====

    /// Record a meditation session
    ///
    /// # Errors
    ///
    /// Returns an error if the meditation entry cannot be written.
    pub fn add_meditation_session(
        &mut self,
        fields: NewMeditationSession,
    ) -> Result<MeditationSession> {
        let started = Instant::now();
        log_op_start!(
            "add_meditation_session",
            collection = MeditationSession::COLLECTION.name()
        );
        let session = meditation_ops::add_meditation_session(&mut self.store, fields);
        let id = session.id.clone();
        self.commit::<MeditationSession, _>("add_meditation_session", &id, started, session)
    }

    // ===== Reminders =====

    /// Create a reminder from arbitrary fields
    ///
    /// # Errors
    ///
    /// Returns an error if the reminders entry cannot be written.
    pub fn add_reminder(&mut self, fields: Fields) -> Result<Reminder> {
        let started = Instant::now();
        log_op_start!("add_reminder", collection = Reminder::COLLECTION.name());
        let reminder = reminder_ops::add_reminder(&mut self.store, fields);
        let id = reminder.id.clone();
        self.commit::<Reminder, _>("add_reminder", &id, started, reminder)
    }

    /// Merge fields into a reminder; `id` and `createdAt` are ignored
    ///
    /// # Errors
    ///
    /// Returns an error if the reminders entry cannot be written.
    pub fn update_reminder(&mut self, id: &RecordId, patch: Fields) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("update_reminder", record_id = id.as_str());
        let matched = reminder_ops::update_reminder(&mut self.store, id, patch);
        self.commit::<Reminder, _>("update_reminder", id, started, matched)
    }

    /// Delete a reminder
    ///
    /// # Errors
    ///
    /// Returns an error if the reminders entry cannot be written.
    pub fn delete_reminder(&mut self, id: &RecordId) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("delete_reminder", record_id = id.as_str());
        let removed = reminder_ops::delete_reminder(&mut self.store, id);
        self.commit::<Reminder, _>("delete_reminder", id, started, removed)
    }

    /// Rewrite the collection of `R` and close the operation's log boundary
    fn commit<R: Record, T>(
        &mut self,
        op: &'static str,
        record_id: &RecordId,
        started: Instant,
        value: T,
    ) -> Result<T> {
        let collection = R::COLLECTION.name();
        match persist_collection::<R, S>(&mut self.storage, &self.store) {
            Ok(()) => {
                log_op_end!(
                    op,
                    duration_ms = elapsed_ms(started),
                    collection = collection,
                    record_id = record_id.as_str()
                );
                Ok(value)
            }
            Err(err) => {
                log_op_error!(
                    op,
                    err.clone(),
                    duration_ms = elapsed_ms(started),
                    collection = collection,
                    record_id = record_id.as_str()
                );
                Err(err.with_record_id(record_id.as_str()))
            }
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_open_empty_storage() {
        let store = PersistedStore::open(MemoryStorage::new());
        assert!(store.store().is_empty());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_every_mutation_writes_its_collection() {
        let mut store = PersistedStore::open(MemoryStorage::new());

        let goal = store.add_goal(NewGoal::new("Read", 12.0, 3.0)).unwrap();
        assert_eq!(store.storage().len(), 1);

        store.set_goal_value(&goal.id, 6.0).unwrap();
        let raw = store.storage().raw("fitness-goals").unwrap();
        assert!(raw.contains("\"progress\":50"));
    }

    #[test]
    fn test_missing_id_still_persists() {
        let mut store = PersistedStore::open(MemoryStorage::new());

        let matched = store
            .delete_journal_entry(&RecordId::from("missing"))
            .unwrap();

        assert!(!matched);
        assert_eq!(store.storage().raw("fitness-journal"), Some("[]"));
    }
}

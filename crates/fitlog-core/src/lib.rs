//! Fitlog Core - In-memory fitness tracking kernel
//!
//! This crate provides the foundational data structures and operations for Fitlog,
//! including:
//! - Record models for the six collections (workouts, goals, mood entries,
//!   journal entries, meditation sessions, reminders) and their partial-update patches
//! - The in-memory `Store` holding every collection newest-first
//! - Pure add/update/delete operations over the collections
//! - Read-only statistics queries used by dashboards
//! - A built-in exercise reference catalog with search
//! - The structured error and logging facilities shared by the other crates

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;

// Re-export commonly used types
pub use errors::{FitlogError, FlError, FlErrorKind, Result};
pub use fitlog_core_types::RecordId;
pub use model::{
    Collection, Goal, JournalEntry, MeditationSession, MoodEntry, Priority, Reminder, Workout,
};
pub use ops::Store;

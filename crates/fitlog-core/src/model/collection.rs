use serde::{Deserialize, Serialize};

/// The six independently persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Workouts,
    Goals,
    MoodEntries,
    JournalEntries,
    MeditationSessions,
    Reminders,
}

impl Collection {
    /// Every collection, in hydration order
    pub const ALL: [Collection; 6] = [
        Collection::Workouts,
        Collection::Goals,
        Collection::MoodEntries,
        Collection::JournalEntries,
        Collection::MeditationSessions,
        Collection::Reminders,
    ];

    /// Stable name used in logs and error context
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Workouts => "workouts",
            Collection::Goals => "goals",
            Collection::MoodEntries => "mood_entries",
            Collection::JournalEntries => "journal_entries",
            Collection::MeditationSessions => "meditation_sessions",
            Collection::Reminders => "reminders",
        }
    }

    /// Whether the collection supports update and delete
    ///
    /// Mood entries and meditation sessions are append-only.
    pub fn is_mutable(&self) -> bool {
        !matches!(
            self,
            Collection::MoodEntries | Collection::MeditationSessions
        )
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

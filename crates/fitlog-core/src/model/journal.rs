use chrono::{DateTime, NaiveDate, Utc};
use fitlog_core_types::RecordId;
use serde::{Deserialize, Serialize};

fn default_mood() -> u8 {
    5
}

/// A journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: RecordId,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    pub title: String,

    #[serde(default)]
    pub content: String,

    /// Mood on a 1-10 scale
    #[serde(default = "default_mood")]
    pub mood: u8,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub gratitude: String,

    #[serde(default)]
    pub goals: String,

    #[serde(default)]
    pub challenges: String,
}

/// Caller-supplied fields for a new journal entry
#[derive(Debug, Clone, PartialEq)]
pub struct NewJournalEntry {
    pub title: String,
    pub content: String,
    pub mood: u8,
    pub tags: Vec<String>,
    pub gratitude: String,
    pub goals: String,
    pub challenges: String,
}

impl Default for NewJournalEntry {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            mood: default_mood(),
            tags: Vec::new(),
            gratitude: String::new(),
            goals: String::new(),
            challenges: String::new(),
        }
    }
}

impl NewJournalEntry {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }
}

/// Partial update for a journal entry; `None` fields are left untouched
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JournalPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<u8>,
    pub tags: Option<Vec<String>>,
    pub gratitude: Option<String>,
    pub goals: Option<String>,
    pub challenges: Option<String>,
}

impl JournalEntry {
    pub fn create(
        id: RecordId,
        date: NaiveDate,
        timestamp: DateTime<Utc>,
        fields: NewJournalEntry,
    ) -> Self {
        Self {
            id,
            date,
            timestamp,
            title: fields.title,
            content: fields.content,
            mood: fields.mood,
            tags: fields.tags,
            gratitude: fields.gratitude,
            goals: fields.goals,
            challenges: fields.challenges,
        }
    }

    /// Shallow-merge a patch into this entry
    pub fn apply(&mut self, patch: JournalPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(mood) = patch.mood {
            self.mood = mood;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(gratitude) = patch.gratitude {
            self.gratitude = gratitude;
        }
        if let Some(goals) = patch.goals {
            self.goals = goals;
        }
        if let Some(challenges) = patch.challenges {
            self.challenges = challenges;
        }
    }
}

/// Split a comma-separated tag list, trimming whitespace and dropping empties
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

use std::str::FromStr;

use crate::errors::FitlogError;
use crate::model::JournalEntry;

/// Mood filter for journal searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodBand {
    #[default]
    All,
    /// mood >= 7
    Positive,
    /// 4 <= mood <= 6
    Neutral,
    /// mood < 4
    Negative,
}

impl MoodBand {
    pub fn contains(&self, mood: u8) -> bool {
        match self {
            MoodBand::All => true,
            MoodBand::Positive => mood >= 7,
            MoodBand::Neutral => (4..=6).contains(&mood),
            MoodBand::Negative => mood < 4,
        }
    }
}

impl FromStr for MoodBand {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(MoodBand::All),
            "positive" => Ok(MoodBand::Positive),
            "neutral" => Ok(MoodBand::Neutral),
            "negative" => Ok(MoodBand::Negative),
            other => Err(FitlogError::invalid_field(
                "mood_band",
                format!("expected all, positive, neutral or negative, got '{}'", other),
            )),
        }
    }
}

/// Filter journal entries by a search term and mood band
///
/// The term matches case-insensitively against the title, the content or any
/// tag; an empty term matches everything. Collection order is preserved.
pub fn search_journal<'a>(
    entries: &'a [JournalEntry],
    term: &str,
    band: MoodBand,
) -> Vec<&'a JournalEntry> {
    let needle = term.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| band.contains(entry.mood))
        .filter(|entry| {
            needle.is_empty()
                || entry.title.to_lowercase().contains(&needle)
                || entry.content.to_lowercase().contains(&needle)
                || entry
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .collect()
}

use serde::Serialize;

use crate::model::MoodEntry;

/// Aggregate mood figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodStats {
    pub entries: usize,
    /// 0 when there are no entries
    pub average: f64,
    pub best: Option<u8>,
    pub worst: Option<u8>,
    /// Newest mood minus the one before it; 0 with fewer than two entries
    pub trend: i16,
}

/// Summarize mood entries given newest-first
pub fn mood_stats(entries: &[MoodEntry]) -> MoodStats {
    let average = if entries.is_empty() {
        0.0
    } else {
        entries.iter().map(|e| f64::from(e.mood)).sum::<f64>() / entries.len() as f64
    };

    let trend = match entries {
        [newest, previous, ..] => i16::from(newest.mood) - i16::from(previous.mood),
        _ => 0,
    };

    MoodStats {
        entries: entries.len(),
        average,
        best: entries.iter().map(|e| e.mood).max(),
        worst: entries.iter().map(|e| e.mood).min(),
        trend,
    }
}

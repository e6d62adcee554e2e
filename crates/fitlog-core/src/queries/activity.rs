use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;
use std::str::FromStr;

use crate::errors::FitlogError;
use crate::ops::Store;

/// Window shown on the progress page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    /// Sunday through Saturday of the current week, one bucket per day
    #[default]
    Week,
    /// The 30 days ending today, one bucket per day
    Month,
    /// The 12 calendar months ending with the current one, one bucket per month
    Year,
}

impl FromStr for TimeRange {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            other => Err(FitlogError::invalid_field(
                "range",
                format!("expected week, month or year, got '{}'", other),
            )),
        }
    }
}

/// Activity totals for an inclusive date span
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityBucket {
    /// `yyyy-MM-dd` for day buckets, `yyyy-MM` for month buckets
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub workouts: usize,
    pub calories: u64,
    /// Mood of the newest mood entry inside the span
    pub mood: Option<u8>,
    pub meditation_minutes: u64,
}

impl ActivityBucket {
    fn collect(store: &Store, start: NaiveDate, end: NaiveDate, label: String) -> Self {
        let in_span = |date: NaiveDate| date >= start && date <= end;

        let workouts = store.workouts().iter().filter(|w| in_span(w.date));
        let (count, calories) = workouts.fold((0usize, 0u64), |(n, kcal), w| {
            (n + 1, kcal + u64::from(w.calories))
        });

        // Collections are newest first, so the first hit is the newest entry.
        let mood = store
            .mood_entries()
            .iter()
            .find(|m| in_span(m.date))
            .map(|m| m.mood);

        let meditation_minutes = store
            .meditation_sessions()
            .iter()
            .filter(|s| in_span(s.date))
            .map(|s| u64::from(s.duration))
            .sum();

        Self {
            label,
            start,
            end,
            workouts: count,
            calories,
            mood,
            meditation_minutes,
        }
    }

    fn day(store: &Store, date: NaiveDate) -> Self {
        Self::collect(store, date, date, date.format("%Y-%m-%d").to_string())
    }
}

/// One bucket per day for the `days` days ending at `end`, oldest first
pub fn daily_activity(store: &Store, end: NaiveDate, days: u32) -> Vec<ActivityBucket> {
    (0..days)
        .rev()
        .filter_map(|offset| end.checked_sub_days(Days::new(u64::from(offset))))
        .map(|date| ActivityBucket::day(store, date))
        .collect()
}

pub fn range_activity(store: &Store, range: TimeRange, today: NaiveDate) -> Vec<ActivityBucket> {
    match range {
        TimeRange::Week => {
            let into_week = u64::from(today.weekday().num_days_from_sunday());
            let Some(sunday) = today.checked_sub_days(Days::new(into_week)) else {
                return Vec::new();
            };
            (0..7)
                .filter_map(|offset| sunday.checked_add_days(Days::new(offset)))
                .map(|date| ActivityBucket::day(store, date))
                .collect()
        }
        TimeRange::Month => daily_activity(store, today, 30),
        TimeRange::Year => {
            let Some(this_month) = today.with_day(1) else {
                return Vec::new();
            };
            (0..12)
                .rev()
                .filter_map(|back| this_month.checked_sub_months(Months::new(back)))
                .filter_map(|start| {
                    let end = start
                        .checked_add_months(Months::new(1))?
                        .checked_sub_days(Days::new(1))?;
                    let label = start.format("%Y-%m").to_string();
                    Some(ActivityBucket::collect(store, start, end, label))
                })
                .collect()
        }
    }
}

use chrono::{NaiveDate, Utc};
use fitlog_core::model::{NewWorkout, Workout};
use fitlog_core::{RecordId, Store};

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Build a workout dated on a fixed day, bypassing the store
#[allow(dead_code)]
pub fn workout_on(date: NaiveDate, kind: &str, calories: u32) -> Workout {
    Workout::create(
        RecordId::new(),
        date,
        Utc::now(),
        NewWorkout::new(kind, 30, calories),
    )
}

/// Shorthand for a calendar date
#[allow(dead_code)]
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub mod collection;
pub mod goal_ops;
pub mod journal_ops;
pub mod meditation_ops;
pub mod mood_ops;
pub mod reminder_ops;
pub mod store;
pub mod workout_ops;

pub use collection::Record;
pub use store::Store;

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Creation stamp for a new record: the local calendar day and the UTC instant
/// taken from a single clock read
pub(crate) fn creation_stamp() -> (NaiveDate, DateTime<Utc>) {
    let now = Local::now();
    (now.date_naive(), now.with_timezone(&Utc))
}

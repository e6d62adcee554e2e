use fitlog_core_types::RecordId;

use super::collection::{merge_by_id, prepend, remove_by_id};
use super::{creation_stamp, store::Store};
use crate::model::{NewWorkout, Workout, WorkoutPatch};

/// Log a new workout
///
/// Assigns a UUID v7 id, today's local date and the current instant, then
/// prepends the workout to the collection.
///
/// # Returns
/// A copy of the stored workout
pub fn add_workout(store: &mut Store, fields: NewWorkout) -> Workout {
    let (date, timestamp) = creation_stamp();
    let workout = Workout::create(RecordId::new(), date, timestamp, fields);
    prepend(store, workout).clone()
}

/// Merge a patch into the workout with the given id
///
/// # Returns
/// `true` if a workout matched; `false` leaves the collection unchanged
pub fn update_workout(store: &mut Store, id: &RecordId, patch: WorkoutPatch) -> bool {
    merge_by_id::<Workout, _>(store, id, |workout| workout.apply(patch))
}

/// Delete the workout with the given id
///
/// # Returns
/// `true` if a workout was removed
pub fn delete_workout(store: &mut Store, id: &RecordId) -> bool {
    remove_by_id::<Workout>(store, id)
}

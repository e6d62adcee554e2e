use chrono::Utc;
use fitlog_core_types::RecordId;

use super::collection::{merge_by_id, prepend, remove_by_id};
use super::store::Store;
use crate::model::nullable::finite_or_zero;
use crate::model::{compute_progress, Goal, GoalPatch, NewGoal};

/// Create a new goal
///
/// When `fields.progress` is `None` the progress is computed from
/// `current_value / target_value`; a supplied value is clamped to [0, 100].
pub fn add_goal(store: &mut Store, fields: NewGoal) -> Goal {
    let goal = Goal::create(RecordId::new(), Utc::now(), fields);
    prepend(store, goal).clone()
}

/// Merge a patch into the goal with the given id
///
/// `progress` changes only if the patch carries it.
pub fn update_goal(store: &mut Store, id: &RecordId, patch: GoalPatch) -> bool {
    merge_by_id::<Goal, _>(store, id, |goal| goal.apply(patch))
}

/// Record a new current value for a goal and recompute its progress
///
/// A non-finite value is stored as 0.
///
/// # Returns
/// `true` if a goal matched
pub fn set_goal_value(store: &mut Store, id: &RecordId, current_value: f64) -> bool {
    let current_value = finite_or_zero(current_value);
    merge_by_id::<Goal, _>(store, id, |goal| {
        goal.current_value = current_value;
        goal.progress = compute_progress(current_value, goal.target_value);
    })
}

/// Delete the goal with the given id
pub fn delete_goal(store: &mut Store, id: &RecordId) -> bool {
    remove_by_id::<Goal>(store, id)
}

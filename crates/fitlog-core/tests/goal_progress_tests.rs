mod common;

use common::new_store;
use fitlog_core::model::{GoalPatch, NewGoal};
use fitlog_core::ops::goal_ops;

#[test]
fn test_add_computes_progress_when_omitted() {
    let mut store = new_store();

    let goal = goal_ops::add_goal(&mut store, NewGoal::new("Run 10km", 10.0, 5.0));

    assert_eq!(goal.progress, 50.0);
}

#[test]
fn test_add_with_nonpositive_target_has_zero_progress() {
    let mut store = new_store();

    let goal = goal_ops::add_goal(&mut store, NewGoal::new("Odd", 0.0, 5.0));

    assert_eq!(goal.progress, 0.0);
}

#[test]
fn test_add_clamps_supplied_progress() {
    let mut store = new_store();
    let mut fields = NewGoal::new("Over", 10.0, 5.0);
    fields.progress = Some(140.0);

    let goal = goal_ops::add_goal(&mut store, fields);

    assert_eq!(goal.progress, 100.0);
}

#[test]
fn test_generic_update_does_not_recompute_progress() {
    let mut store = new_store();
    let goal = goal_ops::add_goal(&mut store, NewGoal::new("Run", 10.0, 5.0));

    // Given a patch that only moves current_value
    goal_ops::update_goal(
        &mut store,
        &goal.id,
        GoalPatch {
            current_value: Some(10.0),
            ..Default::default()
        },
    );

    // Then progress is left as stored
    let stored = &store.goals()[0];
    assert_eq!(stored.current_value, 10.0);
    assert_eq!(stored.progress, 50.0);
}

#[test]
fn test_update_with_progress_alongside() {
    let mut store = new_store();
    let goal = goal_ops::add_goal(&mut store, NewGoal::new("Run", 10.0, 5.0));

    goal_ops::update_goal(
        &mut store,
        &goal.id,
        GoalPatch {
            current_value: Some(10.0),
            progress: Some(100.0),
            ..Default::default()
        },
    );

    assert_eq!(store.goals()[0].progress, 100.0);
}

#[test]
fn test_set_goal_value_recomputes_and_caps() {
    let mut store = new_store();
    let goal = goal_ops::add_goal(&mut store, NewGoal::new("Run", 10.0, 5.0));

    assert!(goal_ops::set_goal_value(&mut store, &goal.id, 10.0));
    assert_eq!(store.goals()[0].progress, 100.0);

    assert!(goal_ops::set_goal_value(&mut store, &goal.id, 25.0));
    assert_eq!(store.goals()[0].current_value, 25.0);
    assert_eq!(store.goals()[0].progress, 100.0);
    assert!(store.goals()[0].is_completed());
}

#[test]
fn test_clearing_deadline() {
    let mut store = new_store();
    let mut fields = NewGoal::new("Dated", 1.0, 0.0);
    fields.deadline = Some(common::day(2030, 1, 1));
    let goal = goal_ops::add_goal(&mut store, fields);

    goal_ops::update_goal(
        &mut store,
        &goal.id,
        GoalPatch {
            deadline: Some(None),
            ..Default::default()
        },
    );

    assert_eq!(store.goals()[0].deadline, None);
}

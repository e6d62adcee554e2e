mod common;

use common::new_store;
use fitlog_core::model::{NewWorkout, WorkoutPatch};
use fitlog_core::ops::workout_ops;
use fitlog_core::RecordId;

#[test]
fn test_add_workout_assigns_identity_and_stamps() {
    let mut store = new_store();

    let workout = workout_ops::add_workout(&mut store, NewWorkout::new("Running", 30, 250));

    assert!(!workout.id.as_str().is_empty());
    assert_eq!(workout.kind, "Running");
    assert_eq!(workout.duration, 30);
    assert_eq!(workout.calories, 250);
    assert_eq!(store.workouts().len(), 1);
    assert_eq!(store.workouts()[0], workout);
}

#[test]
fn test_add_prepends_newest_first() {
    let mut store = new_store();

    // Given two workouts added in order A then B
    let a = workout_ops::add_workout(&mut store, NewWorkout::new("A", 10, 50));
    let b = workout_ops::add_workout(&mut store, NewWorkout::new("B", 20, 100));

    // Then B comes first
    let ids: Vec<&RecordId> = store.workouts().iter().map(|w| &w.id).collect();
    assert_eq!(ids, vec![&b.id, &a.id]);
}

#[test]
fn test_update_merges_only_patched_fields() {
    let mut store = new_store();
    let workout = workout_ops::add_workout(
        &mut store,
        NewWorkout::new("Yoga", 10, 80).with_notes("X"),
    );

    // When only the duration is patched
    let matched = workout_ops::update_workout(
        &mut store,
        &workout.id,
        WorkoutPatch {
            duration: Some(20),
            ..Default::default()
        },
    );

    // Then the other fields are untouched
    assert!(matched);
    let updated = &store.workouts()[0];
    assert_eq!(updated.duration, 20);
    assert_eq!(updated.notes, "X");
    assert_eq!(updated.kind, "Yoga");
    assert_eq!(updated.id, workout.id);
    assert_eq!(updated.timestamp, workout.timestamp);
}

#[test]
fn test_update_missing_id_is_noop() {
    let mut store = new_store();
    workout_ops::add_workout(&mut store, NewWorkout::new("Running", 30, 250));
    let before = store.clone();

    let matched = workout_ops::update_workout(
        &mut store,
        &RecordId::from("missing"),
        WorkoutPatch {
            calories: Some(1),
            ..Default::default()
        },
    );

    assert!(!matched);
    assert_eq!(store, before);
}

#[test]
fn test_delete_removes_exactly_one() {
    let mut store = new_store();
    let first = workout_ops::add_workout(&mut store, NewWorkout::new("1", 1, 1));
    let second = workout_ops::add_workout(&mut store, NewWorkout::new("2", 2, 2));
    let third = workout_ops::add_workout(&mut store, NewWorkout::new("3", 3, 3));

    assert!(workout_ops::delete_workout(&mut store, &second.id));

    let ids: Vec<&RecordId> = store.workouts().iter().map(|w| &w.id).collect();
    assert_eq!(ids, vec![&third.id, &first.id]);
    assert!(!workout_ops::delete_workout(&mut store, &second.id));
}

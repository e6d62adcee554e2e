pub mod collection;
pub mod exercise;
pub mod fields;
pub mod goal;
pub mod journal;
pub mod meditation;
pub mod mood;
pub mod nullable;
pub mod reminder;
pub mod workout;

pub use collection::Collection;
pub use exercise::{Difficulty, Exercise, ExerciseCategory};
pub use fields::Fields;
pub use goal::{compute_progress, Goal, GoalPatch, NewGoal, Priority};
pub use journal::{parse_tags, JournalEntry, JournalPatch, NewJournalEntry};
pub use meditation::{MeditationSession, NewMeditationSession};
pub use mood::{MoodEntry, NewMoodEntry};
pub use reminder::Reminder;
pub use workout::{NewWorkout, Workout, WorkoutPatch};

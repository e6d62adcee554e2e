//! Built-in exercise reference catalog
//!
//! Read-only data shipped with the binary; nothing here is persisted.

use serde::Serialize;
use std::str::FromStr;

use crate::errors::FitlogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Flexibility,
}

impl FromStr for ExerciseCategory {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strength" => Ok(ExerciseCategory::Strength),
            "cardio" => Ok(ExerciseCategory::Cardio),
            "flexibility" => Ok(ExerciseCategory::Flexibility),
            other => Err(FitlogError::invalid_field(
                "category",
                format!("expected strength, cardio or flexibility, got '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl FromStr for Difficulty {
    type Err = FitlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(FitlogError::invalid_field(
                "difficulty",
                format!("expected beginner, intermediate or advanced, got '{}'", other),
            )),
        }
    }
}

/// One catalog exercise with its how-to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: u32,
    pub name: &'static str,
    pub category: ExerciseCategory,
    pub difficulty: Difficulty,
    /// Suggested interval length
    pub duration_secs: u32,
    /// Approximate calories burned per interval
    pub calories: u32,
    pub muscles: &'static [&'static str],
    pub instructions: &'static [&'static str],
    pub tips: &'static [&'static str],
}

use Difficulty::{Beginner, Intermediate};
use ExerciseCategory::{Cardio, Strength};

/// The full catalog, ordered by id
pub static EXERCISES: &[Exercise] = &[
    Exercise {
        id: 1,
        name: "Push-ups",
        category: Strength,
        difficulty: Beginner,
        duration_secs: 30,
        calories: 8,
        muscles: &["Chest", "Arms", "Core"],
        instructions: &[
            "Start in a plank position with hands shoulder-width apart",
            "Lower your body until your chest nearly touches the floor",
            "Push back up to the starting position",
            "Keep your body in a straight line throughout the movement",
        ],
        tips: &[
            "Keep your core engaged",
            "Don't let your hips sag",
            "Control the movement, don't rush",
        ],
    },
    Exercise {
        id: 2,
        name: "Squats",
        category: Strength,
        difficulty: Beginner,
        duration_secs: 45,
        calories: 10,
        muscles: &["Legs", "Glutes", "Core"],
        instructions: &[
            "Stand with feet shoulder-width apart",
            "Lower your body by bending your knees and hips",
            "Keep your chest up and knees behind your toes",
            "Return to standing position",
        ],
        tips: &[
            "Keep your weight on your heels",
            "Don't let your knees cave inward",
            "Go as low as you can while maintaining form",
        ],
    },
    Exercise {
        id: 3,
        name: "Burpees",
        category: Cardio,
        difficulty: Intermediate,
        duration_secs: 30,
        calories: 15,
        muscles: &["Full Body"],
        instructions: &[
            "Start in a standing position",
            "Drop into a squat and place hands on the ground",
            "Jump feet back into plank position",
            "Do a push-up, then jump feet back to squat",
            "Jump up with arms overhead",
        ],
        tips: &[
            "Maintain good form even when tired",
            "Modify by stepping back instead of jumping",
            "Keep your core tight throughout",
        ],
    },
    Exercise {
        id: 4,
        name: "Mountain Climbers",
        category: Cardio,
        difficulty: Intermediate,
        duration_secs: 30,
        calories: 12,
        muscles: &["Core", "Arms", "Legs"],
        instructions: &[
            "Start in a plank position",
            "Bring one knee toward your chest",
            "Quickly switch legs, bringing the other knee forward",
            "Continue alternating legs rapidly",
        ],
        tips: &[
            "Keep your hips level",
            "Don't bounce your hips up and down",
            "Maintain a strong plank position",
        ],
    },
    Exercise {
        id: 5,
        name: "Plank",
        category: Strength,
        difficulty: Beginner,
        duration_secs: 60,
        calories: 6,
        muscles: &["Core", "Arms", "Back"],
        instructions: &[
            "Start in a push-up position",
            "Lower to your forearms",
            "Keep your body in a straight line",
            "Hold the position while breathing normally",
        ],
        tips: &[
            "Don't let your hips sag or pike up",
            "Keep your head in neutral position",
            "Breathe steadily throughout the hold",
        ],
    },
    Exercise {
        id: 6,
        name: "Jumping Jacks",
        category: Cardio,
        difficulty: Beginner,
        duration_secs: 45,
        calories: 10,
        muscles: &["Full Body"],
        instructions: &[
            "Stand with feet together and arms at your sides",
            "Jump while spreading your legs shoulder-width apart",
            "Simultaneously raise your arms overhead",
            "Jump back to starting position",
        ],
        tips: &[
            "Land softly on the balls of your feet",
            "Keep your core engaged",
            "Maintain a steady rhythm",
        ],
    },
    Exercise {
        id: 7,
        name: "Lunges",
        category: Strength,
        difficulty: Beginner,
        duration_secs: 45,
        calories: 9,
        muscles: &["Legs", "Glutes", "Core"],
        instructions: &[
            "Stand with feet hip-width apart",
            "Step forward with one leg",
            "Lower your body until both knees are at 90 degrees",
            "Push back to starting position and repeat",
        ],
        tips: &[
            "Keep your front knee over your ankle",
            "Don't let your front knee go past your toes",
            "Keep your torso upright",
        ],
    },
    Exercise {
        id: 8,
        name: "High Knees",
        category: Cardio,
        difficulty: Beginner,
        duration_secs: 30,
        calories: 11,
        muscles: &["Legs", "Core"],
        instructions: &[
            "Stand with feet hip-width apart",
            "Run in place while lifting knees high",
            "Aim to bring knees up to hip level",
            "Pump your arms as you run",
        ],
        tips: &[
            "Stay on the balls of your feet",
            "Keep your core engaged",
            "Maintain an upright posture",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_sequential() {
        for (index, exercise) in EXERCISES.iter().enumerate() {
            assert_eq!(exercise.id as usize, index + 1);
            assert!(!exercise.instructions.is_empty());
        }
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(&EXERCISES[2]).unwrap();
        assert_eq!(value["category"], "cardio");
        assert_eq!(value["difficulty"], "intermediate");
        assert_eq!(value["durationSecs"], 30);
        assert_eq!(value["muscles"][0], "Full Body");
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("Cardio".parse::<ExerciseCategory>().unwrap(), Cardio);
        assert_eq!("advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("yoga".parse::<ExerciseCategory>().is_err());
    }
}

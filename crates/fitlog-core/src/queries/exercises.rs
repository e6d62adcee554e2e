use crate::model::exercise::{Difficulty, Exercise, ExerciseCategory, EXERCISES};

/// Filter the exercise catalog
///
/// The term matches case-insensitively against the name or any worked
/// muscle; an empty term matches everything. `None` filters accept any
/// category or difficulty. Results keep catalog order.
pub fn search_exercises(
    term: &str,
    category: Option<ExerciseCategory>,
    difficulty: Option<Difficulty>,
) -> Vec<&'static Exercise> {
    let needle = term.trim().to_lowercase();
    EXERCISES
        .iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
        .filter(|e| difficulty.map_or(true, |d| e.difficulty == d))
        .filter(|e| {
            needle.is_empty()
                || e.name.to_lowercase().contains(&needle)
                || e.muscles.iter().any(|m| m.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Look up a catalog exercise by id or by case-insensitive name
pub fn find_exercise(key: &str) -> Option<&'static Exercise> {
    let key = key.trim();
    match key.parse::<u32>() {
        Ok(id) => EXERCISES.iter().find(|e| e.id == id),
        Err(_) => EXERCISES.iter().find(|e| e.name.eq_ignore_ascii_case(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(found: &[&Exercise]) -> Vec<&'static str> {
        found.iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_empty_search_returns_whole_catalog() {
        assert_eq!(search_exercises("", None, None).len(), EXERCISES.len());
    }

    #[test]
    fn test_term_matches_muscles() {
        let found = search_exercises("glutes", None, None);
        assert_eq!(names(&found), vec!["Squats", "Lunges"]);
    }

    #[test]
    fn test_filters_combine() {
        let found = search_exercises(
            "core",
            Some(ExerciseCategory::Cardio),
            Some(Difficulty::Intermediate),
        );
        assert_eq!(names(&found), vec!["Mountain Climbers"]);
    }

    #[test]
    fn test_category_without_entries() {
        assert!(search_exercises("", Some(ExerciseCategory::Flexibility), None).is_empty());
    }

    #[test]
    fn test_find_by_id_or_name() {
        assert_eq!(find_exercise("5").map(|e| e.name), Some("Plank"));
        assert_eq!(find_exercise("high knees").map(|e| e.id), Some(8));
        assert!(find_exercise("99").is_none());
    }
}

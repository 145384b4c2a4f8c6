// ABOUTME: Field-level validation rules for exercise sets and workout entries
// ABOUTME: Produces a verdict plus per-field failures, composing set rules into the entry rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Validation rules for incoming payloads
//!
//! Rules are pure functions of their input. The entry validator runs the set
//! validator over every nested set and folds the child failures into its own
//! result under a `sets[i].` prefix.

use crate::constants::limits::{MAX_EXERCISE_NAME_LENGTH, MAX_WORKOUT_NAME_LENGTH};
use crate::models::{ExerciseSet, WorkoutEntry};
use serde::{Deserialize, Serialize};

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Path of the offending field (e.g. `sets[1].weight`)
    pub property: String,
    /// What the rule expected
    pub message: String,
}

/// Validation result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Every violated rule, in evaluation order
    pub failures: Vec<ValidationFailure>,
}

impl ValidationResult {
    /// Create an empty (valid) result
    #[must_use]
    pub const fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Whether all rules passed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Record a violation
    pub fn add_failure(&mut self, property: impl Into<String>, message: impl Into<String>) {
        self.failures.push(ValidationFailure {
            property: property.into(),
            message: message.into(),
        });
    }

    /// Fold a nested result into this one, prefixing its property paths
    pub fn merge_nested(&mut self, prefix: &str, nested: Self) {
        self.failures
            .extend(nested.failures.into_iter().map(|failure| ValidationFailure {
                property: format!("{prefix}.{}", failure.property),
                message: failure.message,
            }));
    }
}

fn check_text(result: &mut ValidationResult, property: &str, value: &str, max_length: usize) {
    if value.is_empty() {
        result.add_failure(property, format!("'{property}' must not be empty."));
        return;
    }

    let length = value.chars().count();
    if length > max_length {
        result.add_failure(
            property,
            format!(
                "The length of '{property}' must be {max_length} characters or fewer. You entered {length} characters."
            ),
        );
    }
}

/// Validate a single exercise set
#[must_use]
#[allow(clippy::float_cmp)] // exact zero is the unset weight
pub fn validate_set(set: &ExerciseSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    if set.repetitions == 0 {
        result.add_failure("repetitions", "'repetitions' must not be empty.");
    }

    if set.weight == 0.0 {
        result.add_failure("weight", "'weight' must not be empty.");
    }

    check_text(
        &mut result,
        "exerciseName",
        &set.exercise_name,
        MAX_EXERCISE_NAME_LENGTH,
    );

    result
}

/// Validate a workout entry together with every set it carries
#[must_use]
pub fn validate_workout_entry(entry: &WorkoutEntry) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_text(&mut result, "name", &entry.name, MAX_WORKOUT_NAME_LENGTH);

    if entry.workout_date.is_unset() {
        result.add_failure("workoutDate", "'workoutDate' must not be empty.");
    }

    for (index, set) in entry.sets.iter().enumerate() {
        result.merge_nested(&format!("sets[{index}]"), validate_set(set));
    }

    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::WorkoutDate;

    fn valid_set() -> ExerciseSet {
        ExerciseSet {
            id: 0,
            exercise_name: "Deadlift".to_owned(),
            repetitions: 5,
            weight: 140.0,
        }
    }

    fn valid_entry() -> WorkoutEntry {
        WorkoutEntry {
            id: 0,
            name: "Pull Day".to_owned(),
            workout_date: WorkoutDate::from_ymd(2024, 3, 14).unwrap(),
            sets: vec![valid_set()],
        }
    }

    #[test]
    fn test_populated_set_is_valid() {
        assert!(validate_set(&valid_set()).is_valid());
    }

    #[test]
    fn test_set_zero_values_are_rejected() {
        let no_reps = ExerciseSet {
            repetitions: 0,
            ..valid_set()
        };
        let no_weight = ExerciseSet {
            weight: 0.0,
            ..valid_set()
        };
        let no_name = ExerciseSet {
            exercise_name: String::new(),
            ..valid_set()
        };

        assert!(!validate_set(&no_reps).is_valid());
        assert!(!validate_set(&no_weight).is_valid());
        assert!(!validate_set(&no_name).is_valid());
    }

    #[test]
    fn test_exercise_name_length_limit() {
        let at_limit = ExerciseSet {
            exercise_name: "a".repeat(MAX_EXERCISE_NAME_LENGTH),
            ..valid_set()
        };
        let over_limit = ExerciseSet {
            exercise_name: "a".repeat(MAX_EXERCISE_NAME_LENGTH + 1),
            ..valid_set()
        };

        assert!(validate_set(&at_limit).is_valid());

        let result = validate_set(&over_limit);
        assert!(!result.is_valid());
        assert_eq!(result.failures[0].property, "exerciseName");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let set = ExerciseSet {
            exercise_name: "ü".repeat(MAX_EXERCISE_NAME_LENGTH),
            ..valid_set()
        };

        assert!(validate_set(&set).is_valid());
    }

    #[test]
    fn test_negative_values_pass_zero_checks() {
        let set = ExerciseSet {
            repetitions: -1,
            weight: -2.5,
            ..valid_set()
        };

        assert!(validate_set(&set).is_valid());
    }

    #[test]
    fn test_populated_entry_is_valid() {
        assert!(validate_workout_entry(&valid_entry()).is_valid());

        let without_sets = WorkoutEntry {
            sets: Vec::new(),
            ..valid_entry()
        };
        assert!(validate_workout_entry(&without_sets).is_valid());
    }

    #[test]
    fn test_entry_name_rules() {
        let empty = WorkoutEntry {
            name: String::new(),
            ..valid_entry()
        };
        let too_long = WorkoutEntry {
            name: "x".repeat(MAX_WORKOUT_NAME_LENGTH + 1),
            ..valid_entry()
        };
        let at_limit = WorkoutEntry {
            name: "x".repeat(MAX_WORKOUT_NAME_LENGTH),
            ..valid_entry()
        };

        assert!(!validate_workout_entry(&empty).is_valid());
        assert!(!validate_workout_entry(&too_long).is_valid());
        assert!(validate_workout_entry(&at_limit).is_valid());
    }

    #[test]
    fn test_entry_requires_date() {
        let entry = WorkoutEntry {
            workout_date: WorkoutDate::unset(),
            ..valid_entry()
        };

        let result = validate_workout_entry(&entry);
        assert!(!result.is_valid());
        assert_eq!(result.failures[0].property, "workoutDate");
    }

    #[test]
    fn test_invalid_child_fails_parent_with_indexed_path() {
        let entry = WorkoutEntry {
            sets: vec![
                valid_set(),
                ExerciseSet {
                    repetitions: 0,
                    ..valid_set()
                },
            ],
            ..valid_entry()
        };

        let result = validate_workout_entry(&entry);
        assert!(!result.is_valid());
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].property, "sets[1].repetitions");
    }

    #[test]
    fn test_all_failures_are_collected() {
        let entry = WorkoutEntry {
            id: 0,
            name: String::new(),
            workout_date: WorkoutDate::unset(),
            sets: vec![ExerciseSet::default()],
        };

        let properties: Vec<_> = validate_workout_entry(&entry)
            .failures
            .into_iter()
            .map(|failure| failure.property)
            .collect();

        assert_eq!(
            properties,
            vec![
                "name",
                "workoutDate",
                "sets[0].repetitions",
                "sets[0].weight",
                "sets[0].exerciseName"
            ]
        );
    }
}

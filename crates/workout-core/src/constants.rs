// ABOUTME: Application constants for field limits and resource locations
// ABOUTME: Shared between validation rules and HTTP handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Field limits enforced by the validation rules
pub mod limits {
    /// Maximum number of characters in a workout entry name
    pub const MAX_WORKOUT_NAME_LENGTH: usize = 300;

    /// Maximum number of characters in an exercise name
    pub const MAX_EXERCISE_NAME_LENGTH: usize = 150;
}

/// Location header templates returned by create operations
pub mod locations {
    /// Location of a newly created workout entry
    #[must_use]
    pub fn workout_entry(id: i64) -> String {
        format!("/workoutEntries/{id}")
    }

    /// Location of a newly created set under its parent entry
    #[must_use]
    pub fn exercise_set(workout_entry_id: i64, set_id: i64) -> String {
        format!("/workoutEntry/{workout_entry_id}/set/{set_id}")
    }
}

/// Date-time formats accepted and produced for `workoutDate`
pub mod date_formats {
    /// Canonical output format (fraction omitted when zero)
    pub const OUTPUT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    /// Naive date-time input formats, tried in order
    pub const DATE_TIME_INPUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    /// Date-only input format
    pub const DATE_INPUT: &str = "%Y-%m-%d";
}

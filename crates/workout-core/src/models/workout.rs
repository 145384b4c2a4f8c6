// ABOUTME: Workout entry and exercise set models with their JSON wire representation
// ABOUTME: Handles lenient date parsing and null-tolerant field decoding for request bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::date_formats;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single logged workout session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkoutEntry {
    /// Store-assigned identifier (`0` until persisted)
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Display name of the workout
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// When the workout took place
    pub workout_date: WorkoutDate,
    /// Exercise sets owned by this entry, in store order
    #[serde(deserialize_with = "null_as_default")]
    pub sets: Vec<ExerciseSet>,
}

impl WorkoutEntry {
    /// Find a set in this entry by its identifier
    #[must_use]
    pub fn find_set(&self, set_id: i64) -> Option<&ExerciseSet> {
        self.sets.iter().find(|set| set.id == set_id)
    }

    /// Find a set in this entry by its identifier for in-place modification
    pub fn find_set_mut(&mut self, set_id: i64) -> Option<&mut ExerciseSet> {
        self.sets.iter_mut().find(|set| set.id == set_id)
    }

    /// Detach a set from this entry, returning it if it was present
    pub fn remove_set(&mut self, set_id: i64) -> Option<ExerciseSet> {
        let index = self.sets.iter().position(|set| set.id == set_id)?;
        Some(self.sets.remove(index))
    }

    /// Overwrite name, date, and sets from `candidate`, keeping this entry's identity
    pub fn replace_contents(&mut self, candidate: Self) {
        self.name = candidate.name;
        self.workout_date = candidate.workout_date;
        self.sets = candidate.sets;
    }
}

/// One recorded exercise within a workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExerciseSet {
    /// Store-assigned identifier (`0` until persisted)
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Name of the exercise performed
    #[serde(deserialize_with = "null_as_default")]
    pub exercise_name: String,
    /// Number of repetitions
    #[serde(deserialize_with = "null_as_default")]
    pub repetitions: i32,
    /// Weight moved
    #[serde(deserialize_with = "null_as_default")]
    pub weight: f64,
}

impl ExerciseSet {
    /// Overwrite the mutable fields from `candidate`; the identifier never changes
    pub fn apply_update(&mut self, candidate: &Self) {
        self.exercise_name.clone_from(&candidate.exercise_name);
        self.repetitions = candidate.repetitions;
        self.weight = candidate.weight;
    }
}

/// Treat an explicit JSON `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error returned when a workout date string matches none of the accepted formats
#[derive(Debug, Clone, Error)]
#[error("unrecognized workout date '{0}'")]
pub struct WorkoutDateParseError(String);

/// Date and time of a workout
///
/// The zero value (`0001-01-01T00:00:00`) marks a date that was never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutDate(NaiveDateTime);

impl WorkoutDate {
    /// Date-time at midnight of the given calendar day
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self)
    }

    /// The zero value
    #[must_use]
    pub fn unset() -> Self {
        Self::from_ymd(1, 1, 1).unwrap_or(Self(NaiveDateTime::MIN))
    }

    /// Whether this date still holds the zero value
    #[must_use]
    pub fn is_unset(&self) -> bool {
        *self <= Self::unset()
    }
}

impl Default for WorkoutDate {
    fn default() -> Self {
        Self::unset()
    }
}

impl fmt::Display for WorkoutDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(date_formats::OUTPUT))
    }
}

impl FromStr for WorkoutDate {
    type Err = WorkoutDateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        for format in date_formats::DATE_TIME_INPUTS {
            if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(value));
            }
        }

        if let Ok(value) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(value.naive_utc()));
        }

        NaiveDate::parse_from_str(trimmed, date_formats::DATE_INPUT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self)
            .ok_or_else(|| WorkoutDateParseError(trimmed.to_owned()))
    }
}

impl Serialize for WorkoutDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WorkoutDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => raw.parse().map_err(serde::de::Error::custom),
            None => Ok(Self::unset()),
        }
    }
}

// ABOUTME: Core data models for the workout tracking API
// ABOUTME: Re-exports workout entries, exercise sets, and the workout date wrapper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod workout;

pub use workout::{ExerciseSet, WorkoutDate, WorkoutEntry};

// ABOUTME: Validation rules for workout entries and exercise sets
// ABOUTME: Re-exported from workout-core for use by the HTTP handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::validation::*;

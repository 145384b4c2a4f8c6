// ABOUTME: Domain models for workout entries and exercise sets
// ABOUTME: Re-exported from workout-core so handlers and storage share one definition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::models::*;

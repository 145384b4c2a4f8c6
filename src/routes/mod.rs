// ABOUTME: Route module organization for the workout API HTTP endpoints
// ABOUTME: Groups workout entry, exercise set, and health routes with their shared response type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the workout API
//!
//! Each domain module contains only route definitions and thin handlers that
//! validate input and delegate to the repository.

/// Health check and readiness routes
pub mod health;
/// Typed handler results and their HTTP rendering
pub mod outcome;
/// Exercise set routes scoped under a workout entry
pub mod sets;
/// Workout entry CRUD routes
pub mod workout_entries;

/// Health route handlers
pub use health::HealthRoutes;
/// Handler result type
pub use outcome::ApiOutcome;
/// Exercise set route handlers
pub use sets::SetRoutes;
/// Workout entry route handlers
pub use workout_entries::WorkoutEntryRoutes;

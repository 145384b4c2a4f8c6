// ABOUTME: Data access layer between HTTP handlers and the storage backends
// ABOUTME: Exposes the workout entry repository and the storage error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! Handlers talk to repositories; repositories talk to a
//! [`crate::database_plugins::factory::Database`].

/// Structured storage errors
pub mod errors;

/// Repository traits and their implementations
pub mod repositories;

pub use errors::DatabaseError;
pub use repositories::{WorkoutEntryRepository, WorkoutEntryRepositoryImpl};

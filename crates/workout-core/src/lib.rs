// ABOUTME: Core types and rules for the workout tracking API
// ABOUTME: Foundation crate with error handling, domain models, validation, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing the shared types of the workout tracking API.
//! It is designed to change infrequently so the service crate can rebuild
//! incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DatabaseError`
//! - **models**: `WorkoutEntry`, `ExerciseSet`, and the `WorkoutDate` wrapper
//! - **validation**: Field rules for sets and workout entries
//! - **constants**: Field limits and route templates

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (workout entries and their exercise sets)
pub mod models;

/// Field-level validation rules for incoming entries and sets
pub mod validation;

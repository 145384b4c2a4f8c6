// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, storage and resource builders, and sample workout data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `workout_api`

use anyhow::Result;
use std::sync::{Arc, Once};
use workout_api::{
    config::environment::{Environment, ServerConfig},
    database_plugins::factory::Database,
    models::{ExerciseSet, WorkoutDate, WorkoutEntry},
    resources::ServerResources,
    server::build_router,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration used by route tests
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        ..ServerConfig::default()
    }
}

/// Fresh memory store
pub fn create_memory_database() -> Database {
    init_test_logging();
    Database::memory()
}

/// Fresh private `SQLite` database
pub async fn create_sqlite_database() -> Result<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}

/// Resources over the given database
pub fn create_resources(database: Database) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(database, Arc::new(test_config())))
}

/// Full application router over a fresh memory store
pub fn create_test_app() -> (axum::Router, Arc<ServerResources>) {
    let resources = create_resources(create_memory_database());
    (build_router(&resources), resources)
}

/// Full application router over a fresh `SQLite` database
pub async fn create_sqlite_test_app() -> Result<(axum::Router, Arc<ServerResources>)> {
    let resources = create_resources(create_sqlite_database().await?);
    Ok((build_router(&resources), resources))
}

/// A valid set with no id
pub fn sample_set(exercise_name: &str, repetitions: i32, weight: f64) -> ExerciseSet {
    ExerciseSet {
        id: 0,
        exercise_name: exercise_name.to_owned(),
        repetitions,
        weight,
    }
}

/// A valid entry with no id
pub fn sample_entry(name: &str, sets: Vec<ExerciseSet>) -> WorkoutEntry {
    WorkoutEntry {
        id: 0,
        name: name.to_owned(),
        workout_date: WorkoutDate::from_ymd(2024, 1, 1).unwrap_or_default(),
        sets,
    }
}

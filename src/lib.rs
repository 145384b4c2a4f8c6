// ABOUTME: Main library entry point for the workout API
// ABOUTME: Provides REST endpoints for workout entries and their exercise sets over pluggable storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout API
//!
//! A small REST service for logging workouts. Each workout entry has a name,
//! a date, and an ordered list of exercise sets it owns.
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers that validate, look up, and commit
//! - **Validation**: pure rule functions from `workout-core`
//! - **Database**: a unit-of-work repository staging writes until commit
//! - **Database plugins**: memory and `SQLite` storage behind one trait
//! - **Config**: environment-driven server configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use workout_api::config::environment::ServerConfig;
//! use workout_api::database_plugins::factory::Database;
//! use workout_api::resources::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::from_url(&config.database.url).await?;
//!     let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
//!     workout_api::server::run(resources).await
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and environment readers
pub mod constants;

/// Repository layer over the storage backends
pub mod database;

/// Pluggable storage backends
pub mod database_plugins;

/// Error taxonomy
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Domain models
pub mod models;

/// Shared handler state
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Router assembly and serve loop
pub mod server;

/// Validation rules
pub mod validation;

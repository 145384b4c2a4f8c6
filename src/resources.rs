// ABOUTME: Shared server resources handed to every route group as axum state
// ABOUTME: Holds the storage backend and configuration and builds per-request repositories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::ServerConfig;
use crate::database::WorkoutEntryRepositoryImpl;
use crate::database_plugins::factory::Database;
use std::sync::Arc;

/// Resources shared by all handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Storage backend
    pub database: Arc<Database>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self {
            database: Arc::new(database),
            config,
        }
    }

    /// Fresh unit of work for one request
    #[must_use]
    pub fn repository(&self) -> WorkoutEntryRepositoryImpl {
        WorkoutEntryRepositoryImpl::new(Database::clone(&self.database))
    }
}

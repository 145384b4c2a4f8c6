// ABOUTME: Database factory and provider abstraction for multi-backend support
// ABOUTME: Selects the memory store or SQLite at runtime from the configured URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Database factory for creating storage providers
//!
//! This module provides backend detection from connection strings and an enum
//! wrapper that delegates to the selected implementation.

use super::memory::MemoryDatabase;
use super::sqlite::SqliteDatabase;
use super::{AppliedChanges, StagedChange, WorkoutStore};
use crate::config::environment::DatabaseUrl;
use crate::errors::DatabaseError;
use crate::models::WorkoutEntry;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// In-process memory store
    Memory,
    /// `SQLite` through sqlx
    SQLite,
}

/// Database instance wrapper that delegates to the appropriate implementation
#[derive(Clone)]
pub enum Database {
    /// In-process memory store
    Memory(MemoryDatabase),
    /// `SQLite` backend
    SQLite(SqliteDatabase),
}

impl Database {
    /// Get a descriptive string for the current database backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "Memory (In-Process)",
            Self::SQLite(_) => "SQLite (Embedded)",
        }
    }

    /// Get the database type enum
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::Memory(_) => DatabaseType::Memory,
            Self::SQLite(_) => DatabaseType::SQLite,
        }
    }

    /// Create a fresh, empty in-process store
    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(MemoryDatabase::new())
    }

    /// Create a new database instance based on the connection string
    ///
    /// # Errors
    ///
    /// Returns an error if the URL names an unsupported backend, the
    /// connection fails, or the schema cannot be created
    pub async fn new(database_url: &str) -> Result<Self> {
        debug!("Detecting database type from URL: {}", database_url);
        let url = DatabaseUrl::parse_url(database_url)?;
        Self::from_url(&url).await
    }

    /// Create a new database instance from a parsed URL
    ///
    /// # Errors
    ///
    /// Returns an error if the `SQLite` connection or schema setup fails
    pub async fn from_url(url: &DatabaseUrl) -> Result<Self> {
        let db_type = detect_database_type(url);
        info!("Detected database type: {:?}", db_type);

        match url {
            DatabaseUrl::Memory => {
                info!("Initializing in-process memory store");
                Ok(Self::memory())
            }
            DatabaseUrl::SQLite { connection_string } => {
                info!("Initializing SQLite database");
                let db = SqliteDatabase::new(connection_string).await?;
                info!("SQLite database initialized successfully");
                Ok(Self::SQLite(db))
            }
        }
    }
}

/// Map a parsed URL to its backend type
#[must_use]
pub const fn detect_database_type(url: &DatabaseUrl) -> DatabaseType {
    match url {
        DatabaseUrl::Memory => DatabaseType::Memory,
        DatabaseUrl::SQLite { .. } => DatabaseType::SQLite,
    }
}

// Implement WorkoutStore for the enum by delegating to the appropriate implementation
#[async_trait]
impl WorkoutStore for Database {
    async fn load_all(&self) -> Result<Vec<WorkoutEntry>, DatabaseError> {
        match self {
            Self::Memory(db) => db.load_all().await,
            Self::SQLite(db) => db.load_all().await,
        }
    }

    async fn load(&self, id: i64) -> Result<Option<WorkoutEntry>, DatabaseError> {
        match self {
            Self::Memory(db) => db.load(id).await,
            Self::SQLite(db) => db.load(id).await,
        }
    }

    async fn apply(&self, changes: Vec<StagedChange>) -> Result<AppliedChanges, DatabaseError> {
        match self {
            Self::Memory(db) => db.apply(changes).await,
            Self::SQLite(db) => db.apply(changes).await,
        }
    }
}

// ABOUTME: Storage abstraction layer for the workout API
// ABOUTME: Plugin architecture with an in-process memory store and a SQLite backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Storage backends behind a single trait
//!
//! A backend only has to read entries (with their sets populated) and apply a
//! batch of staged changes atomically. Everything above this seam, including
//! the repository's unit-of-work staging, is backend-agnostic.

use crate::errors::DatabaseError;
use crate::models::{ExerciseSet, WorkoutEntry};
use async_trait::async_trait;

pub mod factory;
pub mod memory;
pub mod sqlite;

/// A change staged by the repository and applied on commit
///
/// Entry-level changes carry the whole entry. Set-level changes touch a single
/// row so that concurrent writers to the same entry never overwrite each
/// other's sets.
#[derive(Debug, Clone, PartialEq)]
pub enum StagedChange {
    /// Insert a new entry; client-supplied entry and set ids are ignored
    Create(WorkoutEntry),
    /// Replace name, date, and sets of an existing entry
    Update(WorkoutEntry),
    /// Remove an entry together with its sets
    Delete(i64),
    /// Append one set to an existing entry; the client-supplied set id is ignored
    AddSet {
        /// Owning entry
        entry_id: i64,
        /// Set to insert
        set: ExerciseSet,
    },
    /// Overwrite the fields of one set the entry already owns
    UpdateSet {
        /// Owning entry
        entry_id: i64,
        /// New field values, keyed by `set.id`
        set: ExerciseSet,
    },
    /// Remove one set from its entry
    RemoveSet {
        /// Owning entry
        entry_id: i64,
        /// Set to remove
        set_id: i64,
    },
}

impl StagedChange {
    /// Short operation name for logging
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
            Self::AddSet { .. } => "add_set",
            Self::UpdateSet { .. } => "update_set",
            Self::RemoveSet { .. } => "remove_set",
        }
    }
}

/// What a successful batch persisted, in staging order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedChanges {
    /// Stored form of every created or updated entry
    pub entries: Vec<WorkoutEntry>,
    /// Stored form of every added or updated set
    pub sets: Vec<ExerciseSet>,
}

/// Core storage abstraction trait
///
/// All storage implementations provide the same three operations so the
/// repository and handlers never know which engine is behind them.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Every entry with its sets populated, ordered by id
    async fn load_all(&self) -> Result<Vec<WorkoutEntry>, DatabaseError>;

    /// One entry with its sets populated
    async fn load(&self, id: i64) -> Result<Option<WorkoutEntry>, DatabaseError>;

    /// Apply all changes atomically
    ///
    /// Returns the persisted form of every created or updated entry and set,
    /// in the order the changes were staged. Removals contribute nothing.
    ///
    /// # Errors
    ///
    /// Fails without applying anything if any change references a vanished
    /// entry or set, names a set that does not belong to its entry, or if the
    /// engine rejects the write.
    async fn apply(&self, changes: Vec<StagedChange>) -> Result<AppliedChanges, DatabaseError>;
}

/// Error for an update that names a set its entry does not own, or names one twice
pub(crate) fn foreign_set_violation(entry_id: i64, set_id: i64) -> DatabaseError {
    DatabaseError::ConstraintViolation {
        constraint: "exercise_sets.workout_entry_id".to_owned(),
        details: format!("set {set_id} does not belong to workout entry {entry_id}"),
    }
}

/// Error for a change naming an entry that no longer exists
pub(crate) fn missing_entry(entry_id: i64) -> DatabaseError {
    DatabaseError::NotFound {
        entity_type: "WorkoutEntry",
        entity_id: entry_id.to_string(),
    }
}

/// Error for a set change naming a set its entry does not hold
pub(crate) fn missing_set(set_id: i64) -> DatabaseError {
    DatabaseError::NotFound {
        entity_type: "ExerciseSet",
        entity_id: set_id.to_string(),
    }
}

// ABOUTME: Workout entry repository implementation staging writes until commit
// ABOUTME: Delegates reads and atomic batch application to the configured storage backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WorkoutEntryRepository;
use crate::database::DatabaseError;
use crate::database_plugins::factory::Database;
use crate::database_plugins::{AppliedChanges, StagedChange, WorkoutStore};
use crate::models::{ExerciseSet, WorkoutEntry};
use async_trait::async_trait;
use std::mem;
use tracing::debug;

/// Memory/SQLite implementation of `WorkoutEntryRepository`
pub struct WorkoutEntryRepositoryImpl {
    db: Database,
    staged: Vec<StagedChange>,
}

impl WorkoutEntryRepositoryImpl {
    /// Create a new repository with an empty change set
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self {
            db,
            staged: Vec::new(),
        }
    }
}

#[async_trait]
impl WorkoutEntryRepository for WorkoutEntryRepositoryImpl {
    async fn list_all(&self) -> Result<Vec<WorkoutEntry>, DatabaseError> {
        self.db.load_all().await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<WorkoutEntry>, DatabaseError> {
        self.db.load(id).await
    }

    fn create(&mut self, entry: WorkoutEntry) {
        self.staged.push(StagedChange::Create(entry));
    }

    fn update(&mut self, entry: WorkoutEntry) {
        self.staged.push(StagedChange::Update(entry));
    }

    fn delete(&mut self, entry: &WorkoutEntry) {
        self.staged.push(StagedChange::Delete(entry.id));
    }

    fn add_set(&mut self, entry_id: i64, set: ExerciseSet) {
        self.staged.push(StagedChange::AddSet { entry_id, set });
    }

    fn update_set(&mut self, entry_id: i64, set: ExerciseSet) {
        self.staged.push(StagedChange::UpdateSet { entry_id, set });
    }

    fn remove_set(&mut self, entry_id: i64, set_id: i64) {
        self.staged.push(StagedChange::RemoveSet { entry_id, set_id });
    }

    fn pending(&self) -> usize {
        self.staged.len()
    }

    async fn commit(&mut self) -> Result<AppliedChanges, DatabaseError> {
        let changes = mem::take(&mut self.staged);
        if changes.is_empty() {
            return Ok(AppliedChanges::default());
        }

        debug!(
            changes = changes.len(),
            backend = self.db.backend_info(),
            "Committing staged workout changes"
        );
        self.db.apply(changes).await
    }
}

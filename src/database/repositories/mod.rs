// ABOUTME: Repository traits that decouple handlers from the storage engine
// ABOUTME: Defines the workout entry unit of work and re-exports its implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod workout_entry_repository;

pub use workout_entry_repository::WorkoutEntryRepositoryImpl;

use crate::database::DatabaseError;
use crate::database_plugins::AppliedChanges;
use crate::models::{ExerciseSet, WorkoutEntry};
use async_trait::async_trait;

/// Unit of work over workout entries
///
/// Reads go straight to the store. Writes are staged and only reach the store
/// when [`commit`](Self::commit) runs; dropping the repository discards them.
#[async_trait]
pub trait WorkoutEntryRepository: Send + Sync {
    /// All entries with their sets, ordered by id
    async fn list_all(&self) -> Result<Vec<WorkoutEntry>, DatabaseError>;

    /// One entry with its sets, or `None` if no entry has this id
    async fn get_by_id(&self, id: i64) -> Result<Option<WorkoutEntry>, DatabaseError>;

    /// Stage a new entry; its id and set ids are assigned on commit
    fn create(&mut self, entry: WorkoutEntry);

    /// Stage the modified form of an entry previously read from this repository
    fn update(&mut self, entry: WorkoutEntry);

    /// Stage removal of an entry and, by cascade, its sets
    fn delete(&mut self, entry: &WorkoutEntry);

    /// Stage a new set under an existing entry; its id is assigned on commit
    fn add_set(&mut self, entry_id: i64, set: ExerciseSet);

    /// Stage new field values for the set `set.id` owned by `entry_id`
    fn update_set(&mut self, entry_id: i64, set: ExerciseSet);

    /// Stage removal of one set from its entry
    fn remove_set(&mut self, entry_id: i64, set_id: i64);

    /// Number of changes waiting for commit
    fn pending(&self) -> usize;

    /// Flush staged changes to the store atomically
    ///
    /// Returns the persisted form of each created or updated entry and set
    /// in the order it was staged.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write; nothing is applied
    async fn commit(&mut self) -> Result<AppliedChanges, DatabaseError>;
}

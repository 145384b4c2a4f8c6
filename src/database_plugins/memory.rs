// ABOUTME: In-process storage backend holding workout entries in a shared ordered map
// ABOUTME: Applies staged change batches atomically through a copy-on-touch overlay merged on success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{
    foreign_set_violation, missing_entry, missing_set, AppliedChanges, StagedChange, WorkoutStore,
};
use crate::errors::DatabaseError;
use crate::models::{ExerciseSet, WorkoutEntry};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug)]
struct MemoryState {
    entries: BTreeMap<i64, WorkoutEntry>,
    next_entry_id: i64,
    next_set_id: i64,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_entry_id: 1,
            next_set_id: 1,
        }
    }
}

/// Changes of one batch, layered over the committed state
///
/// Only entries the batch touches are copied. `None` in `touched` marks a
/// deleted entry.
struct PendingBatch<'a> {
    base: &'a MemoryState,
    touched: BTreeMap<i64, Option<WorkoutEntry>>,
    next_entry_id: i64,
    next_set_id: i64,
}

impl<'a> PendingBatch<'a> {
    fn new(base: &'a MemoryState) -> Self {
        Self {
            base,
            touched: BTreeMap::new(),
            next_entry_id: base.next_entry_id,
            next_set_id: base.next_set_id,
        }
    }

    fn allocate_entry_id(&mut self) -> i64 {
        let id = self.next_entry_id;
        self.next_entry_id += 1;
        id
    }

    fn allocate_set_id(&mut self) -> i64 {
        let id = self.next_set_id;
        self.next_set_id += 1;
        id
    }

    fn entry_mut(&mut self, id: i64) -> Result<&mut WorkoutEntry, DatabaseError> {
        if !self.touched.contains_key(&id) {
            let copy = self
                .base
                .entries
                .get(&id)
                .cloned()
                .ok_or_else(|| missing_entry(id))?;
            self.touched.insert(id, Some(copy));
        }
        self.touched
            .get_mut(&id)
            .and_then(Option::as_mut)
            .ok_or_else(|| missing_entry(id))
    }

    fn insert(&mut self, candidate: WorkoutEntry) -> WorkoutEntry {
        let id = self.allocate_entry_id();
        let sets = candidate
            .sets
            .into_iter()
            .map(|set| ExerciseSet {
                id: self.allocate_set_id(),
                ..set
            })
            .collect();

        let entry = WorkoutEntry {
            id,
            name: candidate.name,
            workout_date: candidate.workout_date,
            sets,
        };
        self.touched.insert(id, Some(entry.clone()));
        entry
    }

    fn update(&mut self, candidate: WorkoutEntry) -> Result<WorkoutEntry, DatabaseError> {
        let owned_ids: HashSet<i64> = self
            .entry_mut(candidate.id)?
            .sets
            .iter()
            .map(|set| set.id)
            .collect();

        let mut seen = HashSet::new();
        let mut sets = Vec::with_capacity(candidate.sets.len());
        for set in candidate.sets {
            if set.id == 0 {
                sets.push(ExerciseSet {
                    id: self.allocate_set_id(),
                    ..set
                });
                continue;
            }
            if !owned_ids.contains(&set.id) || !seen.insert(set.id) {
                return Err(foreign_set_violation(candidate.id, set.id));
            }
            sets.push(set);
        }
        sets.sort_by_key(|set| set.id);

        let entry = self.entry_mut(candidate.id)?;
        entry.name = candidate.name;
        entry.workout_date = candidate.workout_date;
        entry.sets = sets;
        Ok(entry.clone())
    }

    fn delete(&mut self, id: i64) -> Result<(), DatabaseError> {
        self.entry_mut(id)?;
        self.touched.insert(id, None);
        Ok(())
    }

    fn add_set(&mut self, entry_id: i64, set: ExerciseSet) -> Result<ExerciseSet, DatabaseError> {
        self.entry_mut(entry_id)?;
        let stored = ExerciseSet {
            id: self.allocate_set_id(),
            ..set
        };
        // fresh ids are the largest, so pushing keeps id order
        self.entry_mut(entry_id)?.sets.push(stored.clone());
        Ok(stored)
    }

    fn update_set(
        &mut self,
        entry_id: i64,
        set: &ExerciseSet,
    ) -> Result<ExerciseSet, DatabaseError> {
        let target = self
            .entry_mut(entry_id)?
            .find_set_mut(set.id)
            .ok_or_else(|| missing_set(set.id))?;
        target.apply_update(set);
        Ok(target.clone())
    }

    fn remove_set(&mut self, entry_id: i64, set_id: i64) -> Result<(), DatabaseError> {
        self.entry_mut(entry_id)?
            .remove_set(set_id)
            .map(|_| ())
            .ok_or_else(|| missing_set(set_id))
    }

    fn stage(
        &mut self,
        change: StagedChange,
        applied: &mut AppliedChanges,
    ) -> Result<(), DatabaseError> {
        match change {
            StagedChange::Create(candidate) => applied.entries.push(self.insert(candidate)),
            StagedChange::Update(candidate) => applied.entries.push(self.update(candidate)?),
            StagedChange::Delete(id) => self.delete(id)?,
            StagedChange::AddSet { entry_id, set } => {
                applied.sets.push(self.add_set(entry_id, set)?);
            }
            StagedChange::UpdateSet { entry_id, set } => {
                applied.sets.push(self.update_set(entry_id, &set)?);
            }
            StagedChange::RemoveSet { entry_id, set_id } => self.remove_set(entry_id, set_id)?,
        }
        Ok(())
    }

    fn into_parts(self) -> (BTreeMap<i64, Option<WorkoutEntry>>, i64, i64) {
        (self.touched, self.next_entry_id, self.next_set_id)
    }
}

/// Memory-backed store; clones share the same state
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryDatabase {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub async fn entry_count(&self) -> usize {
        self.state.read().await.entries.len()
    }
}

#[async_trait]
impl WorkoutStore for MemoryDatabase {
    async fn load_all(&self) -> Result<Vec<WorkoutEntry>, DatabaseError> {
        Ok(self.state.read().await.entries.values().cloned().collect())
    }

    async fn load(&self, id: i64) -> Result<Option<WorkoutEntry>, DatabaseError> {
        Ok(self.state.read().await.entries.get(&id).cloned())
    }

    async fn apply(&self, changes: Vec<StagedChange>) -> Result<AppliedChanges, DatabaseError> {
        let mut guard = self.state.write().await;
        let mut applied = AppliedChanges::default();

        let mut batch = PendingBatch::new(&*guard);
        for change in changes {
            debug!(operation = change.operation(), "Applying staged change to memory store");
            batch.stage(change, &mut applied)?;
        }
        let (touched, next_entry_id, next_set_id) = batch.into_parts();

        for (id, slot) in touched {
            match slot {
                Some(entry) => guard.entries.insert(id, entry),
                None => guard.entries.remove(&id),
            };
        }
        guard.next_entry_id = next_entry_id;
        guard.next_set_id = next_set_id;

        Ok(applied)
    }
}

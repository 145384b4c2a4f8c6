// ABOUTME: Route handlers for exercise sets nested under a workout entry
// ABOUTME: Appends, updates, and removes sets in their parent's collection and commits the parent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise set routes
//!
//! Sets are only reachable through their parent entry. A 404 carries the
//! parent id when the entry is missing and the set id when the entry exists
//! but the set does not.

use crate::{
    constants::locations,
    database::{WorkoutEntryRepository, WorkoutEntryRepositoryImpl},
    errors::{AppError, AppResult},
    models::ExerciseSet,
    resources::ServerResources,
    routes::ApiOutcome,
    validation::validate_set,
};
use axum::{
    extract::{Path, State},
    routing::{post, put},
    Json, Router,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Exercise set routes handler
pub struct SetRoutes;

impl SetRoutes {
    /// Create all exercise set routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/workoutEntry/:id/set",
                post(Self::handle_create).put(Self::handle_update_by_body),
            )
            .route(
                "/workoutEntry/:id/set/:set_id",
                put(Self::handle_update).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle POST /workoutEntry/:id/set - Append a set to an entry
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Path(entry_id): Path<i64>,
        Json(candidate): Json<ExerciseSet>,
    ) -> AppResult<ApiOutcome<ExerciseSet>> {
        let verdict = validate_set(&candidate);
        if !verdict.is_valid() {
            debug!(workout_entry_id = entry_id, failures = ?verdict.failures, "Rejected exercise set");
            return Ok(ApiOutcome::BadRequest(candidate));
        }

        let mut repository = resources.repository();
        if repository.get_by_id(entry_id).await?.is_none() {
            warn!(workout_entry_id = entry_id, "Parent workout entry not found");
            return Ok(ApiOutcome::NotFound(entry_id));
        }

        repository.add_set(entry_id, candidate);
        let stored = repository
            .commit()
            .await?
            .sets
            .into_iter()
            .next()
            .ok_or_else(|| AppError::internal("Commit returned no stored exercise set"))?;

        info!(
            workout_entry_id = entry_id,
            set_id = stored.id,
            "Created exercise set"
        );
        Ok(ApiOutcome::Created {
            location: locations::exercise_set(entry_id, stored.id),
            body: stored,
        })
    }

    /// Handle PUT /workoutEntry/:id/set/:set_id - Update the set named in the path
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path((entry_id, set_id)): Path<(i64, i64)>,
        Json(candidate): Json<ExerciseSet>,
    ) -> AppResult<ApiOutcome<ExerciseSet>> {
        Self::update_set(resources.repository(), entry_id, set_id, candidate).await
    }

    /// Handle PUT /workoutEntry/:id/set - Update the set named by the body id
    async fn handle_update_by_body(
        State(resources): State<Arc<ServerResources>>,
        Path(entry_id): Path<i64>,
        Json(candidate): Json<ExerciseSet>,
    ) -> AppResult<ApiOutcome<ExerciseSet>> {
        let set_id = candidate.id;
        Self::update_set(resources.repository(), entry_id, set_id, candidate).await
    }

    /// Validate the body as received, then target `set_id` within the entry
    async fn update_set(
        mut repository: WorkoutEntryRepositoryImpl,
        entry_id: i64,
        set_id: i64,
        candidate: ExerciseSet,
    ) -> AppResult<ApiOutcome<ExerciseSet>> {
        let verdict = validate_set(&candidate);
        if !verdict.is_valid() {
            debug!(
                workout_entry_id = entry_id,
                set_id,
                failures = ?verdict.failures,
                "Rejected exercise set update"
            );
            return Ok(ApiOutcome::BadRequest(candidate));
        }

        let Some(entry) = repository.get_by_id(entry_id).await? else {
            warn!(workout_entry_id = entry_id, "Parent workout entry not found");
            return Ok(ApiOutcome::NotFound(entry_id));
        };

        if entry.find_set(set_id).is_none() {
            warn!(workout_entry_id = entry_id, set_id, "Exercise set not found");
            return Ok(ApiOutcome::NotFound(set_id));
        }

        repository.update_set(
            entry_id,
            ExerciseSet {
                id: set_id,
                ..candidate
            },
        );
        repository.commit().await?;

        info!(workout_entry_id = entry_id, set_id, "Updated exercise set");
        Ok(ApiOutcome::NoContent)
    }

    /// Handle DELETE /workoutEntry/:id/set/:set_id - Remove a set from its entry
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path((entry_id, set_id)): Path<(i64, i64)>,
    ) -> AppResult<ApiOutcome<ExerciseSet>> {
        let mut repository = resources.repository();
        let Some(entry) = repository.get_by_id(entry_id).await? else {
            warn!(workout_entry_id = entry_id, "Parent workout entry not found");
            return Ok(ApiOutcome::NotFound(entry_id));
        };

        if entry.find_set(set_id).is_none() {
            warn!(workout_entry_id = entry_id, set_id, "Exercise set not found");
            return Ok(ApiOutcome::NotFound(set_id));
        }

        repository.remove_set(entry_id, set_id);
        repository.commit().await?;

        info!(workout_entry_id = entry_id, set_id, "Deleted exercise set");
        Ok(ApiOutcome::NoContent)
    }
}

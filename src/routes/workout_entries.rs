// ABOUTME: Route handlers for the workout entry REST API
// ABOUTME: Lists, fetches, creates, replaces, and deletes workout entries through the repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout entry routes
//!
//! Writes are validated before any lookup. A rejected entry is echoed back
//! with 400; an unknown id comes back as the bare id with 404.

use crate::{
    constants::locations,
    database::WorkoutEntryRepository,
    errors::{AppError, AppResult},
    models::WorkoutEntry,
    resources::ServerResources,
    routes::ApiOutcome,
    validation::validate_workout_entry,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Workout entry routes handler
pub struct WorkoutEntryRoutes;

impl WorkoutEntryRoutes {
    /// Create all workout entry routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/workoutEntry",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/workoutEntry/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /workoutEntry - List every entry
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<ApiOutcome<Vec<WorkoutEntry>>> {
        let entries = resources.repository().list_all().await?;
        debug!(count = entries.len(), "Listed workout entries");
        Ok(ApiOutcome::Ok(entries))
    }

    /// Handle GET /workoutEntry/:id - Get one entry
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> AppResult<ApiOutcome<WorkoutEntry>> {
        match resources.repository().get_by_id(id).await? {
            Some(entry) => {
                debug!(workout_entry_id = id, "Fetched workout entry");
                Ok(ApiOutcome::Ok(entry))
            }
            None => {
                warn!(workout_entry_id = id, "Workout entry not found");
                Ok(ApiOutcome::NotFound(id))
            }
        }
    }

    /// Handle POST /workoutEntry - Create a new entry
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(candidate): Json<WorkoutEntry>,
    ) -> AppResult<ApiOutcome<WorkoutEntry>> {
        let verdict = validate_workout_entry(&candidate);
        if !verdict.is_valid() {
            debug!(failures = ?verdict.failures, "Rejected workout entry");
            return Ok(ApiOutcome::BadRequest(candidate));
        }

        let mut repository = resources.repository();
        repository.create(candidate);
        let created = repository
            .commit()
            .await?
            .entries
            .into_iter()
            .next()
            .ok_or_else(|| AppError::internal("Commit returned no stored workout entry"))?;

        info!(workout_entry_id = created.id, "Created workout entry");
        Ok(ApiOutcome::Created {
            location: locations::workout_entry(created.id),
            body: created,
        })
    }

    /// Handle PUT /workoutEntry/:id - Replace name, date, and sets
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Json(candidate): Json<WorkoutEntry>,
    ) -> AppResult<ApiOutcome<WorkoutEntry>> {
        let verdict = validate_workout_entry(&candidate);
        if !verdict.is_valid() {
            debug!(workout_entry_id = id, failures = ?verdict.failures, "Rejected workout entry update");
            return Ok(ApiOutcome::BadRequest(candidate));
        }

        let mut repository = resources.repository();
        let Some(mut entry) = repository.get_by_id(id).await? else {
            warn!(workout_entry_id = id, "Workout entry not found for update");
            return Ok(ApiOutcome::NotFound(id));
        };

        entry.replace_contents(candidate);
        repository.update(entry);
        repository.commit().await?;

        info!(workout_entry_id = id, "Updated workout entry");
        Ok(ApiOutcome::NoContent)
    }

    /// Handle DELETE /workoutEntry/:id - Delete an entry and its sets
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> AppResult<ApiOutcome<WorkoutEntry>> {
        let mut repository = resources.repository();
        let Some(entry) = repository.get_by_id(id).await? else {
            warn!(workout_entry_id = id, "Workout entry not found for delete");
            return Ok(ApiOutcome::NotFound(id));
        };

        repository.delete(&entry);
        repository.commit().await?;

        info!(workout_entry_id = id, "Deleted workout entry");
        Ok(ApiOutcome::NoContent)
    }
}

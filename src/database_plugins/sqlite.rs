// ABOUTME: SQLite storage backend for workout entries and their exercise sets
// ABOUTME: Creates the schema on connect and applies staged change batches inside one transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `SQLite` database implementation
//!
//! Entries live in `workout_entries`, sets in `exercise_sets` with a cascading
//! foreign key back to their entry. Dates are stored as text in the same
//! format the API emits.

use super::{
    foreign_set_violation, missing_entry, missing_set, AppliedChanges, StagedChange, WorkoutStore,
};
use crate::errors::DatabaseError;
use crate::models::{ExerciseSet, WorkoutDate, WorkoutEntry};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqliteConnection, SqlitePool};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, info};

/// `SQLite` database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Connect and create the schema if it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is malformed, the database
    /// cannot be opened, or schema creation fails
    pub async fn new(database_url: &str) -> Result<Self> {
        let in_memory = database_url.contains(":memory:");
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // A private in-memory database only lives as long as its connection
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        let db = Self { pool };
        db.ensure_schema().await?;

        info!(in_memory, "SQLite workout store ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                workout_date TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercise_sets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                workout_entry_id INTEGER NOT NULL REFERENCES workout_entries(id) ON DELETE CASCADE,
                exercise_name TEXT NOT NULL,
                repetitions INTEGER NOT NULL,
                weight REAL NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_exercise_sets_entry ON exercise_sets(workout_entry_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl WorkoutStore for SqliteDatabase {
    async fn load_all(&self) -> Result<Vec<WorkoutEntry>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;

        let entry_rows =
            sqlx::query("SELECT id, name, workout_date FROM workout_entries ORDER BY id")
                .fetch_all(&mut *conn)
                .await?;
        let mut entries = entry_rows
            .iter()
            .map(row_to_workout_entry)
            .collect::<Result<Vec<_>, _>>()?;

        let set_rows = sqlx::query(
            r"
            SELECT id, workout_entry_id, exercise_name, repetitions, weight
            FROM exercise_sets
            ORDER BY workout_entry_id, id
            ",
        )
        .fetch_all(&mut *conn)
        .await?;

        for row in &set_rows {
            let owner: i64 = row.try_get("workout_entry_id")?;
            let set = row_to_exercise_set(row)?;
            if let Some(entry) = entries.iter_mut().find(|entry| entry.id == owner) {
                entry.sets.push(set);
            }
        }

        Ok(entries)
    }

    async fn load(&self, id: i64) -> Result<Option<WorkoutEntry>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        fetch_entry(&mut conn, id).await
    }

    async fn apply(&self, changes: Vec<StagedChange>) -> Result<AppliedChanges, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        let mut touched_entries = Vec::new();
        let mut touched_sets = Vec::new();

        for change in changes {
            debug!(operation = change.operation(), "Applying staged change to SQLite");
            match change {
                StagedChange::Create(candidate) => {
                    touched_entries.push(insert_entry(&mut tx, &candidate).await?);
                }
                StagedChange::Update(candidate) => {
                    update_entry(&mut tx, &candidate).await?;
                    touched_entries.push(candidate.id);
                }
                StagedChange::Delete(id) => delete_entry(&mut tx, id).await?,
                StagedChange::AddSet { entry_id, set } => {
                    ensure_entry_exists(&mut tx, entry_id).await?;
                    touched_sets.push(insert_set(&mut tx, entry_id, &set).await?);
                }
                StagedChange::UpdateSet { entry_id, set } => {
                    ensure_entry_exists(&mut tx, entry_id).await?;
                    update_set(&mut tx, entry_id, &set).await?;
                    touched_sets.push(set.id);
                }
                StagedChange::RemoveSet { entry_id, set_id } => {
                    ensure_entry_exists(&mut tx, entry_id).await?;
                    remove_set(&mut tx, entry_id, set_id).await?;
                }
            }
        }

        // Read back after every write so each result reflects the whole batch
        let mut applied = AppliedChanges::default();
        for id in touched_entries {
            let entry = fetch_entry(&mut tx, id)
                .await?
                .ok_or_else(|| missing_entry(id))?;
            applied.entries.push(entry);
        }
        for id in touched_sets {
            let set = fetch_set(&mut tx, id).await?.ok_or_else(|| missing_set(id))?;
            applied.sets.push(set);
        }

        tx.commit().await?;
        Ok(applied)
    }
}

async fn fetch_entry(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<WorkoutEntry>, DatabaseError> {
    let row = sqlx::query("SELECT id, name, workout_date FROM workout_entries WHERE id = $1")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    let mut entry = row_to_workout_entry(&row)?;

    let set_rows = sqlx::query(
        r"
        SELECT id, exercise_name, repetitions, weight
        FROM exercise_sets
        WHERE workout_entry_id = $1
        ORDER BY id
        ",
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    entry.sets = set_rows
        .iter()
        .map(row_to_exercise_set)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(entry))
}

async fn insert_entry(
    conn: &mut SqliteConnection,
    candidate: &WorkoutEntry,
) -> Result<i64, DatabaseError> {
    let id = sqlx::query("INSERT INTO workout_entries (name, workout_date) VALUES ($1, $2)")
        .bind(&candidate.name)
        .bind(candidate.workout_date.to_string())
        .execute(&mut *conn)
        .await?
        .last_insert_rowid();

    for set in &candidate.sets {
        insert_set(conn, id, set).await?;
    }

    Ok(id)
}

async fn fetch_set(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<ExerciseSet>, DatabaseError> {
    let row = sqlx::query(
        "SELECT id, exercise_name, repetitions, weight FROM exercise_sets WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    row.as_ref().map(row_to_exercise_set).transpose()
}

async fn ensure_entry_exists(conn: &mut SqliteConnection, id: i64) -> Result<(), DatabaseError> {
    let found = sqlx::query_scalar::<_, i64>("SELECT id FROM workout_entries WHERE id = $1")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    found.map(|_| ()).ok_or_else(|| missing_entry(id))
}

async fn insert_set(
    conn: &mut SqliteConnection,
    entry_id: i64,
    set: &ExerciseSet,
) -> Result<i64, DatabaseError> {
    let id = sqlx::query(
        r"
        INSERT INTO exercise_sets (workout_entry_id, exercise_name, repetitions, weight)
        VALUES ($1, $2, $3, $4)
        ",
    )
    .bind(entry_id)
    .bind(&set.exercise_name)
    .bind(set.repetitions)
    .bind(set.weight)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

async fn update_set(
    conn: &mut SqliteConnection,
    entry_id: i64,
    set: &ExerciseSet,
) -> Result<(), DatabaseError> {
    let affected = sqlx::query(
        r"
        UPDATE exercise_sets
        SET exercise_name = $1, repetitions = $2, weight = $3
        WHERE id = $4 AND workout_entry_id = $5
        ",
    )
    .bind(&set.exercise_name)
    .bind(set.repetitions)
    .bind(set.weight)
    .bind(set.id)
    .bind(entry_id)
    .execute(&mut *conn)
    .await?
    .rows_affected();

    if affected == 0 {
        return Err(missing_set(set.id));
    }
    Ok(())
}

async fn remove_set(
    conn: &mut SqliteConnection,
    entry_id: i64,
    set_id: i64,
) -> Result<(), DatabaseError> {
    let affected = sqlx::query("DELETE FROM exercise_sets WHERE id = $1 AND workout_entry_id = $2")
        .bind(set_id)
        .bind(entry_id)
        .execute(&mut *conn)
        .await?
        .rows_affected();

    if affected == 0 {
        return Err(missing_set(set_id));
    }
    Ok(())
}

async fn update_entry(
    conn: &mut SqliteConnection,
    candidate: &WorkoutEntry,
) -> Result<(), DatabaseError> {
    let affected = sqlx::query("UPDATE workout_entries SET name = $1, workout_date = $2 WHERE id = $3")
        .bind(&candidate.name)
        .bind(candidate.workout_date.to_string())
        .bind(candidate.id)
        .execute(&mut *conn)
        .await?
        .rows_affected();

    if affected == 0 {
        return Err(missing_entry(candidate.id));
    }

    let owned_ids: HashSet<i64> =
        sqlx::query_scalar::<_, i64>("SELECT id FROM exercise_sets WHERE workout_entry_id = $1")
            .bind(candidate.id)
            .fetch_all(&mut *conn)
            .await?
            .into_iter()
            .collect();

    let mut kept = HashSet::new();
    for set in &candidate.sets {
        if set.id == 0 {
            insert_set(conn, candidate.id, set).await?;
            continue;
        }
        if !owned_ids.contains(&set.id) || !kept.insert(set.id) {
            return Err(foreign_set_violation(candidate.id, set.id));
        }
        sqlx::query(
            r"
            UPDATE exercise_sets
            SET exercise_name = $1, repetitions = $2, weight = $3
            WHERE id = $4
            ",
        )
        .bind(&set.exercise_name)
        .bind(set.repetitions)
        .bind(set.weight)
        .bind(set.id)
        .execute(&mut *conn)
        .await?;
    }

    for orphan in owned_ids.difference(&kept) {
        sqlx::query("DELETE FROM exercise_sets WHERE id = $1")
            .bind(*orphan)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

async fn delete_entry(conn: &mut SqliteConnection, id: i64) -> Result<(), DatabaseError> {
    let affected = sqlx::query("DELETE FROM workout_entries WHERE id = $1")
        .bind(id)
        .execute(&mut *conn)
        .await?
        .rows_affected();

    if affected == 0 {
        return Err(missing_entry(id));
    }
    Ok(())
}

fn row_to_workout_entry(row: &SqliteRow) -> Result<WorkoutEntry, DatabaseError> {
    let raw_date: String = row.try_get("workout_date")?;
    let workout_date = raw_date
        .parse::<WorkoutDate>()
        .map_err(|e| DatabaseError::InvalidData(e.to_string()))?;

    Ok(WorkoutEntry {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        workout_date,
        sets: Vec::new(),
    })
}

fn row_to_exercise_set(row: &SqliteRow) -> Result<ExerciseSet, DatabaseError> {
    Ok(ExerciseSet {
        id: row.try_get("id")?,
        exercise_name: row.try_get("exercise_name")?,
        repetitions: row.try_get("repetitions")?,
        weight: row.try_get("weight")?,
    })
}

// ABOUTME: Structured error types for storage operations
// ABOUTME: Covers missing rows, constraint violations, and backend failures with context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised by storage backends and the repository layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A staged change referenced a row that no longer exists
    #[error("{entity_type} with ID '{entity_id}' not found")]
    NotFound {
        /// Kind of entity that was looked up
        entity_type: &'static str,
        /// Identifier that could not be resolved
        entity_id: String,
    },

    /// The store refused a write because it would break an invariant
    #[error("Constraint violation: {constraint} - {details}")]
    ConstraintViolation {
        /// Name of the violated constraint
        constraint: String,
        /// What went wrong
        details: String,
    },

    /// A query failed to execute
    #[error("Query error: {context}")]
    QueryError {
        /// Additional context
        context: String,
    },

    /// The backend could not be reached or initialised
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Stored data could not be mapped back into the domain model
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::QueryError {
                context: "row not found".to_owned(),
            },
            sqlx::Error::Database(db_error) => {
                if db_error.is_foreign_key_violation()
                    || db_error.is_unique_violation()
                    || db_error.is_check_violation()
                {
                    Self::ConstraintViolation {
                        constraint: db_error
                            .constraint()
                            .unwrap_or("database constraint")
                            .to_owned(),
                        details: db_error.message().to_owned(),
                    }
                } else {
                    Self::QueryError {
                        context: db_error.message().to_owned(),
                    }
                }
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::ConnectionError(error.to_string())
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                Self::InvalidData(error.to_string())
            }
            other => Self::QueryError {
                context: other.to_string(),
            },
        }
    }
}

// ABOUTME: Typed handler outcomes mapped onto HTTP status codes and JSON bodies
// ABOUTME: Covers success, creation with Location, empty success, validation echo, and not-found id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Result of a handler that resolved locally
///
/// Persistence faults are not represented here; handlers return them as
/// `AppError` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    /// 200 with the payload
    Ok(T),
    /// 201 with the stored payload and a `Location` header
    Created {
        /// Path of the created resource
        location: String,
        /// Stored resource
        body: T,
    },
    /// 204 without a body
    NoContent,
    /// 400 echoing the rejected payload
    BadRequest(T),
    /// 404 carrying the identifier that could not be resolved
    NotFound(i64),
}

impl<T: Serialize> IntoResponse for ApiOutcome<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Created { location, body } => (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(body),
            )
                .into_response(),
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
            Self::BadRequest(body) => (StatusCode::BAD_REQUEST, Json(body)).into_response(),
            Self::NotFound(id) => (StatusCode::NOT_FOUND, Json(id)).into_response(),
        }
    }
}

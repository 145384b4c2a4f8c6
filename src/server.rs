// ABOUTME: HTTP server assembly combining route groups with the middleware stack
// ABOUTME: Binds the configured address and serves until Ctrl-C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Router construction and the serve loop

use crate::middleware::{request_id_middleware, setup_cors, tracing::make_request_span};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, SetRoutes, WorkoutEntryRoutes};
use anyhow::{Context, Result};
use axum::{body::Body, middleware, response::Response, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, Span};

/// Method and path of every route, for the startup log
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/workoutEntry"),
    ("POST", "/workoutEntry"),
    ("GET", "/workoutEntry/{id}"),
    ("PUT", "/workoutEntry/{id}"),
    ("DELETE", "/workoutEntry/{id}"),
    ("POST", "/workoutEntry/{id}/set"),
    ("PUT", "/workoutEntry/{id}/set"),
    ("PUT", "/workoutEntry/{id}/set/{setId}"),
    ("DELETE", "/workoutEntry/{id}/set/{setId}"),
    ("GET", "/health"),
    ("GET", "/ready"),
];

/// Build the complete application router
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(WorkoutEntryRoutes::routes(Arc::clone(resources)))
        .merge(SetRoutes::routes(Arc::clone(resources)))
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span::<Body>)
                .on_response(record_response),
        )
        .layer(cors)
}

fn record_response(response: &Response, latency: Duration, span: &Span) {
    span.record("status_code", response.status().as_u16());
    span.record(
        "duration_ms",
        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
    );
    info!("request completed");
}

/// Log the endpoint table
pub fn log_endpoints() {
    info!("Available endpoints:");
    for (method, path) in ENDPOINTS {
        info!("  {method:<6} {path}");
    }
}

/// Serve the router on the configured address until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = format!("{}:{}", resources.config.host, resources.config.http_port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {address}"))?;

    info!("Workout API listening on http://{address}");
    log_endpoints();

    let router = build_router(&resources);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated with an error")?;

    info!("Workout API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

// ABOUTME: Server binary for the workout API
// ABOUTME: Loads configuration, initializes logging and storage, and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout API Server Binary
//!
//! Starts the workout entry service with the storage backend selected by
//! `DATABASE_URL` (or `--database-url`).

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use workout_api::{
    config::environment::{DatabaseUrl, ServerConfig},
    database_plugins::factory::Database,
    logging,
    resources::ServerResources,
    server,
};

#[derive(Parser)]
#[command(name = "workout-api-server")]
#[command(about = "Workout API - CRUD service for workout entries and exercise sets")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override storage backend (memory, sqlite::memory:, sqlite:path)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(database_url)?;
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Starting Workout API");
    info!("{}", config.summary());

    let database = Database::from_url(&config.database.url).await?;
    info!(
        "Database initialized successfully: {}",
        database.backend_info()
    );

    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
    server::run(resources).await
}

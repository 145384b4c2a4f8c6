// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Exposes environment-driven server configuration for the workout API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the workout API
//!
//! Configuration is read from environment variables only; command-line flags
//! on the server binary may override individual values afterwards.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig};

// ABOUTME: Shared helper modules for integration tests
// ABOUTME: Groups HTTP request builders used across route test suites

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;

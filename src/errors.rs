// ABOUTME: Unified error handling re-exported from workout-core
// ABOUTME: Provides AppError, ErrorCode, and DatabaseError to the service crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::errors::*;

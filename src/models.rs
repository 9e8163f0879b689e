// ABOUTME: Domain model re-exports from the ironlog-core crate
// ABOUTME: Profile, weight history, goals, and mesocycle plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

pub use ironlog_core::models::*;

// ABOUTME: Intelligence module re-exports from the ironlog-intelligence crate
// ABOUTME: Preserves crate::intelligence paths while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! # Intelligence Module
//!
//! Energy, nutrition, goal progress, and training volume calculators.

// Re-export all public items from ironlog-intelligence
pub use ironlog_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::goal_progress::anchor_sunday)
pub use ironlog_intelligence::{
    calorie_adjustment, daily_targets, goal_progress, goal_validation, macro_allocator,
    muscle_volume, nutrition_calculator,
};

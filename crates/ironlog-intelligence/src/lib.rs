// ABOUTME: Calculation engine for energy, goal-adjusted nutrition, progress, and training volume
// ABOUTME: Pure synchronous calculators configured by IntelligenceConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog Intelligence
//!
//! Goal and nutrition calculation engine. Every calculator is a pure function of
//! its inputs and a configuration section; the only shared state is the lazily
//! loaded [`IntelligenceConfig::global`] instance.
//!
//! ## Modules
//!
//! - **`nutrition_calculator`**: BMR and TDEE (Mifflin-St Jeor)
//! - **`calorie_adjustment`**: TDEE to a goal-specific calorie target
//! - **`macro_allocator`**: protein, fat, and carbohydrate targets
//! - **`goal_validation`**: candidate goal parameter checks
//! - **`goal_progress`**: Sunday-aligned expected vs. actual trajectory
//! - **`muscle_volume`**: weekly per-muscle-group set volume
//! - **`daily_targets`**: the combined energy-to-macros pipeline

/// Engine configuration
pub mod config;

/// Goal-adjusted calorie targets
pub mod calorie_adjustment;

/// Combined daily nutrition targets
pub mod daily_targets;

/// Goal progress projection
pub mod goal_progress;

/// Goal parameter validation
pub mod goal_validation;

/// Macronutrient allocation
pub mod macro_allocator;

/// Weekly muscle group volume
pub mod muscle_volume;

/// Energy expenditure estimation
pub mod nutrition_calculator;

pub use calorie_adjustment::{adjust_calories_for_goal, CalorieAdjustment};
pub use config::IntelligenceConfig;
pub use daily_targets::{calculate_daily_targets, DailyTargets};
pub use goal_progress::{project_goal_progress, GoalProgress, WeeklyProgress};
pub use goal_validation::{validate_goal_parameters, GoalCandidate, GoalValidation};
pub use macro_allocator::{allocate_macros, MacroPercentages, MacroTargets};
pub use muscle_volume::{
    aggregate_muscle_volume, analyze_plan_volume, classify_volume, MuscleGroupVolume,
    MuscleVolumeReport, VolumeWarning,
};
pub use nutrition_calculator::{estimate_energy, EnergyEstimate};

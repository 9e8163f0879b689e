// ABOUTME: Configuration module exposing engine settings and the process-wide instance
// ABOUTME: Re-exports intelligence configuration and converts load failures into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Configuration module
//!
//! - **Nutrition**: BMR coefficients, activity factors, calorie adjustment, macros
//! - **Goals**: validation bounds and progress projection policy
//! - **Training volume**: set credit and warning bands
//!
//! Settings come from defaults plus `INTELLIGENCE_*` environment overrides.

use crate::errors::AppResult;
use tracing::{debug, info};

pub use ironlog_intelligence::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentConfig, ConfigError, GoalConfig,
    GoalProgressConfig, GoalValidationConfig, IntelligenceConfig, MacroAllocationConfig,
    MidWeekAnchor, NutritionConfig, SetCreditConfig, TrainingVolumeConfig, VolumeBand,
    VolumeThresholdsConfig,
};

/// Load a fresh configuration from the environment
///
/// Unlike [`IntelligenceConfig::global`], failures are reported instead of
/// falling back to defaults.
///
/// # Errors
///
/// Returns `ConfigInvalid` when an override cannot be parsed or the resulting
/// configuration is inconsistent
pub fn load_from_env() -> AppResult<IntelligenceConfig> {
    debug!("Loading intelligence configuration from environment");
    let config = IntelligenceConfig::load()?;
    info!(
        calorie_floor = config.nutrition.calorie_adjustment.calorie_floor,
        on_track_tolerance = config.goals.progress.on_track_tolerance,
        mid_week_anchor = ?config.goals.progress.mid_week_anchor,
        "Intelligence configuration loaded"
    );
    Ok(config)
}

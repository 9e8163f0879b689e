// ABOUTME: Intelligence configuration for the goal, nutrition, and training volume engine
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Intelligence Configuration Module
//!
//! Provides type-safe configuration for every calculator in the engine. Defaults
//! reproduce the published formulas and product policy; environment variables may
//! override individual values at load time.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR coefficients, activity factors, calorie adjustment, macros
//! - `goals` - Goal validation bounds and progress projection policy
//! - `training_volume` - Set credit and volume warning bands

pub mod error;
pub mod goals;
pub mod nutrition;
pub mod training_volume;

pub use error::ConfigError;
pub use goals::{GoalConfig, GoalProgressConfig, GoalValidationConfig, MidWeekAnchor};
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentConfig, MacroAllocationConfig,
    NutritionConfig,
};
pub use training_volume::{SetCreditConfig, TrainingVolumeConfig, VolumeBand, VolumeThresholdsConfig};

use ironlog_core::models::{MAX_GOAL_DURATION_WEEKS, MIN_GOAL_DURATION_WEEKS};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Energy estimation and calorie/macro targets
    pub nutrition: NutritionConfig,
    /// Goal validation and progress projection
    pub goals: GoalConfig,
    /// Weekly training volume aggregation
    pub training_volume: TrainingVolumeConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once on first access; falls back to defaults when the environment
    /// holds invalid overrides.
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_finite()?;
        self.validate_nutrition()?;
        self.validate_goals()?;
        self.validate_training_volume()
    }

    /// Range checks below compare with `<`/`>`, which NaN passes silently
    fn validate_finite(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;
        let goals = &self.goals;
        let volume = &self.training_volume;
        let values = [
            nutr.bmr.msj_weight_coef,
            nutr.bmr.msj_height_coef,
            nutr.bmr.msj_age_coef,
            nutr.bmr.msj_male_constant,
            nutr.bmr.msj_female_constant,
            nutr.activity_factors.sedentary,
            nutr.activity_factors.lightly_active,
            nutr.activity_factors.moderately_active,
            nutr.activity_factors.very_active,
            nutr.activity_factors.extremely_active,
            nutr.calorie_adjustment.calorie_floor,
            nutr.calorie_adjustment.max_sustainable_absolute_rate_lbs,
            nutr.calorie_adjustment.max_sustainable_percentage_rate,
            nutr.calorie_adjustment.high_surplus_threshold,
            nutr.macros.protein_g_per_lb,
            nutr.macros.fat_min_g,
            nutr.macros.fat_g_per_lb,
            goals.validation.max_absolute_rate_lbs,
            goals.validation.max_percentage_rate,
            goals.validation.min_surplus_calories,
            goals.validation.max_surplus_calories,
            goals.progress.on_track_tolerance,
            goals.progress.min_expected_change_lbs,
            goals.progress.muscle_gain_weekly_rate_lbs,
            volume.set_credit.primary,
            volume.set_credit.secondary,
            volume.thresholds.specialized.low_below,
            volume.thresholds.specialized.high_above,
            volume.thresholds.standard.low_below,
            volume.thresholds.standard.high_above,
        ];

        if values.iter().all(|value| value.is_finite()) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(
                "Configuration values must be finite numbers",
            ))
        }
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.msj_weight_coef <= 0.0 || nutr.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &nutr.activity_factors;
        if factors.sedentary < 1.0 || factors.extremely_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extremely_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let adjustment = &nutr.calorie_adjustment;
        if adjustment.calorie_floor <= 0.0 || adjustment.calorie_floor > 5000.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie floor must be between 0 and 5000 kcal",
            ));
        }
        if adjustment.max_sustainable_absolute_rate_lbs <= 0.0
            || adjustment.max_sustainable_percentage_rate <= 0.0
            || adjustment.high_surplus_threshold <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Sustainability warning thresholds must be positive",
            ));
        }

        let macros = &nutr.macros;
        if macros.protein_g_per_lb <= 0.0 || macros.protein_g_per_lb > 3.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein must be between 0 and 3.0 g/lb",
            ));
        }
        if macros.fat_min_g < 0.0 || macros.fat_g_per_lb < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Fat allocation must not be negative",
            ));
        }

        Ok(())
    }

    fn validate_goals(&self) -> Result<(), ConfigError> {
        let validation = &self.goals.validation;
        if validation.min_duration_weeks > validation.max_duration_weeks {
            return Err(ConfigError::InvalidRange(
                "min_duration_weeks must be <= max_duration_weeks",
            ));
        }
        // Goal::effective_end_date clamps to this range
        if validation.min_duration_weeks < MIN_GOAL_DURATION_WEEKS
            || validation.max_duration_weeks > MAX_GOAL_DURATION_WEEKS
        {
            return Err(ConfigError::ValueOutOfRange(
                "Goal duration bounds must stay within 2 to 16 weeks",
            ));
        }
        if validation.max_absolute_rate_lbs <= 0.0 || validation.max_percentage_rate <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Maximum fat loss rates must be positive",
            ));
        }
        if validation.min_surplus_calories > validation.max_surplus_calories {
            return Err(ConfigError::InvalidRange(
                "min_surplus_calories must be <= max_surplus_calories",
            ));
        }

        let progress = &self.goals.progress;
        if progress.on_track_tolerance <= 0.0 || progress.on_track_tolerance > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "On-track tolerance must be in (0, 1]",
            ));
        }
        if progress.min_expected_change_lbs < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum expected change must not be negative",
            ));
        }

        Ok(())
    }

    fn validate_training_volume(&self) -> Result<(), ConfigError> {
        let volume = &self.training_volume;
        if volume.set_credit.primary <= 0.0 || volume.set_credit.secondary < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Set credit must be positive for primary and non-negative for secondary",
            ));
        }
        for band in [volume.thresholds.specialized, volume.thresholds.standard] {
            if band.low_below > band.high_above {
                return Err(ConfigError::InvalidRange(
                    "Volume band low_below must be <= high_above",
                ));
            }
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Calorie adjustment overrides
        Self::apply_env_var(
            "INTELLIGENCE_CALORIE_FLOOR",
            &mut self.nutrition.calorie_adjustment.calorie_floor,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_MAX_SUSTAINABLE_ABSOLUTE_RATE",
            &mut self
                .nutrition
                .calorie_adjustment
                .max_sustainable_absolute_rate_lbs,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_MAX_SUSTAINABLE_PERCENTAGE_RATE",
            &mut self
                .nutrition
                .calorie_adjustment
                .max_sustainable_percentage_rate,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_HIGH_SURPLUS_THRESHOLD",
            &mut self.nutrition.calorie_adjustment.high_surplus_threshold,
        )?;

        // Macro overrides
        Self::apply_env_var(
            "INTELLIGENCE_PROTEIN_G_PER_LB",
            &mut self.nutrition.macros.protein_g_per_lb,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_FAT_MIN_G",
            &mut self.nutrition.macros.fat_min_g,
        )?;

        // Goal progress overrides
        Self::apply_env_var(
            "INTELLIGENCE_GOAL_ON_TRACK_TOLERANCE",
            &mut self.goals.progress.on_track_tolerance,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_GOAL_MUSCLE_GAIN_WEEKLY_RATE",
            &mut self.goals.progress.muscle_gain_weekly_rate_lbs,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_GOAL_MID_WEEK_ANCHOR",
            &mut self.goals.progress.mid_week_anchor,
        )?;

        // Goal validation overrides
        Self::apply_env_var(
            "INTELLIGENCE_GOAL_MAX_DURATION_WEEKS",
            &mut self.goals.validation.max_duration_weeks,
        )?;

        Ok(self)
    }
}

// ABOUTME: Energy expenditure estimation using the Mifflin-St Jeor equation
// ABOUTME: BMR from body attributes, TDEE from activity multipliers, profile-level estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Nutrition Calculator Module
//!
//! Estimates daily energy expenditure from a user profile and their current
//! bodyweight. The lower-level formula functions validate physiological ranges
//! and return errors; [`estimate_energy`] treats anything it cannot compute as
//! indeterminate and returns `None`.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::intelligence::{ActivityFactorsConfig, BmrConfig, NutritionConfig};
use chrono::NaiveDate;
use ironlog_core::constants::units::{inches_to_cm, lbs_to_kg};
use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::{ActivityLevel, BiologicalSex, Profile};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Daily energy expenditure, rounded to whole kcal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
///
/// The result is not rounded.
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: BiologicalSex,
    config: &BmrConfig,
) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg > 300.0 {
        return Err(AppError::invalid_input(
            "Weight must be between 0 and 300 kg",
        ));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 || height_cm > 300.0 {
        return Err(AppError::invalid_input(
            "Height must be between 0 and 300 cm",
        ));
    }
    if !(10..=120).contains(&age) {
        return Err(AppError::invalid_input(
            "Age must be between 10 and 120 years (Mifflin-St Jeor formula validated for ages 10+)",
        ));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let sex_constant = match sex {
        BiologicalSex::Male => config.msj_male_constant,
        BiologicalSex::Female => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + sex_constant)
}

/// Activity multiplier for the given tier
#[must_use]
pub const fn activity_factor(activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtremelyActive => config.extremely_active,
    }
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// # Errors
///
/// Returns an error if BMR is not positive
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(AppError::invalid_input("BMR must be positive"));
    }

    Ok(bmr * activity_factor(activity_level, config))
}

/// Estimate BMR and TDEE for a profile at the given bodyweight
///
/// Returns `None` when the profile is incomplete or the inputs fall outside the
/// formula's validated range. TDEE is derived from the unrounded BMR; both values
/// are rounded only on output.
#[must_use]
pub fn estimate_energy(
    profile: &Profile,
    current_weight_lbs: f64,
    as_of: NaiveDate,
    config: &NutritionConfig,
) -> Option<EnergyEstimate> {
    let (Some(height_inches), Some(sex), Some(activity_level)) =
        (profile.height_inches, profile.sex, profile.activity_level)
    else {
        debug!(
            missing = ?profile.missing_fields(),
            "Profile incomplete, energy estimate unavailable"
        );
        return None;
    };

    let Some(age) = profile.age_on(as_of) else {
        debug!(%as_of, "Birth date missing or after reference date, energy estimate unavailable");
        return None;
    };

    let weight_kg = lbs_to_kg(current_weight_lbs);
    let height_cm = inches_to_cm(height_inches);

    let bmr = match calculate_mifflin_st_jeor(weight_kg, height_cm, age, sex, &config.bmr) {
        Ok(bmr) => bmr,
        Err(e) => {
            warn!(weight_kg, height_cm, age, "Energy estimate skipped: {}", e.message);
            return None;
        }
    };

    let tdee = match calculate_tdee(bmr, activity_level, &config.activity_factors) {
        Ok(tdee) => tdee,
        Err(e) => {
            warn!(bmr, "Energy estimate skipped: {}", e.message);
            return None;
        }
    };

    debug!(bmr, tdee, %activity_level, "Estimated energy expenditure");

    Some(EnergyEstimate {
        bmr: bmr.round(),
        tdee: tdee.round(),
    })
}

// ABOUTME: Goal-driven calorie target derived from TDEE and the active goal
// ABOUTME: Applies fat loss deficits, muscle gain surpluses, the calorie floor, and warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Goal-adjusted calorie calculation
//!
//! Fat loss converts a weekly rate into a daily deficit using the 3500 kcal/lb
//! approximation. Targets below the configured floor are clamped rather than
//! rejected; rates and surpluses beyond the sustainable thresholds only attach
//! warnings.

use crate::config::intelligence::CalorieAdjustmentConfig;
use ironlog_core::constants::energy::KCAL_PER_POUND_BODY_FAT;
use ironlog_core::constants::units::DAYS_PER_WEEK;
use ironlog_core::models::{FatLossRate, GoalKind, DEFAULT_MUSCLE_GAIN_SURPLUS_KCAL};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Daily calorie target for a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieAdjustment {
    /// Target intake in whole kcal/day
    pub adjusted_calories: f64,
    /// Names the parameter that drove the adjustment
    pub reason: String,
    /// Non-blocking advisories
    pub warnings: Vec<String>,
}

/// Adjust TDEE for the given goal
#[must_use]
pub fn adjust_calories_for_goal(
    tdee: f64,
    current_weight_lbs: f64,
    goal: &GoalKind,
    config: &CalorieAdjustmentConfig,
) -> CalorieAdjustment {
    let adjustment = match goal {
        GoalKind::Maintenance => CalorieAdjustment {
            adjusted_calories: tdee.round(),
            reason: "maintenance calories".to_owned(),
            warnings: Vec::new(),
        },
        GoalKind::FatLoss { rate } => fat_loss_adjustment(tdee, current_weight_lbs, rate, config),
        GoalKind::MuscleGain { surplus_calories } => {
            let surplus = surplus_calories.unwrap_or(DEFAULT_MUSCLE_GAIN_SURPLUS_KCAL);
            let mut warnings = Vec::new();
            if surplus > config.high_surplus_threshold {
                warnings.push(format!(
                    "A surplus above {} calories per day may lead to excess fat gain",
                    config.high_surplus_threshold
                ));
            }
            CalorieAdjustment {
                adjusted_calories: (tdee + surplus).round(),
                reason: format!("{surplus} calorie surplus for muscle gain"),
                warnings,
            }
        }
    };

    debug!(
        tdee,
        adjusted = adjustment.adjusted_calories,
        goal_type = %goal.goal_type(),
        warnings = adjustment.warnings.len(),
        "Adjusted calories for goal"
    );

    adjustment
}

fn fat_loss_adjustment(
    tdee: f64,
    current_weight_lbs: f64,
    rate: &FatLossRate,
    config: &CalorieAdjustmentConfig,
) -> CalorieAdjustment {
    let rate_lbs = rate.lbs_per_week(current_weight_lbs);
    let daily_deficit = rate_lbs * KCAL_PER_POUND_BODY_FAT / DAYS_PER_WEEK;

    let mut warnings = Vec::new();
    let (reason, unsustainable) = match rate {
        FatLossRate::Absolute { lbs_per_week } => (
            format!("{lbs_per_week:.1} lbs/week target"),
            *lbs_per_week > config.max_sustainable_absolute_rate_lbs,
        ),
        FatLossRate::Percentage { percent_per_week } => (
            format!("{percent_per_week}% bodyweight/week target ({rate_lbs:.1} lbs/week)"),
            *percent_per_week > config.max_sustainable_percentage_rate,
        ),
    };

    let mut adjusted = tdee - daily_deficit;
    if adjusted < config.calorie_floor {
        adjusted = config.calorie_floor;
        warnings.push(format!(
            "Calories raised to the {} calorie minimum; the target rate may not be reached",
            config.calorie_floor
        ));
    }

    if unsustainable {
        warnings.push(match rate {
            FatLossRate::Absolute { .. } => format!(
                "Losing more than {} lbs per week is difficult to sustain and risks muscle loss",
                config.max_sustainable_absolute_rate_lbs
            ),
            FatLossRate::Percentage { .. } => format!(
                "Losing more than {}% of bodyweight per week is difficult to sustain and risks muscle loss",
                config.max_sustainable_percentage_rate
            ),
        });
    }

    CalorieAdjustment {
        adjusted_calories: adjusted.round(),
        reason,
        warnings,
    }
}

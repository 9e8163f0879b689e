// ABOUTME: Validation of candidate goal parameters before a goal is created
// ABOUTME: Collects duration, rate, and surplus violations and builds typed goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Goal parameter validation
//!
//! Candidate goals arrive as flat, partially filled parameters. Every violation
//! is reported so the caller can show all of them at once; nothing is silently
//! corrected. [`GoalCandidate::into_goal`] is the only way from a candidate to a
//! typed [`Goal`].

use crate::config::intelligence::GoalValidationConfig;
use chrono::NaiveDate;
use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::{FatLossRate, Goal, GoalKind, GoalType, RateType};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

/// Goal parameters as submitted, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalCandidate {
    /// Requested goal type
    pub goal_type: GoalType,
    /// Fat loss rate representation
    #[serde(default)]
    pub rate_type: Option<RateType>,
    /// Fat loss rate in the unit selected by `rate_type`
    #[serde(default)]
    pub rate_value: Option<f64>,
    /// Muscle gain daily surplus (kcal)
    #[serde(default)]
    pub surplus_calories: Option<f64>,
    /// Requested duration in weeks
    pub duration_weeks: u32,
}

/// Outcome of [`validate_goal_parameters`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalValidation {
    /// True when `errors` is empty
    pub is_valid: bool,
    /// Human-readable violations
    pub errors: Vec<String>,
}

impl GoalCandidate {
    /// Fat loss candidate
    #[must_use]
    pub const fn fat_loss(rate_type: RateType, rate_value: f64, duration_weeks: u32) -> Self {
        Self {
            goal_type: GoalType::FatLoss,
            rate_type: Some(rate_type),
            rate_value: Some(rate_value),
            surplus_calories: None,
            duration_weeks,
        }
    }

    /// Maintenance candidate
    #[must_use]
    pub const fn maintenance(duration_weeks: u32) -> Self {
        Self {
            goal_type: GoalType::Maintenance,
            rate_type: None,
            rate_value: None,
            surplus_calories: None,
            duration_weeks,
        }
    }

    /// Muscle gain candidate
    #[must_use]
    pub const fn muscle_gain(surplus_calories: Option<f64>, duration_weeks: u32) -> Self {
        Self {
            goal_type: GoalType::MuscleGain,
            rate_type: None,
            rate_value: None,
            surplus_calories,
            duration_weeks,
        }
    }

    /// Typed goal kind, when the type-specific parameters are present
    #[must_use]
    pub fn kind(&self) -> Option<GoalKind> {
        match self.goal_type {
            GoalType::FatLoss => {
                let value = self.rate_value?;
                let rate = match self.rate_type? {
                    RateType::Absolute => FatLossRate::Absolute {
                        lbs_per_week: value,
                    },
                    RateType::Percentage => FatLossRate::Percentage {
                        percent_per_week: value,
                    },
                };
                Some(GoalKind::FatLoss { rate })
            }
            GoalType::Maintenance => Some(GoalKind::Maintenance),
            GoalType::MuscleGain => Some(GoalKind::MuscleGain {
                surplus_calories: self.surplus_calories,
            }),
        }
    }

    /// Validate and build an active goal
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` with the violation list under `details.errors`
    /// when the candidate fails validation
    pub fn into_goal(
        self,
        start_weight_lbs: f64,
        start_date: NaiveDate,
        config: &GoalValidationConfig,
    ) -> AppResult<Goal> {
        let validation = validate_goal_parameters(&self, config);
        if !validation.is_valid {
            return Err(AppError::invalid_input(format!(
                "Goal parameters failed validation: {}",
                validation.errors.join("; ")
            ))
            .with_details(json!({ "errors": validation.errors })));
        }

        let kind = self.kind().ok_or_else(|| {
            AppError::internal("Validated goal candidate is missing its parameters")
        })?;

        let goal = Goal::new(kind, start_weight_lbs, start_date, self.duration_weeks);
        info!(
            goal_id = %goal.id,
            goal_type = %goal.goal_type(),
            %start_date,
            duration_weeks = goal.duration_weeks,
            "Created goal"
        );
        Ok(goal)
    }
}

/// Check candidate goal parameters against the configured bounds
#[must_use]
pub fn validate_goal_parameters(
    candidate: &GoalCandidate,
    config: &GoalValidationConfig,
) -> GoalValidation {
    let mut errors = Vec::new();

    if !(config.min_duration_weeks..=config.max_duration_weeks).contains(&candidate.duration_weeks)
    {
        errors.push(format!(
            "Duration must be between {} and {} weeks",
            config.min_duration_weeks, config.max_duration_weeks
        ));
    }

    match candidate.goal_type {
        GoalType::FatLoss => validate_fat_loss(candidate, config, &mut errors),
        GoalType::Maintenance => {}
        GoalType::MuscleGain => {
            if let Some(surplus) = candidate.surplus_calories {
                if !(config.min_surplus_calories..=config.max_surplus_calories).contains(&surplus) {
                    errors.push(format!(
                        "Surplus must be between {} and {} calories per day",
                        config.min_surplus_calories, config.max_surplus_calories
                    ));
                }
            }
        }
    }

    if !errors.is_empty() {
        debug!(goal_type = %candidate.goal_type, ?errors, "Goal candidate rejected");
    }

    GoalValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn validate_fat_loss(
    candidate: &GoalCandidate,
    config: &GoalValidationConfig,
    errors: &mut Vec<String>,
) {
    if candidate.rate_type.is_none() {
        errors.push("Fat loss goals require a rate type (absolute or percentage)".to_owned());
    }
    let Some(value) = candidate.rate_value else {
        errors.push("Fat loss goals require a rate value".to_owned());
        return;
    };

    match candidate.rate_type {
        Some(RateType::Absolute) if !in_open_closed(value, config.max_absolute_rate_lbs) => {
            errors.push(format!(
                "Absolute rate must be greater than 0 and at most {:.1} lbs per week",
                config.max_absolute_rate_lbs
            ));
        }
        Some(RateType::Percentage) if !in_open_closed(value, config.max_percentage_rate) => {
            errors.push(format!(
                "Percentage rate must be greater than 0 and at most {:.1}% per week",
                config.max_percentage_rate
            ));
        }
        _ => {}
    }
}

/// `value` in (0, max]; NaN is rejected
fn in_open_closed(value: f64, max: f64) -> bool {
    value > 0.0 && value <= max
}

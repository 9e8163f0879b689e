// ABOUTME: Weight goal model with nested goal-kind and fat-loss-rate sum types
// ABOUTME: Goal lifecycle (activation, supersession, completion) and goal type parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::constants::units::DAYS_PER_WEEK_I64;
use crate::errors::AppError;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Shortest goal the engine will project
pub const MIN_GOAL_DURATION_WEEKS: u32 = 2;

/// Longest goal the engine will project
pub const MAX_GOAL_DURATION_WEEKS: u32 = 16;

/// Daily surplus applied to muscle gain goals that do not set one
pub const DEFAULT_MUSCLE_GAIN_SURPLUS_KCAL: f64 = 300.0;

/// Flat goal type discriminant, as submitted by forms and stored by callers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Caloric deficit
    FatLoss,
    /// Caloric balance
    Maintenance,
    /// Caloric surplus
    MuscleGain,
}

impl GoalType {
    /// Stable snake-case identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FatLoss => "fat_loss",
            Self::Maintenance => "maintenance",
            Self::MuscleGain => "muscle_gain",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = AppError;

    /// An unknown goal type is a contract violation by the caller, not user input
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fat_loss" => Ok(Self::FatLoss),
            "maintenance" => Ok(Self::Maintenance),
            "muscle_gain" => Ok(Self::MuscleGain),
            other => Err(AppError::invalid_format(format!(
                "Unrecognized goal type '{other}'"
            ))),
        }
    }
}

/// How a fat loss rate is expressed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RateType {
    /// Pounds per week
    Absolute,
    /// Percent of bodyweight per week
    Percentage,
}

impl RateType {
    /// Stable snake-case identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Percentage => "percentage",
        }
    }
}

impl fmt::Display for RateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "absolute" => Ok(Self::Absolute),
            "percentage" => Ok(Self::Percentage),
            other => Err(AppError::invalid_format(format!(
                "Unrecognized rate type '{other}'"
            ))),
        }
    }
}

/// Target rate of a fat loss goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "rate_type", rename_all = "snake_case")]
pub enum FatLossRate {
    /// Fixed pounds lost per week
    Absolute {
        /// Pounds per week
        lbs_per_week: f64,
    },
    /// Percent of current bodyweight lost per week
    Percentage {
        /// Percent of bodyweight per week
        percent_per_week: f64,
    },
}

impl FatLossRate {
    /// Which representation this rate uses
    #[must_use]
    pub const fn rate_type(&self) -> RateType {
        match self {
            Self::Absolute { .. } => RateType::Absolute,
            Self::Percentage { .. } => RateType::Percentage,
        }
    }

    /// The raw rate value in its own unit
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Absolute { lbs_per_week } => *lbs_per_week,
            Self::Percentage { percent_per_week } => *percent_per_week,
        }
    }

    /// Pounds per week for a person of the given bodyweight
    #[must_use]
    pub fn lbs_per_week(&self, bodyweight_lbs: f64) -> f64 {
        match self {
            Self::Absolute { lbs_per_week } => *lbs_per_week,
            Self::Percentage { percent_per_week } => bodyweight_lbs * percent_per_week / 100.0,
        }
    }
}

/// Goal kind with its type-specific parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "goal_type", rename_all = "snake_case")]
pub enum GoalKind {
    /// Lose fat at the given weekly rate
    FatLoss {
        /// Weekly loss target
        rate: FatLossRate,
    },
    /// Hold bodyweight steady
    Maintenance,
    /// Gain muscle on a daily calorie surplus
    MuscleGain {
        /// Daily surplus in kcal, 300 when unset
        #[serde(default, skip_serializing_if = "Option::is_none")]
        surplus_calories: Option<f64>,
    },
}

impl GoalKind {
    /// Flat discriminant
    #[must_use]
    pub const fn goal_type(&self) -> GoalType {
        match self {
            Self::FatLoss { .. } => GoalType::FatLoss,
            Self::Maintenance => GoalType::Maintenance,
            Self::MuscleGain { .. } => GoalType::MuscleGain,
        }
    }

    /// Daily surplus for muscle gain goals, falling back to the default
    #[must_use]
    pub fn surplus_or_default(&self) -> Option<f64> {
        match self {
            Self::MuscleGain { surplus_calories } => {
                Some(surplus_calories.unwrap_or(DEFAULT_MUSCLE_GAIN_SURPLUS_KCAL))
            }
            Self::FatLoss { .. } | Self::Maintenance => None,
        }
    }
}

/// Where a goal sits in its lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Currently driving calorie targets
    Active,
    /// Explicitly finished by the user
    Completed,
    /// Deactivated when another goal was activated
    Superseded,
}

/// A time-boxed bodyweight goal
///
/// The start weight is snapshotted at creation and has no setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal identifier
    pub id: Uuid,
    /// Goal kind and parameters
    pub kind: GoalKind,
    start_weight_lbs: f64,
    /// First day of the goal
    pub start_date: NaiveDate,
    /// Planned length in weeks
    pub duration_weeks: u32,
    /// `start_date + duration_weeks`
    pub end_date: NaiveDate,
    /// Whether this goal currently drives targets
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Completion timestamp, set by [`Goal::complete`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Goal {
    /// Create a new active goal
    #[must_use]
    pub fn new(
        kind: GoalKind,
        start_weight_lbs: f64,
        start_date: NaiveDate,
        duration_weeks: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            start_weight_lbs,
            start_date,
            duration_weeks,
            end_date: start_date + weeks(duration_weeks),
            is_active: true,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Bodyweight when the goal was created
    #[must_use]
    pub const fn start_weight_lbs(&self) -> f64 {
        self.start_weight_lbs
    }

    /// Goal type discriminant
    #[must_use]
    pub const fn goal_type(&self) -> GoalType {
        self.kind.goal_type()
    }

    /// Duration clamped to the projectable range
    #[must_use]
    pub fn effective_duration_weeks(&self) -> u32 {
        self.duration_weeks
            .clamp(MIN_GOAL_DURATION_WEEKS, MAX_GOAL_DURATION_WEEKS)
    }

    /// End date derived from the clamped duration
    #[must_use]
    pub fn effective_end_date(&self) -> NaiveDate {
        self.start_date + weeks(self.effective_duration_weeks())
    }

    /// Lifecycle status
    #[must_use]
    pub fn status(&self) -> GoalStatus {
        match (self.is_active, self.completed_at) {
            (true, _) => GoalStatus::Active,
            (false, Some(_)) => GoalStatus::Completed,
            (false, None) => GoalStatus::Superseded,
        }
    }

    /// Mark the goal completed and deactivate it
    pub fn complete(&mut self, at: DateTime<Utc>) {
        self.is_active = false;
        self.completed_at = Some(at);
    }
}

fn weeks(count: u32) -> Duration {
    Duration::days(i64::from(count) * DAYS_PER_WEEK_I64)
}

/// Activate `goal`, superseding whichever goal was active before
///
/// Returns the newly activated goal.
pub fn activate_goal(goals: &mut Vec<Goal>, mut goal: Goal) -> &Goal {
    for existing in goals.iter_mut().filter(|g| g.is_active) {
        tracing::debug!(goal_id = %existing.id, "Superseding previously active goal");
        existing.is_active = false;
    }
    goal.is_active = true;
    goal.completed_at = None;
    goals.push(goal);
    &goals[goals.len() - 1]
}

/// The active goal, if any
#[must_use]
pub fn active_goal(goals: &[Goal]) -> Option<&Goal> {
    goals.iter().find(|g| g.is_active)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_date_is_start_plus_duration() {
        let goal = Goal::new(GoalKind::Maintenance, 180.0, date(2025, 1, 5), 8);
        assert_eq!(goal.end_date, date(2025, 3, 2));
        assert_eq!(goal.status(), GoalStatus::Active);
    }

    #[test]
    fn test_effective_duration_clamps() {
        let mut goal = Goal::new(GoalKind::Maintenance, 180.0, date(2025, 1, 5), 1);
        assert_eq!(goal.effective_duration_weeks(), 2);
        goal.duration_weeks = 40;
        assert_eq!(goal.effective_duration_weeks(), 16);
        assert_eq!(goal.effective_end_date(), date(2025, 4, 27));
    }

    #[test]
    fn test_activation_supersedes_previous_goal() {
        let mut goals = Vec::new();
        activate_goal(
            &mut goals,
            Goal::new(GoalKind::Maintenance, 180.0, date(2025, 1, 5), 4),
        );
        let second_id = activate_goal(
            &mut goals,
            Goal::new(
                GoalKind::MuscleGain {
                    surplus_calories: None,
                },
                181.0,
                date(2025, 2, 2),
                8,
            ),
        )
        .id;

        assert_eq!(goals.iter().filter(|g| g.is_active).count(), 1);
        assert_eq!(active_goal(&goals).map(|g| g.id), Some(second_id));
        assert_eq!(goals[0].status(), GoalStatus::Superseded);
    }

    #[test]
    fn test_completion_deactivates_and_timestamps() {
        let mut goal = Goal::new(GoalKind::Maintenance, 180.0, date(2025, 1, 5), 4);
        let at = Utc::now();
        goal.complete(at);
        assert!(!goal.is_active);
        assert_eq!(goal.completed_at, Some(at));
        assert_eq!(goal.status(), GoalStatus::Completed);
    }

    #[test]
    fn test_goal_kind_serializes_with_nested_tags() {
        let kind = GoalKind::FatLoss {
            rate: FatLossRate::Percentage {
                percent_per_week: 0.75,
            },
        };
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(json["goal_type"], "fat_loss");
        assert_eq!(json["rate"]["rate_type"], "percentage");
        assert_eq!(json["rate"]["percent_per_week"], 0.75);

        let back: GoalKind = serde_json::from_value(json).unwrap();
        assert_eq!(back, kind);
    }

    #[test]
    fn test_unknown_goal_type_is_rejected() {
        assert_eq!("muscle_gain".parse::<GoalType>().unwrap(), GoalType::MuscleGain);
        assert!("bulk".parse::<GoalType>().is_err());
        assert!("relative".parse::<RateType>().is_err());
    }

    #[test]
    fn test_percentage_rate_scales_with_bodyweight() {
        let rate = FatLossRate::Percentage {
            percent_per_week: 1.0,
        };
        assert!((rate.lbs_per_week(200.0) - 2.0).abs() < f64::EPSILON);
        assert_eq!(
            GoalKind::MuscleGain {
                surplus_calories: None
            }
            .surplus_or_default(),
            Some(DEFAULT_MUSCLE_GAIN_SURPLUS_KCAL)
        );
    }
}

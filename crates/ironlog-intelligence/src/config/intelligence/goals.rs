// ABOUTME: Goal configuration for parameter validation and progress projection
// ABOUTME: Configures duration/rate/surplus bounds, on-track tolerance, and week anchoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Goal Configuration
//!
//! Bounds enforced before a goal is stored, and the policy used when projecting
//! a goal's expected weekly trajectory.

use ironlog_core::models::{MAX_GOAL_DURATION_WEEKS, MIN_GOAL_DURATION_WEEKS};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Goal Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Bounds checked when a goal is created
    pub validation: GoalValidationConfig,
    /// Trajectory projection policy
    pub progress: GoalProgressConfig,
}

/// Bounds enforced on candidate goal parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalValidationConfig {
    /// Shortest accepted duration (weeks)
    pub min_duration_weeks: u32,
    /// Longest accepted duration (weeks)
    pub max_duration_weeks: u32,
    /// Largest accepted absolute fat loss rate (lbs/week), exclusive lower bound is zero
    pub max_absolute_rate_lbs: f64,
    /// Largest accepted percentage fat loss rate (%/week), exclusive lower bound is zero
    pub max_percentage_rate: f64,
    /// Smallest accepted muscle gain surplus (kcal/day)
    pub min_surplus_calories: f64,
    /// Largest accepted muscle gain surplus (kcal/day)
    pub max_surplus_calories: f64,
}

/// Which Sunday anchors week 0 when a goal starts on any other weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MidWeekAnchor {
    /// The first Sunday after the start date
    NextSunday,
    /// The Sunday after that, leaving the partial week plus one full week unbucketed
    SecondSunday,
}

/// Goal progress projection policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgressConfig {
    /// Relative deviation from the expected change still considered on track (0.20 = 20%)
    pub on_track_tolerance: f64,
    /// Expected changes at or below this magnitude (lbs) make the verdict indeterminate
    pub min_expected_change_lbs: f64,
    /// Assumed weekly gain for muscle gain goals (lbs/week)
    pub muscle_gain_weekly_rate_lbs: f64,
    /// Week 0 anchoring for goals that start mid-week
    pub mid_week_anchor: MidWeekAnchor,
}

impl Default for GoalValidationConfig {
    fn default() -> Self {
        Self {
            min_duration_weeks: MIN_GOAL_DURATION_WEEKS,
            max_duration_weeks: MAX_GOAL_DURATION_WEEKS,
            max_absolute_rate_lbs: 3.0,
            max_percentage_rate: 2.0,
            min_surplus_calories: 100.0,
            max_surplus_calories: 1000.0,
        }
    }
}

impl Default for GoalProgressConfig {
    fn default() -> Self {
        Self {
            on_track_tolerance: 0.20,
            min_expected_change_lbs: 0.1,
            muscle_gain_weekly_rate_lbs: 0.5,
            mid_week_anchor: MidWeekAnchor::SecondSunday,
        }
    }
}

impl FromStr for MidWeekAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "next_sunday" => Ok(Self::NextSunday),
            "second_sunday" => Ok(Self::SecondSunday),
            other => Err(format!("unknown mid-week anchor '{other}'")),
        }
    }
}

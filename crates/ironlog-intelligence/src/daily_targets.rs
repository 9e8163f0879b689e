// ABOUTME: Daily nutrition targets combining energy, goal adjustment, and macro allocation
// ABOUTME: Macros are always allocated from the goal-adjusted calorie figure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::calorie_adjustment::{adjust_calories_for_goal, CalorieAdjustment};
use crate::config::intelligence::IntelligenceConfig;
use crate::macro_allocator::{allocate_macros, MacroTargets};
use crate::nutrition_calculator::{estimate_energy, EnergyEstimate};
use chrono::NaiveDate;
use ironlog_core::models::{latest_entry_on_or_before, Goal, GoalKind, Profile, WeightEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Everything a user needs to plan one day of eating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    /// Day the targets were computed for
    pub as_of: NaiveDate,
    /// Bodyweight used (lbs)
    pub current_weight_lbs: f64,
    /// Goal that drove the adjustment, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<Uuid>,
    /// BMR and TDEE
    pub energy: EnergyEstimate,
    /// Calorie target and warnings
    pub adjustment: CalorieAdjustment,
    /// Gram targets derived from the adjusted calories
    pub macros: MacroTargets,
}

/// Compute daily targets from a profile, weight history, and optional goal
///
/// Current weight is the latest entry on or before `as_of`. Without an active
/// goal the targets are for maintenance. Returns `None` when the profile is
/// incomplete or there is no usable weight entry.
#[must_use]
pub fn calculate_daily_targets(
    profile: &Profile,
    weights: &[WeightEntry],
    goal: Option<&Goal>,
    as_of: NaiveDate,
    config: &IntelligenceConfig,
) -> Option<DailyTargets> {
    let Some(current) = latest_entry_on_or_before(weights, as_of) else {
        debug!(%as_of, "No weight entry on or before date, daily targets unavailable");
        return None;
    };
    let current_weight_lbs = current.weight_lbs;

    let energy = estimate_energy(profile, current_weight_lbs, as_of, &config.nutrition)?;

    let active_goal = goal.filter(|g| g.is_active);
    if goal.is_some() && active_goal.is_none() {
        debug!("Goal is not active, using maintenance calories");
    }
    let kind = active_goal.map_or(GoalKind::Maintenance, |g| g.kind);

    let adjustment = adjust_calories_for_goal(
        energy.tdee,
        current_weight_lbs,
        &kind,
        &config.nutrition.calorie_adjustment,
    );
    let macros = allocate_macros(
        adjustment.adjusted_calories,
        current_weight_lbs,
        &config.nutrition.macros,
    );

    Some(DailyTargets {
        as_of,
        current_weight_lbs,
        goal_id: active_goal.map(|g| g.id),
        energy,
        adjustment,
        macros,
    })
}

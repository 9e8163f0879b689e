// ABOUTME: Goal progress projection with Sunday-aligned weekly check-ins
// ABOUTME: Compares expected and observed weight change and derives an on-track verdict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Goal Progress Projector
//!
//! Projects a goal's expected weight trajectory from its weekly rate and compares
//! it with the observed weight history. Weekly check-ins are anchored to Sundays
//! rather than to the goal's start date, so every user sees the same cadence.
//!
//! A goal that starts on a Sunday uses its start date as week 0. Otherwise the
//! anchor follows [`MidWeekAnchor`]: the next Sunday, or the Sunday after it.
//! Week `n` expects `start_weight + weekly_rate * n`.

use crate::config::intelligence::{GoalProgressConfig, MidWeekAnchor};
use chrono::{Datelike, Duration, NaiveDate};
use ironlog_core::constants::units::{DAYS_PER_WEEK, DAYS_PER_WEEK_I64};
use ironlog_core::models::{collapse_daily, latest_entry_on_or_before, Goal, GoalKind, WeightEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// One Sunday check-in of the weekly breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProgress {
    /// Weeks since the anchor Sunday
    pub week: u32,
    /// Display label
    pub label: String,
    /// Check-in date, always a Sunday
    pub sunday: NaiveDate,
    /// Projected bodyweight (lbs)
    pub expected_weight: f64,
    /// Observed bodyweight closest to the Sunday within its week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_weight: Option<f64>,
    /// `actual_weight - expected_weight`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
}

/// Progress of a goal as of a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Goal this report describes
    pub goal_id: Uuid,
    /// Days since the start date, never negative
    pub days_elapsed: i64,
    /// Days until the end date, never negative
    pub days_remaining: i64,
    /// Length of the goal in days
    pub total_days: i64,
    /// Elapsed share of the goal, capped at 100
    pub progress_percent: f64,
    /// Expected change per week (lbs, negative for loss)
    pub weekly_rate_lbs: f64,
    /// Expected cumulative change so far (lbs)
    pub expected_weight_change: f64,
    /// Latest observed weight on or before today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_weight: Option<f64>,
    /// Observed cumulative change so far (lbs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_weight_change: Option<f64>,
    /// `None` when there is no observation or the expected change is too small to judge
    pub on_track: Option<bool>,
    /// Whether the start date is not a Sunday
    pub started_mid_week: bool,
    /// User-facing notices
    pub notices: Vec<String>,
    /// Sunday check-ins from the anchor through the end date
    pub weekly: Vec<WeeklyProgress>,
}

/// Expected weekly weight change for a goal (lbs, negative for loss)
///
/// Percentage fat loss rates are resolved against the goal's start weight.
#[must_use]
pub fn weekly_rate_lbs(goal: &Goal, config: &GoalProgressConfig) -> f64 {
    match goal.kind {
        GoalKind::FatLoss { rate } => -rate.lbs_per_week(goal.start_weight_lbs()),
        GoalKind::Maintenance => 0.0,
        GoalKind::MuscleGain { .. } => config.muscle_gain_weekly_rate_lbs,
    }
}

/// First weekly check-in Sunday for a goal starting on `start_date`
#[must_use]
pub fn anchor_sunday(start_date: NaiveDate, policy: MidWeekAnchor) -> NaiveDate {
    let offset = start_date.weekday().num_days_from_sunday();
    if offset == 0 {
        return start_date;
    }
    let next_sunday = start_date + Duration::days(DAYS_PER_WEEK_I64 - i64::from(offset));
    match policy {
        MidWeekAnchor::NextSunday => next_sunday,
        MidWeekAnchor::SecondSunday => next_sunday + Duration::days(DAYS_PER_WEEK_I64),
    }
}

/// Project a goal's progress as of `today`
#[must_use]
pub fn project_goal_progress(
    goal: &Goal,
    weights: &[WeightEntry],
    today: NaiveDate,
    config: &GoalProgressConfig,
) -> GoalProgress {
    let start = goal.start_date;
    let end = goal.effective_end_date();
    let start_weight = goal.start_weight_lbs();

    let total_days = (end - start).num_days();
    let days_elapsed = (today - start).num_days().max(0);
    let days_remaining = (end - today).num_days().max(0);
    let progress_percent = if total_days > 0 {
        (days_elapsed as f64 / total_days as f64 * 100.0).min(100.0)
    } else {
        100.0
    };

    let weekly_rate = weekly_rate_lbs(goal, config);
    let expected_weight_change = weekly_rate * days_elapsed as f64 / DAYS_PER_WEEK;

    let current_weight = latest_entry_on_or_before(weights, today).map(|entry| entry.weight_lbs);
    let actual_weight_change = current_weight.map(|weight| weight - start_weight);

    let on_track = actual_weight_change.and_then(|actual| {
        if expected_weight_change.abs() <= config.min_expected_change_lbs {
            return None;
        }
        let variance = (actual - expected_weight_change).abs() / expected_weight_change.abs();
        Some(variance <= config.on_track_tolerance)
    });

    let started_mid_week = start.weekday().num_days_from_sunday() != 0;
    let anchor = anchor_sunday(start, config.mid_week_anchor);
    let mut notices = Vec::new();
    if started_mid_week {
        notices.push(format!(
            "Goal started mid-week on a {}; weekly check-ins begin Sunday {}",
            start.format("%A"),
            anchor.format("%b %-d")
        ));
    }

    let weekly = weekly_breakdown(anchor, end, start_weight, weekly_rate, weights, today);

    debug!(
        goal_id = %goal.id,
        days_elapsed,
        expected_weight_change,
        ?actual_weight_change,
        ?on_track,
        weeks = weekly.len(),
        "Projected goal progress"
    );

    GoalProgress {
        goal_id: goal.id,
        days_elapsed,
        days_remaining,
        total_days,
        progress_percent,
        weekly_rate_lbs: weekly_rate,
        expected_weight_change,
        current_weight,
        actual_weight_change,
        on_track,
        started_mid_week,
        notices,
        weekly,
    }
}

fn weekly_breakdown(
    anchor: NaiveDate,
    end: NaiveDate,
    start_weight: f64,
    weekly_rate: f64,
    weights: &[WeightEntry],
    today: NaiveDate,
) -> Vec<WeeklyProgress> {
    let daily = collapse_daily(weights);
    let mut weekly = Vec::new();
    let mut sunday = anchor;
    let mut week = 0_u32;

    while sunday <= end {
        let expected_weight = weekly_rate.mul_add(f64::from(week), start_weight);
        let actual_weight = if sunday > today {
            None
        } else {
            closest_in_week(&daily, sunday)
        };

        weekly.push(WeeklyProgress {
            week,
            label: format!("Week {week} ({})", sunday.format("%b %-d")),
            sunday,
            expected_weight,
            actual_weight,
            variance: actual_weight.map(|actual| actual - expected_weight),
        });

        sunday += Duration::days(DAYS_PER_WEEK_I64);
        week += 1;
    }

    weekly
}

/// Weight observed within the seven days ending on `sunday`, closest to it
///
/// `daily` holds one entry per date in ascending order.
fn closest_in_week(daily: &[WeightEntry], sunday: NaiveDate) -> Option<f64> {
    let window_start = sunday - Duration::days(DAYS_PER_WEEK_I64 - 1);
    daily
        .iter()
        .rev()
        .find(|entry| entry.date >= window_start && entry.date <= sunday)
        .map(|entry| entry.weight_lbs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironlog_core::models::FatLossRate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn one_pound_loss(start: NaiveDate, weeks: u32) -> Goal {
        Goal::new(
            GoalKind::FatLoss {
                rate: FatLossRate::Absolute { lbs_per_week: 1.0 },
            },
            180.0,
            start,
            weeks,
        )
    }

    #[test]
    fn test_anchor_policies() {
        // 2025-01-05 is a Sunday
        assert_eq!(anchor_sunday(date(2025, 1, 5), MidWeekAnchor::SecondSunday), date(2025, 1, 5));
        assert_eq!(anchor_sunday(date(2025, 1, 8), MidWeekAnchor::NextSunday), date(2025, 1, 12));
        assert_eq!(anchor_sunday(date(2025, 1, 8), MidWeekAnchor::SecondSunday), date(2025, 1, 19));
        assert_eq!(anchor_sunday(date(2025, 1, 11), MidWeekAnchor::NextSunday), date(2025, 1, 12));
    }

    #[test]
    fn test_not_on_track_outside_tolerance() {
        let start = date(2025, 1, 5);
        let goal = one_pound_loss(start, 8);
        let today = start + Duration::days(28);
        let weights = vec![WeightEntry::new(177.0, today)];

        let progress = project_goal_progress(&goal, &weights, today, &GoalProgressConfig::default());
        assert!((progress.expected_weight_change + 4.0).abs() < 1e-9);
        assert!((progress.actual_weight_change.unwrap() + 3.0).abs() < 1e-9);
        assert_eq!(progress.on_track, Some(false));
    }

    #[test]
    fn test_on_track_when_matching_expectation() {
        let start = date(2025, 1, 5);
        let goal = one_pound_loss(start, 8);
        let today = start + Duration::days(28);
        let weights = vec![WeightEntry::new(176.0, today)];

        let progress = project_goal_progress(&goal, &weights, today, &GoalProgressConfig::default());
        assert_eq!(progress.on_track, Some(true));
        assert_eq!(progress.days_elapsed, 28);
        assert_eq!(progress.days_remaining, 28);
        assert!((progress.progress_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_maintenance_verdict_is_indeterminate() {
        let start = date(2025, 1, 5);
        let goal = Goal::new(GoalKind::Maintenance, 165.0, start, 6);
        let today = start + Duration::days(14);
        let weights = vec![WeightEntry::new(166.0, today)];

        let progress = project_goal_progress(&goal, &weights, today, &GoalProgressConfig::default());
        assert_eq!(progress.on_track, None);
        assert!(progress.actual_weight_change.is_some());
    }

    #[test]
    fn test_sunday_start_week_zero_expects_start_weight() {
        let start = date(2025, 1, 5);
        let goal = one_pound_loss(start, 4);
        let progress = project_goal_progress(&goal, &[], start, &GoalProgressConfig::default());

        assert!(!progress.started_mid_week);
        assert!(progress.notices.is_empty());
        assert_eq!(progress.weekly.len(), 5);
        assert_eq!(progress.weekly[0].sunday, start);
        assert!((progress.weekly[0].expected_weight - 180.0).abs() < f64::EPSILON);
        assert!((progress.weekly[4].expected_weight - 176.0).abs() < f64::EPSILON);
        assert_eq!(progress.on_track, None);
    }

    #[test]
    fn test_mid_week_start_skips_partial_week() {
        // Wednesday start, four weeks: end 2025-02-05
        let start = date(2025, 1, 8);
        let goal = one_pound_loss(start, 4);
        let progress = project_goal_progress(&goal, &[], start, &GoalProgressConfig::default());

        assert!(progress.started_mid_week);
        assert!(progress.notices[0].starts_with("Goal started mid-week"));
        let sundays: Vec<_> = progress.weekly.iter().map(|w| w.sunday).collect();
        assert_eq!(sundays, vec![date(2025, 1, 19), date(2025, 1, 26), date(2025, 2, 2)]);
    }

    #[test]
    fn test_weekly_actual_prefers_entry_closest_to_sunday() {
        let start = date(2025, 1, 5);
        let goal = one_pound_loss(start, 4);
        let weights = vec![
            WeightEntry::new(179.5, date(2025, 1, 7)),
            WeightEntry::new(179.0, date(2025, 1, 11)),
            WeightEntry::new(178.6, date(2025, 1, 12)),
            WeightEntry::new(178.2, date(2025, 1, 12)),
            WeightEntry::new(177.0, date(2025, 1, 20)),
            WeightEntry::new(176.5, date(2025, 1, 25)),
        ];
        let today = date(2025, 1, 20);

        let progress = project_goal_progress(&goal, &weights, today, &GoalProgressConfig::default());
        let week1 = &progress.weekly[1];
        assert_eq!(week1.sunday, date(2025, 1, 12));
        assert_eq!(week1.actual_weight, Some(178.2));
        assert!((week1.variance.unwrap() - (178.2 - 179.0)).abs() < 1e-9);

        // Nothing logged between Jan 13 and Jan 19
        assert_eq!(progress.weekly[2].sunday, date(2025, 1, 19));
        assert_eq!(progress.weekly[2].actual_weight, None);

        // Sundays after today never get an actual, even with an entry in the window
        assert_eq!(progress.weekly[3].sunday, date(2025, 1, 26));
        assert_eq!(progress.weekly[3].actual_weight, None);
        assert_eq!(progress.current_weight, Some(177.0));
    }

    #[test]
    fn test_duration_clamped_before_projection() {
        let start = date(2025, 1, 5);
        let goal = one_pound_loss(start, 40);
        let progress = project_goal_progress(&goal, &[], start, &GoalProgressConfig::default());
        assert_eq!(progress.total_days, 16 * 7);
    }

    #[test]
    fn test_future_start_has_no_elapsed_days() {
        let start = date(2025, 3, 2);
        let goal = one_pound_loss(start, 4);
        let progress =
            project_goal_progress(&goal, &[], date(2025, 2, 20), &GoalProgressConfig::default());
        assert_eq!(progress.days_elapsed, 0);
        assert!(progress.progress_percent.abs() < f64::EPSILON);
    }
}

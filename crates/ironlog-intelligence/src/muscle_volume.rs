// ABOUTME: Weekly per-muscle-group set volume aggregated from a mesocycle plan
// ABOUTME: Credits primary and secondary muscles and classifies volume against warning bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Muscle Volume Aggregator
//!
//! Counts one training week of a mesocycle: every exercise occurrence credits its
//! primary muscle group a full set and each secondary group half a set. The result
//! describes a single week regardless of how many weeks the block runs.
//!
//! Classification is advisory. Plans with low or high volume remain valid.

use crate::config::intelligence::{SetCreditConfig, TrainingVolumeConfig, VolumeThresholdsConfig};
use ironlog_core::errors::AppResult;
use ironlog_core::models::{ExerciseLookup, MesocyclePlan, MuscleGroup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Weekly sets per muscle group; every known group is present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MuscleGroupVolume(BTreeMap<MuscleGroup, f64>);

impl Default for MuscleGroupVolume {
    fn default() -> Self {
        Self(MuscleGroup::ALL.into_iter().map(|group| (group, 0.0)).collect())
    }
}

impl MuscleGroupVolume {
    /// Sets credited to `group`
    #[must_use]
    pub fn get(&self, group: MuscleGroup) -> f64 {
        self.0.get(&group).copied().unwrap_or(0.0)
    }

    /// Groups in declaration order with their volume
    pub fn iter(&self) -> impl Iterator<Item = (MuscleGroup, f64)> + '_ {
        self.0.iter().map(|(group, volume)| (*group, *volume))
    }

    /// Sum over all groups
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    fn credit(&mut self, group: MuscleGroup, sets: f64) {
        *self.0.entry(group).or_insert(0.0) += sets;
    }
}

/// Volume warning for one muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeWarning {
    /// Untrained, non-specialized group
    None,
    /// Below the band
    Low,
    /// Within the band
    Normal,
    /// Above the band
    High,
}

/// Volume and classification of one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleVolumeReport {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Weekly sets
    pub volume: f64,
    /// Whether the plan specializes this group
    pub is_specialized: bool,
    /// Classification against the applicable band
    pub warning: VolumeWarning,
}

/// Aggregate one week of a plan with the standard set credit
#[must_use]
pub fn aggregate_muscle_volume<L>(plan: &MesocyclePlan, lookup: &L) -> MuscleGroupVolume
where
    L: ExerciseLookup + ?Sized,
{
    aggregate_muscle_volume_with_credit(plan, lookup, &SetCreditConfig::default())
}

/// Aggregate one week of a plan with custom set credit
///
/// Exercise references missing from `lookup` are skipped.
#[must_use]
pub fn aggregate_muscle_volume_with_credit<L>(
    plan: &MesocyclePlan,
    lookup: &L,
    credit: &SetCreditConfig,
) -> MuscleGroupVolume
where
    L: ExerciseLookup + ?Sized,
{
    let mut volume = MuscleGroupVolume::default();

    for day in &plan.days {
        for exercise_id in &day.exercise_ids {
            let Some(exercise) = lookup.exercise(exercise_id) else {
                warn!(
                    plan = %plan.name,
                    day = day.day_number,
                    exercise_id = %exercise_id,
                    "Unknown exercise in plan, skipping"
                );
                continue;
            };

            volume.credit(exercise.primary_muscle_group, credit.primary);
            for secondary in &exercise.secondary_muscle_groups {
                volume.credit(*secondary, credit.secondary);
            }
        }
    }

    debug!(plan = %plan.name, total_sets = volume.total(), "Aggregated weekly muscle volume");
    volume
}

/// Classify a weekly volume against the specialized or standard band
///
/// Zero volume on a non-specialized group is `None`; a specialized group with
/// zero volume is `Low`.
#[must_use]
pub fn classify_volume(
    volume: f64,
    is_specialized: bool,
    thresholds: &VolumeThresholdsConfig,
) -> VolumeWarning {
    if !is_specialized && volume <= 0.0 {
        return VolumeWarning::None;
    }

    let band = if is_specialized {
        thresholds.specialized
    } else {
        thresholds.standard
    };

    if volume < band.low_below {
        VolumeWarning::Low
    } else if volume > band.high_above {
        VolumeWarning::High
    } else {
        VolumeWarning::Normal
    }
}

/// Volume and warning for every muscle group of a plan, in muscle-group order
///
/// # Errors
///
/// Returns the plan's validation error when it breaks a structural invariant,
/// such as specializing more than two muscle groups
pub fn analyze_plan_volume<L>(
    plan: &MesocyclePlan,
    lookup: &L,
    config: &TrainingVolumeConfig,
) -> AppResult<Vec<MuscleVolumeReport>>
where
    L: ExerciseLookup + ?Sized,
{
    plan.validate()?;

    Ok(aggregate_muscle_volume_with_credit(plan, lookup, &config.set_credit)
        .iter()
        .map(|(muscle_group, volume)| {
            let is_specialized = plan.is_specialized(muscle_group);
            MuscleVolumeReport {
                muscle_group,
                volume,
                is_specialized,
                warning: classify_volume(volume, is_specialized, &config.thresholds),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironlog_core::errors::ErrorCode;
    use ironlog_core::models::{DayPlan, Exercise};

    fn catalog() -> Vec<Exercise> {
        vec![
            Exercise::new("bench", "Bench Press", MuscleGroup::Chest, vec![MuscleGroup::Triceps]),
            Exercise::new("row", "Barbell Row", MuscleGroup::Back, vec![MuscleGroup::Biceps]),
            Exercise::new("squat", "Back Squat", MuscleGroup::Quads, vec![MuscleGroup::Glutes]),
        ]
    }

    fn plan(days: Vec<DayPlan>, specializations: Vec<MuscleGroup>) -> MesocyclePlan {
        MesocyclePlan {
            name: "Full Body".to_owned(),
            weeks: 4,
            days_per_week: 3,
            specializations,
            days,
        }
    }

    #[test]
    fn test_primary_and_secondary_credit() {
        let plan = plan(
            vec![DayPlan::new(1, ["bench"]), DayPlan::new(2, ["bench"])],
            vec![MuscleGroup::Chest],
        );
        let volume = aggregate_muscle_volume(&plan, catalog().as_slice());
        assert!((volume.get(MuscleGroup::Chest) - 2.0).abs() < f64::EPSILON);
        assert!((volume.get(MuscleGroup::Triceps) - 1.0).abs() < f64::EPSILON);
        assert!(volume.get(MuscleGroup::Calves).abs() < f64::EPSILON);
        assert_eq!(volume.iter().count(), MuscleGroup::ALL.len());
    }

    #[test]
    fn test_weeks_do_not_multiply_volume() {
        let mut block = plan(vec![DayPlan::new(1, ["squat"])], vec![]);
        let four_weeks = aggregate_muscle_volume(&block, &catalog());
        block.weeks = 8;
        let eight_weeks = aggregate_muscle_volume(&block, &catalog());
        assert_eq!(four_weeks, eight_weeks);
    }

    #[test]
    fn test_unknown_exercises_skipped() {
        let block = plan(vec![DayPlan::new(1, ["bench", "cable_fly"])], vec![]);
        let volume = aggregate_muscle_volume(&block, &catalog());
        assert!((volume.total() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_specialized_band() {
        let thresholds = VolumeThresholdsConfig::default();
        assert_eq!(classify_volume(0.0, true, &thresholds), VolumeWarning::Low);
        assert_eq!(classify_volume(2.0, true, &thresholds), VolumeWarning::Low);
        assert_eq!(classify_volume(3.0, true, &thresholds), VolumeWarning::Normal);
        assert_eq!(classify_volume(5.0, true, &thresholds), VolumeWarning::Normal);
        assert_eq!(classify_volume(5.5, true, &thresholds), VolumeWarning::High);
    }

    #[test]
    fn test_standard_band() {
        let thresholds = VolumeThresholdsConfig::default();
        assert_eq!(classify_volume(0.0, false, &thresholds), VolumeWarning::None);
        assert_eq!(classify_volume(1.5, false, &thresholds), VolumeWarning::Low);
        assert_eq!(classify_volume(2.0, false, &thresholds), VolumeWarning::Normal);
        assert_eq!(classify_volume(4.0, false, &thresholds), VolumeWarning::Normal);
        assert_eq!(classify_volume(4.5, false, &thresholds), VolumeWarning::High);
    }

    #[test]
    fn test_report_marks_specializations() {
        let block = plan(
            vec![DayPlan::new(1, ["bench", "row"]), DayPlan::new(2, ["bench"])],
            vec![MuscleGroup::Chest],
        );
        let report =
            analyze_plan_volume(&block, &catalog(), &TrainingVolumeConfig::default()).unwrap();
        let chest = report
            .iter()
            .find(|r| r.muscle_group == MuscleGroup::Chest)
            .unwrap();
        assert!(chest.is_specialized);
        assert_eq!(chest.warning, VolumeWarning::Low);

        let back = report
            .iter()
            .find(|r| r.muscle_group == MuscleGroup::Back)
            .unwrap();
        assert_eq!(back.warning, VolumeWarning::Low);
        assert_eq!(report[0].muscle_group, MuscleGroup::Chest);
    }

    #[test]
    fn test_report_rejects_three_specializations() {
        let block = plan(
            vec![DayPlan::new(1, ["bench", "row", "squat"])],
            vec![MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Quads],
        );
        let err =
            analyze_plan_volume(&block, &catalog(), &TrainingVolumeConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("At most 2"), "{}", err.message);
    }
}

// ABOUTME: Mesocycle training plan models with muscle-group tagged exercises
// ABOUTME: MesocyclePlan, DayPlan, Exercise, MuscleGroup and the ExerciseLookup seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Upper bound on specialized muscle groups per plan
pub const MAX_SPECIALIZATIONS: usize = 2;

/// Muscle groups tracked for weekly volume
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats and mid-back
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Forearms and grip
    Forearms,
    /// Upper trapezius
    Traps,
    /// Quadriceps
    Quads,
    /// Hamstrings
    Hamstrings,
    /// Glutes
    Glutes,
    /// Calves
    Calves,
    /// Abdominals
    Abs,
}

impl MuscleGroup {
    /// Every known group in display order
    pub const ALL: [Self; 12] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Forearms,
        Self::Traps,
        Self::Quads,
        Self::Hamstrings,
        Self::Glutes,
        Self::Calves,
        Self::Abs,
    ];

    /// Stable upper-case identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "CHEST",
            Self::Back => "BACK",
            Self::Shoulders => "SHOULDERS",
            Self::Biceps => "BICEPS",
            Self::Triceps => "TRICEPS",
            Self::Forearms => "FOREARMS",
            Self::Traps => "TRAPS",
            Self::Quads => "QUADS",
            Self::Hamstrings => "HAMSTRINGS",
            Self::Glutes => "GLUTES",
            Self::Calves => "CALVES",
            Self::Abs => "ABS",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == wanted)
            .ok_or_else(|| AppError::invalid_format(format!("Unknown muscle group '{s}'")))
    }
}

/// Subjective intensity unit logged per set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntensityUnit {
    /// Reps in reserve
    Rir,
    /// Rate of perceived exertion
    Rpe,
}

/// An exercise from the user's catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Catalog identifier referenced by day plans
    pub id: String,
    /// Display name
    pub name: String,
    /// Muscle group receiving a full set of volume
    pub primary_muscle_group: MuscleGroup,
    /// Muscle groups receiving half a set of volume
    #[serde(default)]
    pub secondary_muscle_groups: Vec<MuscleGroup>,
    /// Sets are logged in RIR when true, RPE otherwise
    #[serde(default = "default_uses_rir")]
    pub uses_rir: bool,
}

const fn default_uses_rir() -> bool {
    true
}

impl Exercise {
    /// Create an RIR-logged exercise
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        primary_muscle_group: MuscleGroup,
        secondary_muscle_groups: Vec<MuscleGroup>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            primary_muscle_group,
            secondary_muscle_groups,
            uses_rir: true,
        }
    }

    /// Intensity unit selected by the RIR flag
    #[must_use]
    pub const fn intensity_unit(&self) -> IntensityUnit {
        if self.uses_rir {
            IntensityUnit::Rir
        } else {
            IntensityUnit::Rpe
        }
    }
}

/// Resolves exercise references held by day plans
pub trait ExerciseLookup {
    /// Look up an exercise by catalog id
    fn exercise(&self, id: &str) -> Option<&Exercise>;
}

impl ExerciseLookup for HashMap<String, Exercise> {
    fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.get(id)
    }
}

impl ExerciseLookup for [Exercise] {
    fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.iter().find(|e| e.id == id)
    }
}

impl ExerciseLookup for Vec<Exercise> {
    fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.as_slice().exercise(id)
    }
}

/// One training day in the repeating week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based position within the week
    pub day_number: u8,
    /// Ordered exercise references
    pub exercise_ids: Vec<String>,
}

impl DayPlan {
    /// Create a day from exercise ids
    pub fn new<I, S>(day_number: u8, exercise_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            day_number,
            exercise_ids: exercise_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// A multi-week training block built from one repeating week of day plans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MesocyclePlan {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Number of weeks the block runs
    pub weeks: u32,
    /// Training days in each week
    pub days_per_week: u8,
    /// Up to two emphasized muscle groups
    #[serde(default)]
    pub specializations: Vec<MuscleGroup>,
    /// Day plans of one training week
    pub days: Vec<DayPlan>,
}

impl MesocyclePlan {
    /// Whether `group` is one of the plan's specializations
    #[must_use]
    pub fn is_specialized(&self, group: MuscleGroup) -> bool {
        self.specializations.contains(&group)
    }

    /// Check structural invariants
    ///
    /// # Errors
    ///
    /// Returns `AppError` when the block has no weeks, the day count is outside 1-7,
    /// a day number is out of range or duplicated, or more than two distinct
    /// muscle groups are specialized
    pub fn validate(&self) -> AppResult<()> {
        if self.weeks == 0 {
            return Err(AppError::value_out_of_range(
                "Mesocycle must run for at least one week",
            ));
        }
        if !(1..=7).contains(&self.days_per_week) {
            return Err(AppError::value_out_of_range(
                "Days per week must be between 1 and 7",
            ));
        }

        let mut seen_days = HashSet::new();
        for day in &self.days {
            if day.day_number == 0 || day.day_number > self.days_per_week {
                return Err(AppError::value_out_of_range(format!(
                    "Day number {} is outside 1..={}",
                    day.day_number, self.days_per_week
                )));
            }
            if !seen_days.insert(day.day_number) {
                return Err(AppError::invalid_input(format!(
                    "Day number {} appears more than once",
                    day.day_number
                )));
            }
        }

        let distinct: HashSet<_> = self.specializations.iter().collect();
        if distinct.len() > MAX_SPECIALIZATIONS {
            return Err(AppError::invalid_input(format!(
                "At most {MAX_SPECIALIZATIONS} muscle groups can be specialized, got {}",
                distinct.len()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(days_per_week: u8, days: Vec<DayPlan>, specializations: Vec<MuscleGroup>) -> MesocyclePlan {
        MesocyclePlan {
            name: "Upper/Lower".to_owned(),
            weeks: 5,
            days_per_week,
            specializations,
            days,
        }
    }

    #[test]
    fn test_valid_plan_passes() {
        let plan = plan(
            2,
            vec![DayPlan::new(1, ["bench"]), DayPlan::new(2, ["squat"])],
            vec![MuscleGroup::Chest, MuscleGroup::Quads],
        );
        assert!(plan.validate().is_ok());
        assert!(plan.is_specialized(MuscleGroup::Chest));
        assert!(!plan.is_specialized(MuscleGroup::Back));
    }

    #[test]
    fn test_three_specializations_rejected() {
        let plan = plan(
            1,
            vec![DayPlan::new(1, ["bench"])],
            vec![MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Glutes],
        );
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_day_numbers_must_fit_the_week() {
        let out_of_range = plan(2, vec![DayPlan::new(3, ["bench"])], vec![]);
        assert!(out_of_range.validate().is_err());

        let duplicated = plan(
            3,
            vec![DayPlan::new(1, ["bench"]), DayPlan::new(1, ["row"])],
            vec![],
        );
        assert!(duplicated.validate().is_err());
    }

    #[test]
    fn test_muscle_group_parsing_is_case_insensitive() {
        assert_eq!("triceps".parse::<MuscleGroup>().unwrap(), MuscleGroup::Triceps);
        assert_eq!(
            serde_json::to_value(MuscleGroup::Hamstrings).unwrap(),
            "HAMSTRINGS"
        );
        assert!("neck".parse::<MuscleGroup>().is_err());
    }

    #[test]
    fn test_intensity_unit_follows_flag() {
        let mut exercise = Exercise::new("ohp", "Overhead Press", MuscleGroup::Shoulders, vec![]);
        assert_eq!(exercise.intensity_unit(), IntensityUnit::Rir);
        exercise.uses_rir = false;
        assert_eq!(exercise.intensity_unit(), IntensityUnit::Rpe);
    }
}

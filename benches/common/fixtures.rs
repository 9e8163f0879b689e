// ABOUTME: Benchmark fixtures for generating weight histories, profiles, and mesocycle plans
// ABOUTME: Data generation is deterministic so measurements are reproducible between runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Benchmark fixtures.

use chrono::{Duration, NaiveDate};
use ironlog::models::{
    ActivityLevel, BiologicalSex, DayPlan, Exercise, MesocyclePlan, MuscleGroup, Profile,
    WeightEntry,
};

/// Predefined weight history lengths
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One month of daily weigh-ins
    Month,
    /// One quarter of daily weigh-ins
    Quarter,
    /// One year of daily weigh-ins
    Year,
}

impl HistorySize {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }
}

/// First day of every generated history (a Sunday)
#[must_use]
pub fn history_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 5).unwrap_or_default()
}

/// Profile complete enough for energy estimation
#[must_use]
pub fn bench_profile() -> Profile {
    Profile::new(
        68.0,
        BiologicalSex::Female,
        NaiveDate::from_ymd_opt(1990, 3, 14).unwrap_or_default(),
        ActivityLevel::LightlyActive,
    )
}

/// Daily weigh-ins trending down with a weekly water-weight wobble
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_weight_history(size: HistorySize) -> Vec<WeightEntry> {
    let start = history_start();
    (0..size.days())
        .map(|index| {
            let trend = 185.0 - index as f64 * 0.12;
            let wobble = ((index * 7) % 5) as f64 * 0.2 - 0.4;
            WeightEntry::new(trend + wobble, start + Duration::days(index as i64))
        })
        .collect()
}

/// Catalog cycling through every muscle group as primary
#[must_use]
pub fn generate_catalog(count: usize) -> Vec<Exercise> {
    let groups = MuscleGroup::ALL;
    (0..count)
        .map(|index| {
            let primary = groups[index % groups.len()];
            let secondary = groups[(index + 3) % groups.len()];
            Exercise::new(
                format!("bench_exercise_{index}"),
                format!("Benchmark Exercise {index}"),
                primary,
                vec![secondary],
            )
        })
        .collect()
}

/// Plan with `days` training days of `per_day` exercises drawn from `catalog`
#[must_use]
pub fn generate_plan(catalog: &[Exercise], days: u8, per_day: usize) -> MesocyclePlan {
    let day_plans = (1..=days)
        .map(|day| {
            let ids = (0..per_day).map(|slot| {
                let index = (usize::from(day) * per_day + slot) % catalog.len();
                catalog[index].id.clone()
            });
            DayPlan::new(day, ids)
        })
        .collect();

    MesocyclePlan {
        name: "Benchmark Block".to_owned(),
        weeks: 6,
        days_per_week: days,
        specializations: vec![MuscleGroup::Chest, MuscleGroup::Glutes],
        days: day_plans,
    }
}

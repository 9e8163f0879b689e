// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet test logging and profile, goal, and plan builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ironlog`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use chrono::{Duration, NaiveDate};
use ironlog::models::{
    ActivityLevel, BiologicalSex, DayPlan, Exercise, FatLossRate, Goal, GoalKind, MesocyclePlan,
    MuscleGroup, Profile, WeightEntry,
};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        // Another test binary helper may already have installed a subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Reference date on which the reference profile is 30 years old
pub fn reference_date() -> NaiveDate {
    date(2024, 6, 2)
}

/// Male, 70 in, born 1994-06-01, moderately active
pub fn reference_profile() -> Profile {
    Profile::new(
        70.0,
        BiologicalSex::Male,
        date(1994, 6, 1),
        ActivityLevel::ModeratelyActive,
    )
}

/// Fat loss goal at a fixed pounds-per-week rate
pub fn absolute_fat_loss_goal(
    lbs_per_week: f64,
    start_weight: f64,
    start: NaiveDate,
    weeks: u32,
) -> Goal {
    Goal::new(
        GoalKind::FatLoss {
            rate: FatLossRate::Absolute { lbs_per_week },
        },
        start_weight,
        start,
        weeks,
    )
}

/// Daily weigh-ins changing by `daily_change` per day from `start_weight`
pub fn linear_weights(start: NaiveDate, days: i64, start_weight: f64, daily_change: f64) -> Vec<WeightEntry> {
    (0..days)
        .map(|offset| {
            WeightEntry::new(
                daily_change.mul_add(offset as f64, start_weight),
                start + Duration::days(offset),
            )
        })
        .collect()
}

/// Small exercise catalog covering compound and isolation lifts
pub fn exercise_catalog() -> Vec<Exercise> {
    vec![
        Exercise::new("bench", "Bench Press", MuscleGroup::Chest, vec![MuscleGroup::Triceps]),
        Exercise::new(
            "incline_db",
            "Incline Dumbbell Press",
            MuscleGroup::Chest,
            vec![MuscleGroup::Shoulders, MuscleGroup::Triceps],
        ),
        Exercise::new("pulldown", "Lat Pulldown", MuscleGroup::Back, vec![MuscleGroup::Biceps]),
        Exercise::new("squat", "Back Squat", MuscleGroup::Quads, vec![MuscleGroup::Glutes]),
        Exercise::new("rdl", "Romanian Deadlift", MuscleGroup::Hamstrings, vec![MuscleGroup::Glutes]),
        Exercise::new("curl", "Barbell Curl", MuscleGroup::Biceps, vec![MuscleGroup::Forearms]),
    ]
}

/// Upper/lower four-day plan
pub fn upper_lower_plan(specializations: Vec<MuscleGroup>) -> MesocyclePlan {
    MesocyclePlan {
        name: "Upper/Lower".to_owned(),
        weeks: 6,
        days_per_week: 4,
        specializations,
        days: vec![
            DayPlan::new(1, ["bench", "incline_db", "pulldown", "curl"]),
            DayPlan::new(2, ["squat", "rdl"]),
            DayPlan::new(3, ["bench", "pulldown", "pulldown"]),
            DayPlan::new(4, ["squat", "rdl", "squat"]),
        ],
    }
}

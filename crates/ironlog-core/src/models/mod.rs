// ABOUTME: Core data models for the Ironlog goal and nutrition engine
// ABOUTME: Re-exports Profile, WeightEntry, Goal, MesocyclePlan and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! # Data Models
//!
//! Inputs consumed by the calculation engine. Storage, authentication and CRUD
//! belong to the surrounding application; these types only describe the data
//! the engine reasons about.
//!
//! ## Core Models
//!
//! - `Profile`: body and activity attributes (each optional until the user completes setup)
//! - `WeightEntry`: a single bodyweight observation
//! - `Goal`: a time-boxed fat loss, maintenance, or muscle gain objective
//! - `MesocyclePlan`: a repeating training week made of `DayPlan`s
//! - `Exercise`: an exercise tagged with primary and secondary muscle groups

mod goal;
mod mesocycle;
mod profile;
mod weight;

// Goal domain
pub use goal::{
    activate_goal, active_goal, FatLossRate, Goal, GoalKind, GoalStatus, GoalType, RateType,
    DEFAULT_MUSCLE_GAIN_SURPLUS_KCAL, MAX_GOAL_DURATION_WEEKS, MIN_GOAL_DURATION_WEEKS,
};

// Training domain
pub use mesocycle::{
    DayPlan, Exercise, ExerciseLookup, IntensityUnit, MesocyclePlan, MuscleGroup,
    MAX_SPECIALIZATIONS,
};

// Profile domain
pub use profile::{ActivityLevel, BiologicalSex, Profile};

// Weight domain
pub use weight::{collapse_daily, latest_entry, latest_entry_on_or_before, WeightEntry};

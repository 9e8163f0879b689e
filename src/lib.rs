// ABOUTME: Main library entry point for the Ironlog goal and nutrition engine
// ABOUTME: Re-exports core models and calculators and provides logging and config setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog
//!
//! Goal and nutrition calculation engine for a personal training log.
//!
//! ## Features
//!
//! - **Energy estimation**: BMR (Mifflin-St Jeor) and TDEE from a user profile
//! - **Goal-adjusted calories**: fat loss deficits, muscle gain surpluses, safety floor
//! - **Macro allocation**: protein, fat, and carbohydrate gram targets
//! - **Goal progress**: Sunday-aligned expected vs. actual weight trajectory
//! - **Training volume**: weekly sets per muscle group from a mesocycle plan
//!
//! ## Architecture
//!
//! - **`ironlog-core`**: errors, unit constants, and domain models
//! - **`ironlog-intelligence`**: the calculators and their configuration
//! - this crate: the facade plus logging setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use ironlog::config::IntelligenceConfig;
//! use ironlog::intelligence::calculate_daily_targets;
//! use ironlog::models::{ActivityLevel, BiologicalSex, Profile, WeightEntry};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
//! let profile = Profile::new(
//!     70.0,
//!     BiologicalSex::Male,
//!     NaiveDate::from_ymd_opt(1994, 6, 1).unwrap(),
//!     ActivityLevel::ModeratelyActive,
//! );
//! let weights = vec![WeightEntry::new(180.0, today)];
//!
//! if let Some(targets) =
//!     calculate_daily_targets(&profile, &weights, None, today, IntelligenceConfig::global())
//! {
//!     println!("{} kcal, {} g protein", targets.adjustment.adjusted_calories, targets.macros.protein_g);
//! }
//! ```

/// Engine configuration and the global accessor
pub mod config;

/// Unified error handling re-exported from `ironlog-core`
pub mod errors;

/// Calculators re-exported from `ironlog-intelligence`
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Domain models re-exported from `ironlog-core`
pub mod models;

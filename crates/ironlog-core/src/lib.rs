// ABOUTME: Core types and constants for the Ironlog training and nutrition engine
// ABOUTME: Foundation crate with error handling, unit constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog Core
//!
//! Foundation crate providing shared types and constants for the Ironlog
//! goal and nutrition engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Unit conversions and energy densities
//! - **models**: Profiles, weight history, goals, and mesocycle plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, WeightEntry, Goal, MesocyclePlan)
pub mod models;

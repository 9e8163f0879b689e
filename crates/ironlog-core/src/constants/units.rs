// ABOUTME: Unit conversion constants for body mass, height, and calendar arithmetic
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

/// Pounds per kilogram (as used by the Mifflin-St Jeor inputs)
pub const LBS_PER_KG: f64 = 2.205;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Days per week
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Days per week as an integer for date arithmetic
pub const DAYS_PER_WEEK_I64: i64 = 7;

/// Mean days per year including leap years
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Convert pounds to kilograms
#[must_use]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

/// Convert inches to centimeters
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

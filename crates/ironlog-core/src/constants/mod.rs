// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion and dietary energy densities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.
//! Tunable policy values (floors, thresholds, tolerances) live in the intelligence
//! configuration instead; this module only holds physical facts.

/// Unit conversion and measurement constants
pub mod units;

/// Energy content of macronutrients and body tissue
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

    /// Approximate kilocalories stored in one pound of body fat
    pub const KCAL_PER_POUND_BODY_FAT: f64 = 3500.0;
}

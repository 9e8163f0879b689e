// ABOUTME: Macronutrient allocation from a daily calorie target and bodyweight
// ABOUTME: Protein and fat are set per pound of bodyweight, carbohydrates fill the remainder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::config::intelligence::MacroAllocationConfig;
use ironlog_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Macronutrient percentage breakdown of total macro calories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentages {
    /// Protein share (0-100)
    pub protein_percent: f64,
    /// Fat share (0-100)
    pub fat_percent: f64,
    /// Carbohydrate share (0-100)
    pub carbs_percent: f64,
}

/// Daily gram targets and their calorie equivalents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Calorie target the allocation was built from
    pub target_calories: f64,
    /// Protein grams
    pub protein_g: f64,
    /// Fat grams
    pub fat_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Protein kcal, from rounded grams
    pub protein_calories: f64,
    /// Fat kcal, from rounded grams
    pub fat_calories: f64,
    /// Carbohydrate kcal, from rounded grams
    pub carb_calories: f64,
    /// Sum of the three macro calorie figures
    pub total_calories: f64,
    /// Share of each macro in `total_calories`
    pub percentages: MacroPercentages,
}

/// Allocate macros for the goal-adjusted calorie target
///
/// Protein and fat come first; whatever calories remain go to carbohydrates,
/// never below zero. Gram targets are rounded to whole grams and the calorie
/// figures are recomputed from the rounded grams.
#[must_use]
pub fn allocate_macros(
    adjusted_calories: f64,
    current_weight_lbs: f64,
    config: &MacroAllocationConfig,
) -> MacroTargets {
    let protein_g = current_weight_lbs * config.protein_g_per_lb;
    let fat_g = config.fat_min_g.max(current_weight_lbs * config.fat_g_per_lb);

    let remaining =
        (adjusted_calories - protein_g * KCAL_PER_GRAM_PROTEIN - fat_g * KCAL_PER_GRAM_FAT).max(0.0);
    let carbs_g = remaining / KCAL_PER_GRAM_CARBS;

    let protein_g = protein_g.round();
    let fat_g = fat_g.round();
    let carbs_g = carbs_g.round();

    let protein_calories = protein_g * KCAL_PER_GRAM_PROTEIN;
    let fat_calories = fat_g * KCAL_PER_GRAM_FAT;
    let carb_calories = carbs_g * KCAL_PER_GRAM_CARBS;
    let total_calories = protein_calories + fat_calories + carb_calories;

    let percentages = MacroPercentages {
        protein_percent: share(protein_calories, total_calories),
        fat_percent: share(fat_calories, total_calories),
        carbs_percent: share(carb_calories, total_calories),
    };

    if remaining <= 0.0 {
        debug!(
            adjusted_calories,
            protein_g, fat_g, "Protein and fat exhaust the calorie target, no carbohydrates left"
        );
    }

    MacroTargets {
        target_calories: adjusted_calories,
        protein_g,
        fat_g,
        carbs_g,
        protein_calories,
        fat_calories,
        carb_calories,
        total_calories,
        percentages,
    }
}

/// Percentage of `total`, one decimal place
fn share(part: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    (part / total * 1000.0).round() / 10.0
}

// ABOUTME: Nutrition configuration for energy estimation and calorie/macro targets
// ABOUTME: Configures BMR coefficients, activity factors, goal adjustments, and macro allocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Nutrition Configuration
//!
//! Provides configuration for energy estimation and goal-driven calorie and
//! macronutrient targets.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use serde::{Deserialize, Serialize};

/// Nutrition Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-driven calorie adjustment policy
    pub calorie_adjustment: CalorieAdjustmentConfig,
    /// Protein/fat/carbohydrate allocation
    pub macros: MacroAllocationConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extremely active (hard training 2x/day): 1.9
    pub extremely_active: f64,
}

/// Policy applied when turning TDEE into a goal-specific calorie target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieAdjustmentConfig {
    /// Lowest calorie target a fat loss goal may produce (kcal/day)
    pub calorie_floor: f64,
    /// Absolute fat loss rates above this trigger a sustainability warning (lbs/week)
    pub max_sustainable_absolute_rate_lbs: f64,
    /// Percentage fat loss rates above this trigger a sustainability warning (%/week)
    pub max_sustainable_percentage_rate: f64,
    /// Muscle gain surpluses above this trigger an excess fat gain warning (kcal/day)
    pub high_surplus_threshold: f64,
}

/// Macro allocation rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroAllocationConfig {
    /// Protein grams per pound of bodyweight
    pub protein_g_per_lb: f64,
    /// Minimum daily fat in grams
    pub fat_min_g: f64,
    /// Fat grams per pound of bodyweight (used when above the minimum)
    pub fat_g_per_lb: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extremely_active: 1.9,
        }
    }
}

impl Default for CalorieAdjustmentConfig {
    fn default() -> Self {
        Self {
            calorie_floor: 1100.0,
            max_sustainable_absolute_rate_lbs: 2.0,
            max_sustainable_percentage_rate: 1.5,
            high_surplus_threshold: 500.0,
        }
    }
}

impl Default for MacroAllocationConfig {
    fn default() -> Self {
        Self {
            protein_g_per_lb: 1.0,
            fat_min_g: 50.0,
            fat_g_per_lb: 0.25,
        }
    }
}

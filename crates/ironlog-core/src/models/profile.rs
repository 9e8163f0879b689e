// ABOUTME: User profile model with body measurements and activity level
// ABOUTME: Profile, BiologicalSex, and ActivityLevel definitions with age derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::constants::units::DAYS_PER_YEAR;
use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl FromStr for BiologicalSex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_format(format!(
                "Unknown biological sex '{other}', expected male or female"
            ))),
        }
    }
}

/// Activity level for TDEE calculation, ordered from least to most active
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extremely active (hard training 2x/day or physical job)
    ExtremelyActive,
}

impl ActivityLevel {
    /// All tiers in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    /// Stable snake-case identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtremelyActive => "extremely_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s.trim())
            .ok_or_else(|| AppError::invalid_format(format!("Unknown activity level '{s}'")))
    }
}

/// Body and lifestyle attributes the energy estimator needs
///
/// Every attribute is optional because users fill in their profile gradually.
/// Calculations treat an incomplete profile as indeterminate rather than as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Height in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_inches: Option<f64>,
    /// Biological sex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<BiologicalSex>,
    /// Date of birth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Habitual activity level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
}

impl Profile {
    /// Build a fully populated profile
    #[must_use]
    pub const fn new(
        height_inches: f64,
        sex: BiologicalSex,
        birth_date: NaiveDate,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            height_inches: Some(height_inches),
            sex: Some(sex),
            birth_date: Some(birth_date),
            activity_level: Some(activity_level),
        }
    }

    /// Names of the attributes that still need to be filled in
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.height_inches.is_none() {
            missing.push("height");
        }
        if self.sex.is_none() {
            missing.push("sex");
        }
        if self.birth_date.is_none() {
            missing.push("birth_date");
        }
        if self.activity_level.is_none() {
            missing.push("activity_level");
        }
        missing
    }

    /// Whether every attribute required for energy estimation is present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Age in whole years on the given date (floor of days / 365.25)
    ///
    /// Returns `None` when the birth date is unknown or lies after `as_of`.
    #[must_use]
    pub fn age_on(&self, as_of: NaiveDate) -> Option<u32> {
        let days = (as_of - self.birth_date?).num_days();
        if days < 0 {
            return None;
        }
        let years = (days as f64 / DAYS_PER_YEAR).floor();
        u32::try_from(years as i64).ok()
    }
}

// ABOUTME: Training volume configuration for weekly per-muscle-group set counting
// ABOUTME: Configures primary/secondary set credit and low/high warning bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use serde::{Deserialize, Serialize};

/// Training Volume Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingVolumeConfig {
    /// Set credit per exercise role
    pub set_credit: SetCreditConfig,
    /// Warning bands
    pub thresholds: VolumeThresholdsConfig,
}

/// Volume credited to a muscle group per exercise occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetCreditConfig {
    /// Credit for the primary muscle group
    pub primary: f64,
    /// Credit for each secondary muscle group
    pub secondary: f64,
}

/// Inclusive "normal" band; below `low_below` is low, above `high_above` is high
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeBand {
    /// Volumes strictly below this are low
    pub low_below: f64,
    /// Volumes strictly above this are high
    pub high_above: f64,
}

/// Warning bands for specialized and non-specialized muscle groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeThresholdsConfig {
    /// Band for the plan's specialized groups
    pub specialized: VolumeBand,
    /// Band for every other group
    pub standard: VolumeBand,
}

impl Default for SetCreditConfig {
    fn default() -> Self {
        Self {
            primary: 1.0,
            secondary: 0.5,
        }
    }
}

impl Default for VolumeThresholdsConfig {
    fn default() -> Self {
        Self {
            specialized: VolumeBand {
                low_below: 3.0,
                high_above: 5.0,
            },
            standard: VolumeBand {
                low_below: 2.0,
                high_above: 4.0,
            },
        }
    }
}

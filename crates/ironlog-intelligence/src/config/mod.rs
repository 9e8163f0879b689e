// ABOUTME: Configuration module for the ironlog-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

/// Engine configuration (nutrition, goals, training volume)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;

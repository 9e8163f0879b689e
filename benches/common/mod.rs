// ABOUTME: Common benchmark utilities and fixtures for engine performance measurements
// ABOUTME: Provides deterministic weight histories and training plans for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Common benchmark utilities and fixtures.

pub mod fixtures;

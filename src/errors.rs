// ABOUTME: Error handling module re-exporting the shared error types
// ABOUTME: Preserves crate::errors paths while delegating to ironlog-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

pub use ironlog_core::errors::*;

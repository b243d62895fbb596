// ABOUTME: Configuration error types for coaching policy loading and validation
// ABOUTME: Defines error variants for invalid ranges, unreadable files and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for coaching policy validation.

use std::io;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., a non-positive threshold)
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Thresholds that must increase do not
    #[error("Invalid ordering: {0}")]
    InvalidOrdering(String),

    /// Policy file could not be read
    #[error("Failed to read policy file: {0}")]
    Io(#[from] io::Error),

    /// Policy file is not valid JSON for a `CoachingPolicy`
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

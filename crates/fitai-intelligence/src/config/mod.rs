// ABOUTME: Configuration module for fitai-intelligence crate
// ABOUTME: Re-exports coaching policy, message templates and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Message templates and placeholder rendering
pub mod messages;

/// Thresholds and rule toggles
pub mod policy;

pub use error::ConfigError;
pub use messages::{render, CoachingMessages};
pub use policy::{
    AgeThresholds, BiometricThresholds, CoachingPolicy, HabitThresholds, NutritionThresholds,
    PlateauConfig,
};

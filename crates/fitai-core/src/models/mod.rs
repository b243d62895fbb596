// ABOUTME: Core data models for coaching requests and results
// ABOUTME: Re-exports profile, log entry, advice and wire payload types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Advice items produced by the coaching engine
pub mod advice;
/// Strength and nutrition log entries
pub mod logs;
/// User profile and training goal
pub mod profile;
/// JSON wire payloads and their boundary validation
pub mod requests;
/// Timestamp and date parsing for log payloads
pub mod time;

pub use advice::{AdviceCategory, AdviceItem};
pub use logs::{NutritionLogEntry, StrengthLogEntry};
pub use profile::{Goal, Profile};
pub use requests::{
    CoachRequest, CoachingInput, NutritionLogPayload, OneRepMaxRequest, ProfileMetricsRequest,
    ProfilePayload, StrengthLogPayload,
};

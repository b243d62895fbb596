// ABOUTME: One-rep-max estimation from a submaximal load and rep count
// ABOUTME: Brzycki formula with strength, hypertrophy and endurance training zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! One-rep-max predictor
//!
//! Formula (Brzycki): `1RM = W x 36 / (37 - R)` for `1 <= R <= 36`, with
//! `R = 1` returning `W` exactly. Training zones are fixed fractions of the
//! estimate.
//!
//! # Scientific References
//!
//! - Brzycki, M. (1993). "Strength testing: Predicting a one-rep max from
//!   reps-to-fatigue." *Journal of Physical Education, Recreation & Dance*,
//!   64(1), 88-90.

use crate::rounding::round1;
use fitai_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Highest rep count the formula accepts
pub const MAX_REPS: u32 = 36;

/// Training zones as `(label, fraction of 1RM)`
pub const TRAINING_ZONES: [(&str, f64); 3] = [
    ("strength", 0.85),
    ("hypertrophy", 0.75),
    ("endurance", 0.60),
];

/// Estimated one-rep max with zone loads, all rounded to 1 decimal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxPrediction {
    /// Estimated single-rep maximum (kg)
    pub one_rm: f64,
    /// Zone label to working load (kg)
    pub zones: BTreeMap<String, f64>,
}

/// Estimate a one-rep max from `weight_kg` lifted for `reps`
///
/// # Errors
///
/// Returns `InvalidInput` if `weight_kg` is not a positive finite number or
/// `reps` is outside `1..=36`
pub fn predict_one_rep_max(weight_kg: f64, reps: u32) -> AppResult<OneRepMaxPrediction> {
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(AppError::invalid_input(format!(
            "weight must be a positive number, got {weight_kg}"
        )));
    }
    if !(1..=MAX_REPS).contains(&reps) {
        return Err(AppError::invalid_input(format!(
            "reps must be between 1 and {MAX_REPS}, got {reps}"
        )));
    }

    let estimate = if reps == 1 {
        weight_kg
    } else {
        weight_kg * f64::from(MAX_REPS) / f64::from(MAX_REPS + 1 - reps)
    };

    let zones = TRAINING_ZONES
        .iter()
        .map(|(label, fraction)| ((*label).to_owned(), round1(estimate * fraction)))
        .collect();

    Ok(OneRepMaxPrediction {
        one_rm: round1(estimate),
        zones,
    })
}

// ABOUTME: Biometric summary for a profile: BMI, category and daily intake targets
// ABOUTME: Shares BMI thresholds and per-kg targets with the coaching policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::coaching::body_mass_index;
use crate::config::CoachingPolicy;
use crate::rounding::{round1, round_whole};
use fitai_core::errors::{AppError, AppResult};
use fitai_core::models::{Goal, Profile};
use serde::{Deserialize, Serialize};

/// BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below the underweight threshold
    Underweight,
    /// Between the thresholds, inclusive
    Normal,
    /// Above the overweight threshold
    Overweight,
}

/// Derived body metrics and daily targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricSummary {
    /// Body mass index, 1 decimal
    pub bmi: f64,
    /// Band for `bmi`
    pub bmi_category: BmiCategory,
    /// Daily protein target (g)
    pub protein_target_g: i64,
    /// Daily kcal target on a bulk
    pub bulk_calorie_target: i64,
    /// Daily kcal target on a cut
    pub cut_calorie_target: i64,
    /// Goal the profile is training for
    pub goal: Goal,
}

/// Summarize a profile's biometrics under `policy`
///
/// # Errors
///
/// Returns `InvalidInput` when weight or height is not positive
pub fn summarize(profile: &Profile, policy: &CoachingPolicy) -> AppResult<BiometricSummary> {
    if !profile.has_usable_weight() || !(profile.height_cm.is_finite() && profile.height_cm > 0.0) {
        return Err(AppError::invalid_input(
            "profile weight and height must be positive numbers",
        ));
    }

    let bmi = body_mass_index(profile.weight_kg, profile.height_m());
    let thresholds = &policy.biometrics;
    let bmi_category = if bmi < thresholds.underweight_bmi {
        BmiCategory::Underweight
    } else if bmi > thresholds.overweight_bmi {
        BmiCategory::Overweight
    } else {
        BmiCategory::Normal
    };

    let weight = profile.weight_kg;
    let nutrition = &policy.nutrition;
    Ok(BiometricSummary {
        bmi: round1(bmi),
        bmi_category,
        protein_target_g: round_whole(weight * nutrition.protein_target_g_per_kg),
        bulk_calorie_target: round_whole(weight * nutrition.bulk_target_kcal_per_kg),
        cut_calorie_target: round_whole(weight * nutrition.cut_target_kcal_per_kg),
        goal: profile.goal,
    })
}

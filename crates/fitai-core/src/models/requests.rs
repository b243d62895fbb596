// ABOUTME: JSON wire payloads for coaching, 1RM and profile metrics requests
// ABOUTME: Validates loose client payloads into typed domain records at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request payloads
//!
//! Every field is optional on the wire so that a missing field surfaces as
//! `MISSING_REQUIRED_FIELD` naming the field, instead of an opaque
//! deserialization failure. Conversion into the domain types performs all
//! presence, format and range checks; the rule logic never sees raw payloads.

use super::logs::{NutritionLogEntry, StrengthLogEntry};
use super::profile::{Goal, Profile};
use super::time::{parse_date, parse_timestamp};
use crate::constants::{limits, profile_bounds};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Profile as sent by the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePayload {
    /// Opaque identity; numbers and strings are both accepted
    #[serde(default)]
    pub id: Option<Value>,
    /// Age in years
    #[serde(default)]
    pub age: Option<i64>,
    /// Height in centimeters
    #[serde(default)]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    /// `bulk`, `cut` or `strength`
    #[serde(default)]
    pub goal: Option<String>,
    /// Training days per week
    #[serde(default)]
    pub frequency: Option<i64>,
}

/// Strength log line as stored by the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrengthLogPayload {
    /// Exercise name
    #[serde(default)]
    pub name: Option<String>,
    /// Recorded load (kg)
    #[serde(default)]
    pub pr: Option<f64>,
    /// Repetitions
    #[serde(default)]
    pub reps: Option<i64>,
    /// ISO-8601 timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Nutrition log line as stored by the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionLogPayload {
    /// ISO-8601 date
    #[serde(default)]
    pub date: Option<String>,
    /// Total calories
    #[serde(default, alias = "total_calories")]
    pub calories: Option<i64>,
    /// Total protein (grams)
    #[serde(default, alias = "total_protein")]
    pub protein: Option<i64>,
}

/// Body of `POST /coach`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachRequest {
    /// User profile
    #[serde(default, alias = "user")]
    pub profile: Option<ProfilePayload>,
    /// Strength history; absent or `null` means none
    #[serde(default, alias = "stats")]
    pub strength_logs: Option<Vec<StrengthLogPayload>>,
    /// Nutrition history; absent or `null` means none
    #[serde(default, alias = "nutrition")]
    pub nutrition_logs: Option<Vec<NutritionLogPayload>>,
}

/// Validated coaching input
#[derive(Debug, Clone)]
pub struct CoachingInput {
    /// Validated profile
    pub profile: Profile,
    /// Validated strength entries in input order
    pub strength_logs: Vec<StrengthLogEntry>,
    /// Validated nutrition entries in input order
    pub nutrition_logs: Vec<NutritionLogEntry>,
}

/// Body of `POST /predict/one-rep-max`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OneRepMaxRequest {
    /// Submaximal load (kg)
    #[serde(default)]
    pub weight: Option<f64>,
    /// Repetitions performed at that load
    #[serde(default)]
    pub reps: Option<i64>,
}

/// Body of `POST /profile/metrics`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileMetricsRequest {
    /// User profile
    #[serde(default, alias = "user")]
    pub profile: Option<ProfilePayload>,
}

fn require<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::missing_field(field))
}

fn require_positive(value: Option<f64>, field: &str) -> AppResult<f64> {
    let value = require(value, field)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be a positive number, got {value}"
        ))
        .with_details(serde_json::json!({ "field": field })))
    }
}

impl ProfilePayload {
    /// Validate into a [`Profile`]
    ///
    /// # Errors
    ///
    /// Returns an input error naming the first missing or invalid field
    pub fn into_profile(self) -> AppResult<Profile> {
        let weight_kg = require_positive(self.weight, "profile.weight")?;
        let height_cm = require_positive(self.height, "profile.height")?;

        let age = require(self.age, "profile.age")?;
        let age = u32::try_from(age)
            .ok()
            .filter(|age| (1..=profile_bounds::MAX_AGE_YEARS).contains(age))
            .ok_or_else(|| {
                AppError::value_out_of_range(
                    "profile.age",
                    format!(
                        "must be between 1 and {}, got {age}",
                        profile_bounds::MAX_AGE_YEARS
                    ),
                )
            })?;

        let goal = require(self.goal, "profile.goal")?
            .parse::<Goal>()
            .map_err(|message: String| AppError::invalid_format("profile.goal", message))?;

        let frequency = require(self.frequency, "profile.frequency")?;
        let training_frequency = u8::try_from(frequency)
            .ok()
            .filter(|days| {
                (profile_bounds::MIN_TRAINING_FREQUENCY..=profile_bounds::MAX_TRAINING_FREQUENCY)
                    .contains(days)
            })
            .ok_or_else(|| {
                AppError::value_out_of_range(
                    "profile.frequency",
                    format!("must be between 1 and 7 days per week, got {frequency}"),
                )
            })?;

        let id = self.id.and_then(|id| match id {
            Value::Null => None,
            Value::String(text) => Some(text),
            other => Some(other.to_string()),
        });

        Ok(Profile {
            id,
            age,
            height_cm,
            weight_kg,
            goal,
            training_frequency,
        })
    }
}

impl StrengthLogPayload {
    /// Validate into a [`StrengthLogEntry`]; `index` is used in error messages
    ///
    /// # Errors
    ///
    /// Returns an input error naming the offending field
    pub fn into_entry(self, index: usize) -> AppResult<StrengthLogEntry> {
        let field = |name: &str| format!("strength_logs[{index}].{name}");

        let exercise = require(self.name, &field("name"))?;
        if exercise.trim().is_empty() {
            return Err(AppError::invalid_input(format!(
                "{} must not be empty",
                field("name")
            )));
        }

        let load_kg = require_positive(self.pr, &field("pr"))?;

        let reps = require(self.reps, &field("reps"))?;
        let reps = u32::try_from(reps)
            .ok()
            .filter(|reps| *reps > 0)
            .ok_or_else(|| {
                AppError::value_out_of_range(field("reps"), format!("must be positive, got {reps}"))
            })?;

        let raw_timestamp = require(self.updated_at, &field("updated_at"))?;
        let recorded_at = parse_timestamp(&raw_timestamp).ok_or_else(|| {
            AppError::invalid_format(
                field("updated_at"),
                format!("'{raw_timestamp}' is not an ISO-8601 timestamp"),
            )
        })?;

        Ok(StrengthLogEntry {
            exercise,
            load_kg,
            reps,
            recorded_at,
        })
    }
}

impl NutritionLogPayload {
    /// Validate into a [`NutritionLogEntry`]; `index` is used in error messages
    ///
    /// # Errors
    ///
    /// Returns an input error naming the offending field
    pub fn into_entry(self, index: usize) -> AppResult<NutritionLogEntry> {
        let field = |name: &str| format!("nutrition_logs[{index}].{name}");

        let raw_date = require(self.date, &field("date"))?;
        let date = parse_date(&raw_date).ok_or_else(|| {
            AppError::invalid_format(
                field("date"),
                format!("'{raw_date}' is not an ISO-8601 date"),
            )
        })?;

        let non_negative = |value: Option<i64>, name: &str| -> AppResult<u32> {
            let value = require(value, &field(name))?;
            u32::try_from(value).map_err(|_| {
                AppError::value_out_of_range(field(name), format!("must be non-negative, got {value}"))
            })
        };

        Ok(NutritionLogEntry {
            date,
            calories: non_negative(self.calories, "calories")?,
            protein_g: non_negative(self.protein, "protein")?,
        })
    }
}

impl CoachRequest {
    /// Validate the whole request
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; nothing is partially accepted
    pub fn into_input(self) -> AppResult<CoachingInput> {
        let profile = require(self.profile, "profile")?.into_profile()?;
        let strength_payloads = self.strength_logs.unwrap_or_default();
        let nutrition_payloads = self.nutrition_logs.unwrap_or_default();

        for (name, count) in [
            ("strength_logs", strength_payloads.len()),
            ("nutrition_logs", nutrition_payloads.len()),
        ] {
            if count > limits::MAX_LOG_ENTRIES {
                return Err(AppError::value_out_of_range(
                    name,
                    format!(
                        "at most {} entries are accepted, got {count}",
                        limits::MAX_LOG_ENTRIES
                    ),
                ));
            }
        }

        let strength_logs = strength_payloads
            .into_iter()
            .enumerate()
            .map(|(index, payload)| payload.into_entry(index))
            .collect::<AppResult<Vec<_>>>()?;

        let nutrition_logs = nutrition_payloads
            .into_iter()
            .enumerate()
            .map(|(index, payload)| payload.into_entry(index))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(CoachingInput {
            profile,
            strength_logs,
            nutrition_logs,
        })
    }
}

impl OneRepMaxRequest {
    /// Extract `(weight, reps)`; range checks belong to the predictor
    ///
    /// # Errors
    ///
    /// Returns an input error when a field is missing or reps is negative
    pub fn into_parts(self) -> AppResult<(f64, u32)> {
        let weight = require(self.weight, "weight")?;
        let reps = require(self.reps, "reps")?;
        let reps = u32::try_from(reps).map_err(|_| {
            AppError::value_out_of_range("reps", format!("must be between 1 and 36, got {reps}"))
        })?;
        Ok((weight, reps))
    }
}

impl ProfileMetricsRequest {
    /// Validate the embedded profile
    ///
    /// # Errors
    ///
    /// Returns an input error when the profile is missing or invalid
    pub fn into_profile(self) -> AppResult<Profile> {
        require(self.profile, "profile")?.into_profile()
    }
}

// ABOUTME: Strength and nutrition log entry models
// ABOUTME: Typed records validated from the wire payloads before coaching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One logged strength set (the caller's "PR" record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthLogEntry {
    /// Exercise name as entered by the user
    pub exercise: String,
    /// Recorded load in kilograms
    pub load_kg: f64,
    /// Repetitions performed at that load
    pub reps: u32,
    /// When the entry was recorded
    pub recorded_at: NaiveDateTime,
}

impl StrengthLogEntry {
    /// Grouping key: trimmed, lower-cased exercise name
    #[must_use]
    pub fn exercise_key(&self) -> String {
        self.exercise.trim().to_lowercase()
    }
}

/// One nutrition log line; several may share a date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionLogEntry {
    /// Day the intake belongs to
    pub date: NaiveDate,
    /// Total calories (kcal)
    pub calories: u32,
    /// Total protein (grams)
    pub protein_g: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_key_normalizes_case_and_whitespace() {
        let entry = StrengthLogEntry {
            exercise: "  Bench Press ".into(),
            load_kg: 60.0,
            reps: 5,
            recorded_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap(),
        };
        assert_eq!(entry.exercise_key(), "bench press");
    }
}

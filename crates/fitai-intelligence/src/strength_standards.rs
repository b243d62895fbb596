// ABOUTME: Strength-to-bodyweight standards for the major barbell lifts
// ABOUTME: Lift lookup by name or alias and monotone level classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength standards
//!
//! Each major lift carries three bodyweight-ratio thresholds. All bounds are
//! inclusive lower bounds:
//!
//! | ratio                           | level          |
//! |---------------------------------|----------------|
//! | `< beginner`                    | `Beginner`     |
//! | `beginner ..< intermediate`     | `Novice`       |
//! | `intermediate ..< advanced`     | `Intermediate` |
//! | `>= advanced`                   | `Advanced`     |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative strength level; ordering follows strength
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LiftLevel {
    /// Below the beginner threshold
    Beginner,
    /// At or above the beginner threshold
    Novice,
    /// At or above the intermediate threshold
    Intermediate,
    /// At or above the advanced threshold
    Advanced,
}

impl fmt::Display for LiftLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Beginner => "Beginner",
            Self::Novice => "Novice",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

/// Ratio thresholds for one lift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftStandard {
    /// Display name
    pub name: String,
    /// Alternative names matched case-insensitively
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Ratio at which a lifter stops being a beginner
    pub beginner: f64,
    /// Ratio at which a lifter becomes intermediate
    pub intermediate: f64,
    /// Ratio at which a lifter becomes advanced
    pub advanced: f64,
}

impl LiftStandard {
    fn new(name: &str, aliases: &[&str], beginner: f64, intermediate: f64, advanced: f64) -> Self {
        Self {
            name: name.to_owned(),
            aliases: aliases.iter().map(|alias| (*alias).to_owned()).collect(),
            beginner,
            intermediate,
            advanced,
        }
    }

    /// Classify a load/bodyweight ratio
    #[must_use]
    pub fn classify(&self, ratio: f64) -> LiftLevel {
        if ratio >= self.advanced {
            LiftLevel::Advanced
        } else if ratio >= self.intermediate {
            LiftLevel::Intermediate
        } else if ratio >= self.beginner {
            LiftLevel::Novice
        } else {
            LiftLevel::Beginner
        }
    }

    /// Whether `exercise` names this lift (case-insensitive, trimmed)
    #[must_use]
    pub fn matches(&self, exercise: &str) -> bool {
        let exercise = exercise.trim();
        self.name.eq_ignore_ascii_case(exercise)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(exercise))
    }

    /// Thresholds must be positive and strictly increasing
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.beginner > 0.0 && self.beginner < self.intermediate && self.intermediate < self.advanced
    }
}

/// Default table: Bench Press, Squat, Deadlift, Overhead Press
#[must_use]
pub fn default_lift_standards() -> Vec<LiftStandard> {
    vec![
        LiftStandard::new("Bench Press", &["bench", "barbell bench press"], 0.7, 1.0, 1.5),
        LiftStandard::new("Squat", &["back squat", "barbell squat"], 1.0, 1.5, 2.0),
        LiftStandard::new("Deadlift", &["conventional deadlift"], 1.2, 1.75, 2.5),
        LiftStandard::new(
            "Overhead Press",
            &["ohp", "military press", "shoulder press"],
            0.45,
            0.65,
            0.9,
        ),
    ]
}

/// Find the standard for an exercise name
#[must_use]
pub fn find_standard<'a>(standards: &'a [LiftStandard], exercise: &str) -> Option<&'a LiftStandard> {
    standards.iter().find(|standard| standard.matches(exercise))
}

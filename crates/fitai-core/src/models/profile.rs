// ABOUTME: User profile model consumed by the coaching engine
// ABOUTME: Profile biometrics, training frequency and the Goal enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Training goal selected at registration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Gain mass (caloric surplus)
    Bulk,
    /// Lose fat (caloric deficit)
    Cut,
    /// Maximise strength at maintenance
    Strength,
}

impl Goal {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bulk => "bulk",
            Self::Cut => "cut",
            Self::Strength => "strength",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bulk" => Ok(Self::Bulk),
            "cut" => Ok(Self::Cut),
            "strength" => Ok(Self::Strength),
            other => Err(format!(
                "unknown goal '{other}' (expected bulk, cut or strength)"
            )),
        }
    }
}

/// User profile for one analysis call
///
/// Constructed fresh per request; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Opaque caller-side identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Training goal
    pub goal: Goal,
    /// Training days per week (1-7)
    pub training_frequency: u8,
}

impl Profile {
    /// Height converted to meters
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }

    /// Whether the weight can be used as a ratio denominator
    #[must_use]
    pub fn has_usable_weight(&self) -> bool {
        self.weight_kg.is_finite() && self.weight_kg > 0.0
    }
}

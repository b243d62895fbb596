// ABOUTME: Coaching policy with every threshold, lift standard and message template
// ABOUTME: Serde-loadable from JSON with defaults for omitted sections and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coaching Policy
//!
//! Thresholds are policy, not law. The defaults below are the representative
//! set used by the service; deployments may override any section through a
//! JSON file, omitted fields keep their defaults.

use super::error::ConfigError;
use super::messages::CoachingMessages;
use crate::coaching::RuleId;
use crate::strength_standards::{default_lift_standards, LiftStandard};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Complete coaching policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachingPolicy {
    /// BMI screening thresholds
    pub biometrics: BiometricThresholds,
    /// Age bands for recovery guidance
    pub age: AgeThresholds,
    /// Calorie and protein thresholds
    pub nutrition: NutritionThresholds,
    /// Plateau detection window
    pub plateau: PlateauConfig,
    /// Training frequency and logging habit thresholds
    pub habits: HabitThresholds,
    /// Strength-to-bodyweight standards for the major lifts
    pub strength_standards: Vec<LiftStandard>,
    /// Message templates
    pub messages: CoachingMessages,
    /// Rules that never fire
    pub disabled_rules: BTreeSet<RuleId>,
}

/// BMI screening thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiometricThresholds {
    /// BMI strictly below this is underweight
    pub underweight_bmi: f64,
    /// BMI strictly above this is overweight
    pub overweight_bmi: f64,
}

/// Age bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeThresholds {
    /// Ages strictly above get recovery guidance
    pub senior_age: u32,
    /// Ages strictly below get higher-volume guidance
    pub young_age: u32,
}

/// Nutrition thresholds, all per kg of body weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionThresholds {
    /// Number of most recent logged days averaged
    pub window_days: usize,
    /// Bulk warning when mean kcal is below weight x this
    pub bulk_min_kcal_per_kg: f64,
    /// Suggested bulk intake per kg
    pub bulk_target_kcal_per_kg: f64,
    /// Cut warning when mean kcal is above weight x this
    pub cut_max_kcal_per_kg: f64,
    /// Suggested cut intake per kg
    pub cut_target_kcal_per_kg: f64,
    /// Protein warning below this many g/kg
    pub protein_low_g_per_kg: f64,
    /// Suggested protein intake in g/kg
    pub protein_target_g_per_kg: f64,
    /// Protein saturation note above this many g/kg
    pub protein_high_g_per_kg: f64,
    /// Plateau on a bulk is blamed on nutrition below this many g/kg
    pub plateau_protein_floor_g_per_kg: f64,
}

/// Plateau detection window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateauConfig {
    /// Number of most recent strength entries that must share a load
    pub window: usize,
}

/// Training habit thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitThresholds {
    /// Weekly sessions below this trigger a warning
    pub min_weekly_frequency: u8,
    /// Distinct nutrition days below this trigger a warning
    pub min_logged_days: usize,
}

impl Default for CoachingPolicy {
    fn default() -> Self {
        Self {
            biometrics: BiometricThresholds::default(),
            age: AgeThresholds::default(),
            nutrition: NutritionThresholds::default(),
            plateau: PlateauConfig::default(),
            habits: HabitThresholds::default(),
            strength_standards: default_lift_standards(),
            messages: CoachingMessages::default(),
            disabled_rules: BTreeSet::new(),
        }
    }
}

impl Default for BiometricThresholds {
    fn default() -> Self {
        Self {
            underweight_bmi: 18.5,
            overweight_bmi: 25.0,
        }
    }
}

impl Default for AgeThresholds {
    fn default() -> Self {
        Self {
            senior_age: 40,
            young_age: 25,
        }
    }
}

impl Default for NutritionThresholds {
    fn default() -> Self {
        Self {
            window_days: 5,
            bulk_min_kcal_per_kg: 34.0,
            bulk_target_kcal_per_kg: 38.0,
            cut_max_kcal_per_kg: 28.0,
            cut_target_kcal_per_kg: 24.0,
            protein_low_g_per_kg: 1.6,
            protein_target_g_per_kg: 2.0,
            protein_high_g_per_kg: 2.5,
            plateau_protein_floor_g_per_kg: 1.8,
        }
    }
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self { window: 3 }
    }
}

impl Default for HabitThresholds {
    fn default() -> Self {
        Self {
            min_weekly_frequency: 3,
            min_logged_days: 3,
        }
    }
}

fn ensure_positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn ensure_ordered(lower_name: &str, lower: f64, upper_name: &str, upper: f64) -> Result<(), ConfigError> {
    if lower < upper {
        Ok(())
    } else {
        Err(ConfigError::InvalidOrdering(format!(
            "{lower_name} ({lower}) must be below {upper_name} ({upper})"
        )))
    }
}

impl CoachingPolicy {
    /// Check ranges and orderings of every threshold
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first offending value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bio = &self.biometrics;
        ensure_positive("biometrics.underweight_bmi", bio.underweight_bmi)?;
        ensure_positive("biometrics.overweight_bmi", bio.overweight_bmi)?;
        ensure_ordered(
            "biometrics.underweight_bmi",
            bio.underweight_bmi,
            "biometrics.overweight_bmi",
            bio.overweight_bmi,
        )?;

        if self.age.young_age > self.age.senior_age {
            return Err(ConfigError::InvalidOrdering(format!(
                "age.young_age ({}) must not exceed age.senior_age ({})",
                self.age.young_age, self.age.senior_age
            )));
        }

        let nutrition = &self.nutrition;
        if nutrition.window_days == 0 {
            return Err(ConfigError::InvalidRange(
                "nutrition.window_days must be at least 1".into(),
            ));
        }
        for (name, value) in [
            ("nutrition.bulk_min_kcal_per_kg", nutrition.bulk_min_kcal_per_kg),
            ("nutrition.bulk_target_kcal_per_kg", nutrition.bulk_target_kcal_per_kg),
            ("nutrition.cut_max_kcal_per_kg", nutrition.cut_max_kcal_per_kg),
            ("nutrition.cut_target_kcal_per_kg", nutrition.cut_target_kcal_per_kg),
            ("nutrition.protein_low_g_per_kg", nutrition.protein_low_g_per_kg),
            ("nutrition.protein_target_g_per_kg", nutrition.protein_target_g_per_kg),
            ("nutrition.protein_high_g_per_kg", nutrition.protein_high_g_per_kg),
            (
                "nutrition.plateau_protein_floor_g_per_kg",
                nutrition.plateau_protein_floor_g_per_kg,
            ),
        ] {
            ensure_positive(name, value)?;
        }
        ensure_ordered(
            "nutrition.protein_low_g_per_kg",
            nutrition.protein_low_g_per_kg,
            "nutrition.protein_high_g_per_kg",
            nutrition.protein_high_g_per_kg,
        )?;

        if self.plateau.window < 2 {
            return Err(ConfigError::InvalidRange(format!(
                "plateau.window must be at least 2, got {}",
                self.plateau.window
            )));
        }

        if let Some(standard) = self
            .strength_standards
            .iter()
            .find(|standard| !standard.is_well_formed())
        {
            return Err(ConfigError::InvalidOrdering(format!(
                "strength standard '{}' needs 0 < beginner < intermediate < advanced",
                standard.name
            )));
        }

        debug!("Coaching policy validated");
        Ok(())
    }

    /// Parse and validate a policy from JSON
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON or a validation error
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Load and validate a policy file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`Self::from_json_str`]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let policy = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            disabled_rules = policy.disabled_rules.len(),
            "Loaded coaching policy"
        );
        Ok(policy)
    }

    /// Whether a rule is active under this policy
    #[must_use]
    pub fn is_enabled(&self, rule: RuleId) -> bool {
        !self.disabled_rules.contains(&rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_policy_is_valid() {
        CoachingPolicy::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let policy = CoachingPolicy::from_json_str(
            r#"{"nutrition": {"window_days": 7}, "disabled_rules": ["age_recovery"]}"#,
        )
        .unwrap();
        assert_eq!(policy.nutrition.window_days, 7);
        assert!((policy.nutrition.bulk_min_kcal_per_kg - 34.0).abs() < f64::EPSILON);
        assert!(!policy.is_enabled(RuleId::AgeRecovery));
        assert!(policy.is_enabled(RuleId::BiometricScreen));
        assert_eq!(policy.strength_standards.len(), 4);
    }

    #[test]
    fn test_rejects_inverted_bmi_thresholds() {
        let err = CoachingPolicy::from_json_str(
            r#"{"biometrics": {"underweight_bmi": 30.0, "overweight_bmi": 25.0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOrdering(_)));
    }

    #[test]
    fn test_rejects_short_plateau_window() {
        let err = CoachingPolicy::from_json_str(r#"{"plateau": {"window": 1}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange(_)));
    }

    #[test]
    fn test_rejects_unknown_rule_id() {
        let err = CoachingPolicy::from_json_str(r#"{"disabled_rules": ["no_such_rule"]}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"habits": {{"min_weekly_frequency": 4}}}}"#).unwrap();
        let policy = CoachingPolicy::from_file(file.path()).unwrap();
        assert_eq!(policy.habits.min_weekly_frequency, 4);
    }

    #[test]
    fn test_from_missing_file() {
        let err = CoachingPolicy::from_file("/nonexistent/fitai-policy.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

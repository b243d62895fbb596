// ABOUTME: Rule-based coaching engine turning a profile and training logs into advice
// ABOUTME: Validates the profile, derives the evaluation context and runs the rule table in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coaching Engine
//!
//! A pure function of `(profile, strength logs, nutrition logs, policy)`.
//! Output order is the order of [`RULE_TABLE`]; within a per-exercise rule,
//! items follow ascending exercise key.

/// Derived views the rules evaluate against
pub mod context;

/// Rule identifiers, requirements and evaluators
pub mod rules;

pub use context::CoachingContext;
pub use rules::{body_mass_index, DataRequirement, RuleDefinition, RuleId, RULESET_VERSION, RULE_TABLE};

use crate::config::CoachingPolicy;
use fitai_core::errors::{AppError, AppResult};
use fitai_core::models::{AdviceItem, NutritionLogEntry, Profile, StrengthLogEntry};
use tracing::{debug, info};

/// Stateless coaching engine bound to a policy
#[derive(Debug, Clone, Default)]
pub struct CoachingEngine {
    policy: CoachingPolicy,
}

impl CoachingEngine {
    /// Create an engine using `policy`
    #[must_use]
    pub const fn new(policy: CoachingPolicy) -> Self {
        Self { policy }
    }

    /// Active policy
    #[must_use]
    pub const fn policy(&self) -> &CoachingPolicy {
        &self.policy
    }

    /// Produce ordered coaching advice
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the profile weight or height cannot be used
    /// as a denominator; no rule is evaluated in that case.
    pub fn analyze(
        &self,
        profile: &Profile,
        strength_logs: &[StrengthLogEntry],
        nutrition_logs: &[NutritionLogEntry],
    ) -> AppResult<Vec<AdviceItem>> {
        Self::validate_profile(profile)?;

        if strength_logs.is_empty() && nutrition_logs.is_empty() {
            debug!(profile_id = ?profile.id, "No logs supplied, returning onboarding advice");
            return Ok(vec![AdviceItem::info(self.policy.messages.no_data.clone())]);
        }

        let ctx = CoachingContext::build(profile, &self.policy, strength_logs, nutrition_logs);
        let mut advice = Vec::new();

        for rule in &RULE_TABLE {
            if !self.policy.is_enabled(rule.id) {
                debug!(rule = %rule.id, "Rule disabled by policy");
                continue;
            }
            if !rule.requirement.is_met(&ctx) {
                continue;
            }
            let before = advice.len();
            (rule.evaluate)(&ctx, &mut advice);
            debug!(rule = %rule.id, emitted = advice.len() - before, "Rule evaluated");
        }

        info!(
            profile_id = ?profile.id,
            strength_entries = strength_logs.len(),
            nutrition_entries = nutrition_logs.len(),
            advice_items = advice.len(),
            ruleset_version = RULESET_VERSION,
            "Coaching analysis complete"
        );
        Ok(advice)
    }

    fn validate_profile(profile: &Profile) -> AppResult<()> {
        if !profile.has_usable_weight() {
            return Err(AppError::invalid_input(format!(
                "profile weight must be a positive number, got {}",
                profile.weight_kg
            )));
        }
        if !(profile.height_cm.is_finite() && profile.height_cm > 0.0) {
            return Err(AppError::invalid_input(format!(
                "profile height must be a positive number, got {}",
                profile.height_cm
            )));
        }
        Ok(())
    }
}

// ABOUTME: Versioned coaching rule table with identifiers, data requirements and evaluators
// ABOUTME: Each rule appends zero or more advice items in a fixed evaluation order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::context::CoachingContext;
use crate::config::render;
use crate::rounding::{round1, round_whole};
use fitai_core::models::{AdviceCategory, AdviceItem, Goal};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version of [`RULE_TABLE`]; bump whenever a rule's semantics change
pub const RULESET_VERSION: &str = "2025.2";

/// Stable rule identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// BMI screening
    BiometricScreen,
    /// Age-based recovery guidance
    AgeRecovery,
    /// Latest load per exercise against strength standards
    StrengthAssessment,
    /// Latest vs previous load per exercise
    ProgressionDelta,
    /// Equal loads across the most recent entries
    PlateauDetection,
    /// Calorie and protein targets for the goal
    NutritionGoal,
    /// Plateau on a bulk with low protein
    PlateauNutritionCorrelation,
    /// Weekly training frequency
    TrainingFrequency,
    /// Number of logged nutrition days
    LoggingConsistency,
    /// Latest load below the previous one per exercise
    ProgressionRegression,
    /// Goal-specific training guidance
    GoalGuidance,
}

impl RuleId {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BiometricScreen => "biometric_screen",
            Self::AgeRecovery => "age_recovery",
            Self::StrengthAssessment => "strength_assessment",
            Self::ProgressionDelta => "progression_delta",
            Self::PlateauDetection => "plateau_detection",
            Self::NutritionGoal => "nutrition_goal",
            Self::PlateauNutritionCorrelation => "plateau_nutrition_correlation",
            Self::TrainingFrequency => "training_frequency",
            Self::LoggingConsistency => "logging_consistency",
            Self::ProgressionRegression => "progression_regression",
            Self::GoalGuidance => "goal_guidance",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data a rule needs before it is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataRequirement {
    /// Profile only
    Profile,
    /// At least one strength entry
    StrengthLogs,
    /// At least one nutrition entry
    NutritionLogs,
    /// Both strength and nutrition entries
    StrengthAndNutrition,
}

impl DataRequirement {
    /// Whether the context carries the required data
    #[must_use]
    pub fn is_met(self, ctx: &CoachingContext<'_>) -> bool {
        let has_strength = !ctx.strength.is_empty();
        let has_nutrition = ctx.nutrition.is_some();
        match self {
            Self::Profile => true,
            Self::StrengthLogs => has_strength,
            Self::NutritionLogs => has_nutrition,
            Self::StrengthAndNutrition => has_strength && has_nutrition,
        }
    }
}

type Evaluator = fn(&CoachingContext<'_>, &mut Vec<AdviceItem>);

/// One row of the rule table
#[derive(Clone, Copy)]
pub struct RuleDefinition {
    /// Identifier used for toggling and logging
    pub id: RuleId,
    /// Data that must be present
    pub requirement: DataRequirement,
    /// Appends advice for this rule
    pub evaluate: Evaluator,
}

impl fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("id", &self.id)
            .field("requirement", &self.requirement)
            .finish_non_exhaustive()
    }
}

/// Rules in evaluation order; output order follows this table
pub const RULE_TABLE: [RuleDefinition; 11] = [
    RuleDefinition {
        id: RuleId::BiometricScreen,
        requirement: DataRequirement::Profile,
        evaluate: biometric_screen,
    },
    RuleDefinition {
        id: RuleId::AgeRecovery,
        requirement: DataRequirement::Profile,
        evaluate: age_recovery,
    },
    RuleDefinition {
        id: RuleId::StrengthAssessment,
        requirement: DataRequirement::StrengthLogs,
        evaluate: strength_assessment,
    },
    RuleDefinition {
        id: RuleId::ProgressionDelta,
        requirement: DataRequirement::StrengthLogs,
        evaluate: progression_delta,
    },
    RuleDefinition {
        id: RuleId::PlateauDetection,
        requirement: DataRequirement::StrengthLogs,
        evaluate: plateau_detection,
    },
    RuleDefinition {
        id: RuleId::NutritionGoal,
        requirement: DataRequirement::NutritionLogs,
        evaluate: nutrition_goal,
    },
    RuleDefinition {
        id: RuleId::PlateauNutritionCorrelation,
        requirement: DataRequirement::StrengthAndNutrition,
        evaluate: plateau_nutrition_correlation,
    },
    RuleDefinition {
        id: RuleId::TrainingFrequency,
        requirement: DataRequirement::Profile,
        evaluate: training_frequency,
    },
    RuleDefinition {
        id: RuleId::LoggingConsistency,
        requirement: DataRequirement::NutritionLogs,
        evaluate: logging_consistency,
    },
    RuleDefinition {
        id: RuleId::ProgressionRegression,
        requirement: DataRequirement::StrengthLogs,
        evaluate: progression_regression,
    },
    RuleDefinition {
        id: RuleId::GoalGuidance,
        requirement: DataRequirement::Profile,
        evaluate: goal_guidance,
    },
];

/// Body mass index from a profile's weight and height
#[must_use]
pub fn body_mass_index(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

fn biometric_screen(ctx: &CoachingContext<'_>, advice: &mut Vec<AdviceItem>) {
    let thresholds = &ctx.policy.biometrics;
    let messages = &ctx.policy.messages;
    let bmi = body_mass_index(ctx.profile.weight_kg, ctx.profile.height_m());

    let template = if bmi < thresholds.underweight_bmi {
        Some((&messages.underweight, thresholds.underweight_bmi))
    } else if bmi > thresholds.overweight_bmi {
        Some((&messages.overweight, thresholds.overweight_bmi))
    } else {
        None
    };

    if let Some((template, threshold)) = template {
        advice.push(AdviceItem::info(render(
            template,
            &[
                ("bmi", round1(bmi).to_string()),
                ("threshold", threshold.to_string()),
            ],
        )));
    }
}

fn age_recovery(ctx: &CoachingContext<'_>, advice: &mut Vec<AdviceItem>) {
    let age = ctx.profile.age;
    let bands = &ctx.policy.age;
    let messages = &ctx.policy.messages;
    let values = [("age", age.to_string())];

    if age > bands.senior_age {
        advice.push(AdviceItem::new(
            AdviceCategory::Warning,
            render(&messages.senior_recovery, &values),
        ));
    } else if age < bands.young_age {
        advice.push(AdviceItem::info(render(&messages.young_volume, &values)));
    }
}

/// The level is decided on the unrounded ratio; only the displayed ratio is
/// rounded, so a ratio of 0.695 shows as `0.7x` yet stays below a 0.7 bound.
fn strength_assessment(ctx: &CoachingContext<'_>, advice: &mut Vec<AdviceItem>) {
    let messages = &ctx.policy.messages;
    for history in &ctx.exercises {
        let Some(latest) = history.latest() else {
            continue;
        };
        let name = history.display_name();
        let load = round1(latest.load_kg).to_string();

        if let Some(standard) = history.standard {
            let ratio = latest.load_kg / ctx.profile.weight_kg;
            let level = standard.classify(ratio);
            advice.push(AdviceItem::new(
                AdviceCategory::Strength,
                render(
                    &messages.lift_level,
                    &[
                        ("exercise", name.to_owned()),
                        ("load", load),
                        ("ratio", round1(ratio).to_string()),
                        ("level", level.to_string()),
                    ],
                ),
            ));
        } else {
            advice.push(AdviceItem::info(render(
                &messages.unknown_exercise,
                &[
                    ("exercise", name.to_owned()),
                    ("load", load),
                    ("reps", latest.reps.to_string()),
                ],
            )));
        }
    }
}

fn progression_delta(ctx: &CoachingContext<'_>, advice: &mut Vec<AdviceItem>) {
    for history in &ctx.exercises {
        let (Some(latest), Some(previous)) = (history.latest(), history.previous()) else {
            continue;
        };
        if latest.load_kg > previous.load_kg {
            advice.push(AdviceItem::new(
                AdviceCategory::Success,
                render(
                    &ctx.policy.messages.pr_increase,
                    &[
                        ("exercise", history.display_name().to_owned()),
                        ("delta", round1(latest.load_kg - previous.load_kg).to_string()),
                        ("previous", round1(previous.load_kg).to_string()),
                        ("latest", round1(latest.load_kg).to_string()),
                    ],
                ),
            ));
        }
    }
}

fn progression_regression(ctx: &CoachingContext<'_>, advice: &mut Vec<AdviceItem>) {
    for history in &ctx.exercises {
        let (Some(latest), Some(previous)) = (history.latest(), history.previous()) else {
            continue;
        };
        if latest.load_kg < previous.load_kg {
            advice.push(AdviceItem::new(
                AdviceCategory::Warning,
                render(
                    &ctx.policy.messages.load_regression,
                    &[
                        ("exercise", history.display_name().to_owned()),
                        ("delta", round1(previous.load_kg - latest.load_kg).to_string()),
                        ("previous", round1(previous.load_kg).to_string()),
                        ("latest", round1(latest.load_kg).to_string()),
                    ],
                ),
            ));
        }
    }
}

fn goal_guidance(ctx: &CoachingContext<'_>, advice: &mut Vec<AdviceItem>) {
    let messages = &ctx.policy.messages;
    let template = match ctx.profile.goal {
        Goal::Bulk => &messages.bulk_guidance,
        Goal::Cut => &messages.cut_guidance,
        Goal::Strength => return,
    };
    advice.push(AdviceItem::info(render(template, &[])));
}

fn plateau_detection(ctx: &CoachingContext<'_>, advice: &mut Vec<AdviceItem>) {
    if let Some(plateau) = ctx.plateau {
        advice.push(AdviceItem::new(
            AdviceCategory::Plateau,
            render(
                &ctx.policy.messages.plateau,
                &[
                    ("count", plateau.count.to_string()),
                    ("load", round1(plateau.load_kg).to_string()),
                ],
            ),
        ));
    }
}

fn nutrition_goal(ctx: &CoachingContext<'_>, advice: &mut Vec<AdviceItem>) {
    let Some(summary) = ctx.nutrition else {
        return;
    };
    let weight = ctx.profile.weight_kg;
    let thresholds = &ctx.policy.nutrition;
    let messages = &ctx.policy.messages;
    let average = round_whole(summary.mean_calories).to_string();

    match ctx.profile.goal {
        Goal::Bulk if summary.mean_calories < weight * thresholds.bulk_min_kcal_per_kg => {
            advice.push(AdviceItem::new(
                AdviceCategory::Warning,
                render(
                    &messages.bulk_calorie_gap,
                    &[
                        ("average", average),
                        (
                            "target",
                            round_whole(weight * thresholds.bulk_target_kcal_per_kg).to_string(),
                        ),
                    ],
                ),
            ));
        }
        Goal::Cut if summary.mean_calories > weight * thresholds.cut_max_kcal_per_kg => {
            advice.push(AdviceItem::new(
                AdviceCategory::Warning,
                render(
                    &messages.cut_calorie_excess,
                    &[
                        ("average", average),
                        (
                            "target",
                            round_whole(weight * thresholds.cut_target_kcal_per_kg).to_string(),
                        ),
                    ],
                ),
            ));
        }
        _ => {}
    }

    let ratio = summary.protein_per_kg;
    let ratio_text = round1(ratio).to_string();
    if ratio < thresholds.protein_low_g_per_kg {
        advice.push(AdviceItem::new(
            AdviceCategory::Warning,
            render(
                &messages.protein_low,
                &[
                    ("ratio", ratio_text),
                    (
                        "target",
                        round_whole(weight * thresholds.protein_target_g_per_kg).to_string(),
                    ),
                ],
            ),
        ));
    } else if ratio > thresholds.protein_high_g_per_kg {
        advice.push(AdviceItem::info(render(
            &messages.protein_high,
            &[("ratio", ratio_text)],
        )));
    } else {
        advice.push(AdviceItem::new(
            AdviceCategory::Success,
            render(&messages.protein_ok, &[("ratio", ratio_text)]),
        ));
    }
}

fn plateau_nutrition_correlation(ctx: &CoachingContext<'_>, advice: &mut Vec<AdviceItem>) {
    let (Some(_), Some(summary)) = (ctx.plateau, ctx.nutrition) else {
        return;
    };
    let floor = ctx.policy.nutrition.plateau_protein_floor_g_per_kg;
    if ctx.profile.goal == Goal::Bulk && summary.protein_per_kg < floor {
        advice.push(AdviceItem::new(
            AdviceCategory::Plateau,
            render(
                &ctx.policy.messages.plateau_nutrition,
                &[
                    ("ratio", round1(summary.protein_per_kg).to_string()),
                    ("floor", floor.to_string()),
                ],
            ),
        ));
    }
}

fn training_frequency(ctx: &CoachingContext<'_>, advice: &mut Vec<AdviceItem>) {
    let minimum = ctx.policy.habits.min_weekly_frequency;
    let frequency = ctx.profile.training_frequency;
    if frequency < minimum {
        advice.push(AdviceItem::new(
            AdviceCategory::Warning,
            render(
                &ctx.policy.messages.low_frequency,
                &[
                    ("frequency", frequency.to_string()),
                    ("minimum", minimum.to_string()),
                ],
            ),
        ));
    }
}

fn logging_consistency(ctx: &CoachingContext<'_>, advice: &mut Vec<AdviceItem>) {
    let Some(summary) = ctx.nutrition else {
        return;
    };
    let minimum = ctx.policy.habits.min_logged_days;
    if summary.days_logged < minimum {
        advice.push(AdviceItem::new(
            AdviceCategory::Warning,
            render(
                &ctx.policy.messages.logging_consistency,
                &[
                    ("days", summary.days_logged.to_string()),
                    ("minimum", minimum.to_string()),
                ],
            ),
        ));
    }
}

// ABOUTME: Message templates for every coaching rule
// ABOUTME: Templates use {placeholder} slots filled with rounded values at evaluation time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Template messages for the coaching rules
///
/// Placeholders are written as `{name}`; unknown placeholders are left as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachingMessages {
    /// Both log collections empty
    pub no_data: String,
    /// `{bmi}`, `{threshold}`
    pub underweight: String,
    /// `{bmi}`, `{threshold}`
    pub overweight: String,
    /// `{age}`
    pub senior_recovery: String,
    /// `{age}`
    pub young_volume: String,
    /// `{exercise}`, `{load}`, `{ratio}`, `{level}`
    pub lift_level: String,
    /// `{exercise}`, `{load}`, `{reps}`
    pub unknown_exercise: String,
    /// `{exercise}`, `{delta}`, `{previous}`, `{latest}`
    pub pr_increase: String,
    /// `{count}`, `{load}`
    pub plateau: String,
    /// `{average}`, `{target}`
    pub bulk_calorie_gap: String,
    /// `{average}`, `{target}`
    pub cut_calorie_excess: String,
    /// `{ratio}`, `{target}`
    pub protein_low: String,
    /// `{ratio}`
    pub protein_high: String,
    /// `{ratio}`
    pub protein_ok: String,
    /// `{ratio}`, `{floor}`
    pub plateau_nutrition: String,
    /// `{frequency}`, `{minimum}`
    pub low_frequency: String,
    /// `{days}`, `{minimum}`
    pub logging_consistency: String,
    /// `{exercise}`, `{delta}`, `{previous}`, `{latest}`
    pub load_regression: String,
    /// No placeholders
    pub bulk_guidance: String,
    /// No placeholders
    pub cut_guidance: String,
}

impl Default for CoachingMessages {
    fn default() -> Self {
        Self {
            no_data: "Start logging your workouts and nutrition to receive coaching feedback."
                .into(),
            underweight: "Your BMI is {bmi}, below {threshold}. Eat in a caloric surplus and keep protein high to build lean mass."
                .into(),
            overweight: "Your BMI is {bmi}, above {threshold}. Prioritise compound lifts (squat, deadlift, bench, rows) to maximise energy expenditure."
                .into(),
            senior_recovery: "At {age}, recovery takes longer: rest 2-3 minutes between heavy sets and aim for 8 hours of sleep."
                .into(),
            young_volume: "At {age}, you recover quickly and can tolerate higher training volume."
                .into(),
            lift_level: "{exercise}: {load} kg is {ratio}x bodyweight ({level}).".into(),
            unknown_exercise: "{exercise}: latest load {load} kg for {reps} reps. Keep tracking it to see your progress."
                .into(),
            pr_increase: "{exercise}: PR increase of +{delta} kg ({previous} kg -> {latest} kg)."
                .into(),
            plateau: "Plateau alert: your last {count} sessions stayed at {load} kg. Take a deload week or change your rep scheme (fewer reps, +2.5 kg)."
                .into(),
            bulk_calorie_gap: "Caloric gap: you average {average} kcal. To hit your bulk goal, increase to {target} kcal."
                .into(),
            cut_calorie_excess: "You average {average} kcal, which is high for a cut. Reduce to around {target} kcal."
                .into(),
            protein_low: "Protein: you average {ratio} g/kg. Increase your intake to {target} g per day."
                .into(),
            protein_high: "Protein: {ratio} g/kg is above what muscle growth can use. Drink extra water and shift calories to carbohydrates."
                .into(),
            protein_ok: "Protein: {ratio} g/kg is in the optimal range.".into(),
            plateau_nutrition: "Your strength has stalled while protein sits at {ratio} g/kg (below {floor}) on a bulk. Nutrition is the likely cause: raise protein before changing your program."
                .into(),
            low_frequency: "You train {frequency} day(s) per week. Aim for at least {minimum} sessions for steady progress."
                .into(),
            logging_consistency: "Consistency: you only have nutrition data for {days} day(s). Logging at least {minimum} days improves coaching accuracy."
                .into(),
            load_regression: "{exercise}: load dropped by {delta} kg ({previous} kg -> {latest} kg). Try to recover your previous weight."
                .into(),
            bulk_guidance: "Bulking: focus on progressive overload and a calorie surplus.".into(),
            cut_guidance: "Cutting: maintain your strength while in a calorie deficit.".into(),
        }
    }
}

/// Fill `{name}` placeholders in `template`
///
/// Single pass over the template: substituted values are never rescanned,
/// so braces inside user-supplied text (exercise names) survive verbatim.
#[must_use]
pub fn render(template: &str, values: &[(&str, String)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((head, after)) = rest.split_once('{') {
        rendered.push_str(head);
        let Some((name, tail)) = after.split_once('}') else {
            rendered.push('{');
            rest = after;
            break;
        };
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => rendered.push_str(value),
            None => {
                rendered.push('{');
                rendered.push_str(name);
                rendered.push('}');
            }
        }
        rest = tail;
    }

    rendered.push_str(rest);
    rendered
}

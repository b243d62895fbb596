// ABOUTME: Evaluation context derived once per analysis from the caller's snapshot
// ABOUTME: Timestamp ordering, per-exercise grouping, daily nutrition totals and plateau detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Derived views over the input logs
//!
//! Rules never look at the raw slices. Everything they need is computed here
//! exactly once: strength entries sorted by timestamp (stable, so entries
//! sharing a timestamp keep input order and the last one is "latest"),
//! grouped by exercise in ascending key order, nutrition summed per date and
//! averaged over the most recent window.
//!
//! Names that match a strength standard (directly or through an alias) group
//! under the standard's canonical name, so "bench" and "Bench Press" share one
//! history. Other names group by their trimmed, lower-cased form.

use crate::config::CoachingPolicy;
use crate::strength_standards::{find_standard, LiftStandard};
use chrono::NaiveDate;
use fitai_core::models::{NutritionLogEntry, Profile, StrengthLogEntry};
use std::collections::BTreeMap;

/// All strength entries for one exercise, oldest first
#[derive(Debug, Clone)]
pub struct ExerciseHistory<'a> {
    /// Grouping key (lower-cased canonical or trimmed name)
    pub key: String,
    /// Matching strength standard, if any
    pub standard: Option<&'a LiftStandard>,
    /// Entries in timestamp order
    pub entries: Vec<&'a StrengthLogEntry>,
}

impl<'a> ExerciseHistory<'a> {
    /// Most recent entry
    #[must_use]
    pub fn latest(&self) -> Option<&'a StrengthLogEntry> {
        self.entries.last().copied()
    }

    /// Entry immediately before the latest
    #[must_use]
    pub fn previous(&self) -> Option<&'a StrengthLogEntry> {
        self.entries.iter().rev().nth(1).copied()
    }

    /// Canonical lift name, or the name as written on the latest entry
    #[must_use]
    pub fn display_name(&self) -> &'a str {
        match self.standard {
            Some(standard) => standard.name.as_str(),
            None => self.latest().map_or("", |entry| entry.exercise.trim()),
        }
    }
}

/// Calories and protein summed over one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTotals {
    /// Calendar day
    pub date: NaiveDate,
    /// Summed kcal
    pub calories: u64,
    /// Summed protein (g)
    pub protein_g: u64,
}

/// Averages over the most recent logged days
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionSummary {
    /// Distinct dates present in the log
    pub days_logged: usize,
    /// Dates included in the averages
    pub window_days: usize,
    /// Mean daily kcal over the window
    pub mean_calories: f64,
    /// Mean daily protein (g) over the window
    pub mean_protein_g: f64,
    /// Mean protein per kg body weight
    pub protein_per_kg: f64,
}

/// Equal loads across the most recent strength entries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plateau {
    /// Entries inspected
    pub count: usize,
    /// The shared load
    pub load_kg: f64,
}

/// Read-only view handed to every rule
#[derive(Debug)]
pub struct CoachingContext<'a> {
    /// The caller's profile
    pub profile: &'a Profile,
    /// Active policy
    pub policy: &'a CoachingPolicy,
    /// Strength entries oldest first
    pub strength: Vec<&'a StrengthLogEntry>,
    /// Per-exercise histories in ascending key order
    pub exercises: Vec<ExerciseHistory<'a>>,
    /// `None` when no nutrition was logged
    pub nutrition: Option<NutritionSummary>,
    /// `None` unless the most recent entries share one load
    pub plateau: Option<Plateau>,
}

impl<'a> CoachingContext<'a> {
    /// Derive every view the rules consume
    #[must_use]
    pub fn build(
        profile: &'a Profile,
        policy: &'a CoachingPolicy,
        strength_logs: &'a [StrengthLogEntry],
        nutrition_logs: &[NutritionLogEntry],
    ) -> Self {
        let strength = sort_by_timestamp(strength_logs);
        let exercises = group_by_exercise(&strength, &policy.strength_standards);
        let daily = aggregate_daily(nutrition_logs);
        let nutrition = summarize_window(&daily, policy.nutrition.window_days, profile.weight_kg);
        let plateau = detect_plateau(&strength, policy.plateau.window);

        Self {
            profile,
            policy,
            strength,
            exercises,
            nutrition,
            plateau,
        }
    }
}

/// Stable ascending sort by timestamp
#[must_use]
pub fn sort_by_timestamp(entries: &[StrengthLogEntry]) -> Vec<&StrengthLogEntry> {
    let mut sorted: Vec<&StrengthLogEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.recorded_at);
    sorted
}

/// Group sorted entries by exercise key; each group stays in timestamp order
#[must_use]
pub fn group_by_exercise<'a>(
    sorted: &[&'a StrengthLogEntry],
    standards: &'a [LiftStandard],
) -> Vec<ExerciseHistory<'a>> {
    let mut groups: BTreeMap<String, ExerciseHistory<'a>> = BTreeMap::new();
    for &entry in sorted {
        let standard = find_standard(standards, &entry.exercise);
        let key = standard.map_or_else(|| entry.exercise_key(), |lift| lift.name.to_lowercase());
        groups
            .entry(key)
            .or_insert_with_key(|key| ExerciseHistory {
                key: key.clone(),
                standard,
                entries: Vec::new(),
            })
            .entries
            .push(entry);
    }
    groups.into_values().collect()
}

/// Sum entries per date, oldest date first
#[must_use]
pub fn aggregate_daily(entries: &[NutritionLogEntry]) -> Vec<DailyTotals> {
    let mut days: BTreeMap<NaiveDate, (u64, u64)> = BTreeMap::new();
    for entry in entries {
        let totals = days.entry(entry.date).or_default();
        totals.0 += u64::from(entry.calories);
        totals.1 += u64::from(entry.protein_g);
    }
    days.into_iter()
        .map(|(date, (calories, protein_g))| DailyTotals {
            date,
            calories,
            protein_g,
        })
        .collect()
}

/// Average the most recent `window_days` dates
#[must_use]
pub fn summarize_window(
    daily: &[DailyTotals],
    window_days: usize,
    weight_kg: f64,
) -> Option<NutritionSummary> {
    if daily.is_empty() || window_days == 0 {
        return None;
    }
    let start = daily.len().saturating_sub(window_days);
    let window = &daily[start..];
    let count = window.len() as f64;
    let calories: u64 = window.iter().map(|day| day.calories).sum();
    let protein: u64 = window.iter().map(|day| day.protein_g).sum();
    let mean_calories = calories as f64 / count;
    let mean_protein_g = protein as f64 / count;

    Some(NutritionSummary {
        days_logged: daily.len(),
        window_days: window.len(),
        mean_calories,
        mean_protein_g,
        protein_per_kg: mean_protein_g / weight_kg,
    })
}

/// Most recent `window` entries across all exercises share one load
#[must_use]
pub fn detect_plateau(sorted: &[&StrengthLogEntry], window: usize) -> Option<Plateau> {
    if window == 0 || sorted.len() < window {
        return None;
    }
    let recent = &sorted[sorted.len() - window..];
    let load_kg = recent.first()?.load_kg;
    recent
        .iter()
        .all(|entry| (entry.load_kg - load_kg).abs() < f64::EPSILON)
        .then_some(Plateau {
            count: window,
            load_kg,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength_standards::default_lift_standards;
    use chrono::NaiveDateTime;

    fn at(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").unwrap()
    }

    fn lift(name: &str, load_kg: f64, when: &str) -> StrengthLogEntry {
        StrengthLogEntry {
            exercise: name.into(),
            load_kg,
            reps: 5,
            recorded_at: at(when),
        }
    }

    fn day(date: &str, calories: u32, protein_g: u32) -> NutritionLogEntry {
        NutritionLogEntry {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            calories,
            protein_g,
        }
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let logs = vec![
            lift("Squat", 100.0, "2024-01-02 10:00"),
            lift("Squat", 90.0, "2024-01-01 10:00"),
            lift("Squat", 105.0, "2024-01-02 10:00"),
        ];
        let sorted = sort_by_timestamp(&logs);
        let loads: Vec<f64> = sorted.iter().map(|entry| entry.load_kg).collect();
        assert_eq!(loads, vec![90.0, 100.0, 105.0]);
    }

    #[test]
    fn test_grouping_uses_trimmed_lowercase_key() {
        let logs = vec![
            lift("squat", 100.0, "2024-01-01 10:00"),
            lift(" Bench Press", 60.0, "2024-01-01 11:00"),
            lift("Squat ", 110.0, "2024-01-03 10:00"),
        ];
        let sorted = sort_by_timestamp(&logs);
        let groups = group_by_exercise(&sorted, &[]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "bench press");
        assert_eq!(groups[1].key, "squat");
        assert_eq!(groups[1].display_name(), "Squat");
        assert!((groups[1].previous().unwrap().load_kg - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_aliases_share_the_canonical_history() {
        let standards = default_lift_standards();
        let logs = vec![
            lift("Bench Press", 60.0, "2024-01-01 10:00"),
            lift("bench", 65.0, "2024-01-02 10:00"),
            lift("OHP", 40.0, "2024-01-02 11:00"),
            lift("Bicep Curl", 15.0, "2024-01-03 10:00"),
        ];
        let sorted = sort_by_timestamp(&logs);
        let groups = group_by_exercise(&sorted, &standards);

        let keys: Vec<&str> = groups.iter().map(|group| group.key.as_str()).collect();
        assert_eq!(keys, vec!["bench press", "bicep curl", "overhead press"]);
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[0].display_name(), "Bench Press");
        assert!(groups[1].standard.is_none());
        assert_eq!(groups[1].display_name(), "Bicep Curl");
        assert_eq!(groups[2].display_name(), "Overhead Press");
    }

    #[test]
    fn test_daily_totals_sum_same_date() {
        let logs = vec![
            day("2024-01-02", 1000, 50),
            day("2024-01-01", 2000, 100),
            day("2024-01-02", 1500, 70),
        ];
        let daily = aggregate_daily(&logs);
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[1].calories, 2500);
        assert_eq!(daily[1].protein_g, 120);
    }

    #[test]
    fn test_window_uses_most_recent_days() {
        let logs: Vec<NutritionLogEntry> = (1..=7)
            .map(|d| day(&format!("2024-01-0{d}"), d * 100, d * 10))
            .collect();
        let summary = summarize_window(&aggregate_daily(&logs), 5, 80.0).unwrap();
        assert_eq!(summary.days_logged, 7);
        assert_eq!(summary.window_days, 5);
        // days 3..=7 -> mean 500 kcal, 50 g
        assert!((summary.mean_calories - 500.0).abs() < f64::EPSILON);
        assert!((summary.protein_per_kg - 0.625).abs() < 1e-9);
    }

    #[test]
    fn test_plateau_only_when_recent_loads_match() {
        let flat = vec![
            lift("Bench Press", 50.0, "2024-01-01 10:00"),
            lift("Squat", 80.0, "2024-01-02 10:00"),
            lift("Bench Press", 80.0, "2024-01-03 10:00"),
            lift("Deadlift", 80.0, "2024-01-04 10:00"),
        ];
        let plateau = detect_plateau(&sort_by_timestamp(&flat), 3).unwrap();
        assert_eq!(plateau.count, 3);

        let rising = vec![
            lift("Squat", 80.0, "2024-01-02 10:00"),
            lift("Squat", 80.0, "2024-01-03 10:00"),
            lift("Squat", 82.5, "2024-01-04 10:00"),
        ];
        assert!(detect_plateau(&sort_by_timestamp(&rising), 3).is_none());
        assert!(detect_plateau(&sort_by_timestamp(&rising[..2]), 3).is_none());
    }
}

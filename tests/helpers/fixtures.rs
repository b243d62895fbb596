// ABOUTME: Coaching fixtures shared by integration tests
// ABOUTME: Profile, strength and nutrition builders plus a fully layered test router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use axum::Router;
use chrono::NaiveDate;
use fitai_coach_server::config::{Environment, ServerConfig};
use fitai_coach_server::models::{Goal, NutritionLogEntry, Profile, StrengthLogEntry};
use fitai_coach_server::server::{build_router, ServerResources};
use fitai_intelligence::CoachingPolicy;
use serde_json::{json, Value};
use std::sync::Arc;

/// 30 years, 175 cm, 80 kg
pub fn profile(goal: Goal, training_frequency: u8) -> Profile {
    Profile {
        id: Some("athlete-1".into()),
        age: 30,
        height_cm: 175.0,
        weight_kg: 80.0,
        goal,
        training_frequency,
    }
}

fn day(day_of_month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day_of_month).unwrap()
}

/// Strength entry recorded at 10:00 on January `day_of_month`, 2024
pub fn lift(exercise: &str, load_kg: f64, day_of_month: u32) -> StrengthLogEntry {
    StrengthLogEntry {
        exercise: exercise.into(),
        load_kg,
        reps: 5,
        recorded_at: day(day_of_month).and_hms_opt(10, 0, 0).unwrap(),
    }
}

/// Nutrition entry on January `day_of_month`, 2024
pub fn meal(day_of_month: u32, calories: u32, protein_g: u32) -> NutritionLogEntry {
    NutritionLogEntry {
        date: day(day_of_month),
        calories,
        protein_g,
    }
}

/// Server resources with default policy and test environment
pub fn test_resources(policy: CoachingPolicy) -> Arc<ServerResources> {
    let config = ServerConfig {
        environment: Environment::Testing,
        ..ServerConfig::default()
    };
    Arc::new(ServerResources::new(config, policy))
}

/// Full router with the production middleware stack
pub fn test_app() -> Router {
    build_router(test_resources(CoachingPolicy::default()))
}

/// Dashboard-shaped profile payload
pub fn profile_payload() -> Value {
    json!({"id": 1, "age": 30, "height": 175, "weight": 80, "goal": "bulk", "frequency": 4})
}

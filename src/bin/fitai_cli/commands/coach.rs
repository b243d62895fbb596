// ABOUTME: Coaching report command for fitai-cli
// ABOUTME: Reads a request file, validates it and runs the coaching engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use fitai_coach_server::models::CoachRequest;
use fitai_coach_server::routes::CoachResponse;
use fitai_intelligence::{CoachingEngine, CoachingPolicy, RULESET_VERSION};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Run the coaching engine over `input`
pub fn run(input: &Path, policy: Option<&Path>) -> Result<Value> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read request file {}", input.display()))?;
    let request: CoachRequest = serde_json::from_str(&raw)
        .with_context(|| format!("Request file {} is not valid JSON", input.display()))?;
    let input_data = request.into_input()?;

    let policy = match policy {
        Some(path) => CoachingPolicy::from_file(path)?,
        None => CoachingPolicy::default(),
    };
    let engine = CoachingEngine::new(policy);

    let report = engine.analyze(
        &input_data.profile,
        &input_data.strength_logs,
        &input_data.nutrition_logs,
    )?;
    info!(items = report.len(), "Coaching report generated");

    Ok(serde_json::to_value(CoachResponse {
        report,
        ruleset_version: RULESET_VERSION.to_owned(),
    })?)
}

// ABOUTME: Calculator commands for fitai-cli
// ABOUTME: One-rep-max prediction with training zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fitai_intelligence::predict_one_rep_max;
use serde_json::Value;

/// Estimate a one-rep max
pub fn one_rep_max(weight: f64, reps: u32) -> Result<Value> {
    let prediction = predict_one_rep_max(weight, reps)?;
    Ok(serde_json::to_value(prediction)?)
}

// ABOUTME: Policy inspection command for fitai-cli
// ABOUTME: Prints the default coaching policy or validates a policy file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use fitai_intelligence::CoachingPolicy;
use serde_json::Value;
use std::path::Path;

/// Default policy, or the validated contents of `file`
pub fn show(file: Option<&Path>) -> Result<Value> {
    let policy = match file {
        Some(path) => CoachingPolicy::from_file(path)?,
        None => CoachingPolicy::default(),
    };
    Ok(serde_json::to_value(policy)?)
}

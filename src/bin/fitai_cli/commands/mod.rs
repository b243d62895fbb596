// ABOUTME: Command modules for fitai-cli
// ABOUTME: Each command returns a JSON value that main prints to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calculators;
pub mod coach;
pub mod policy;

use anyhow::Result;
use serde_json::Value;

/// Serialize command output, optionally pretty-printed
pub fn render_json(value: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

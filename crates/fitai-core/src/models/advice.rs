// ABOUTME: Advice item model returned by the coaching engine
// ABOUTME: Category-tagged human-readable messages serialized as {type, msg}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag attached to each advice message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdviceCategory {
    /// Neutral guidance
    Info,
    /// Positive confirmation
    Success,
    /// Something needs attention
    Warning,
    /// Progress has stalled
    Plateau,
    /// Strength level assessment
    Strength,
}

impl AdviceCategory {
    /// Wire name of the category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Plateau => "plateau",
            Self::Strength => "strength",
        }
    }
}

impl fmt::Display for AdviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single coaching message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceItem {
    /// Message category
    #[serde(rename = "type")]
    pub category: AdviceCategory,
    /// Rendered message
    #[serde(rename = "msg")]
    pub message: String,
}

impl AdviceItem {
    /// Create an advice item
    pub fn new(category: AdviceCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    /// Shorthand for an `info` item
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(AdviceCategory::Info, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advice_item_wire_shape() {
        let item = AdviceItem::new(AdviceCategory::Plateau, "Deload next week");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["type"], "plateau");
        assert_eq!(json["msg"], "Deload next week");
    }
}

// ABOUTME: Rounding helpers applied to values embedded in coaching messages
// ABOUTME: One-decimal rounding for ratios/BMI and integer rounding for targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Round to one decimal place (ratios, BMI, loads)
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to the nearest integer (kcal and protein targets)
#[must_use]
pub fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

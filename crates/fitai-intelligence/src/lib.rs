// ABOUTME: Coaching intelligence crate for the FitAI platform
// ABOUTME: Pure rule evaluation over profile, strength and nutrition snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitAI Intelligence
//!
//! Deterministic coaching logic. Nothing in this crate performs I/O apart from
//! optionally reading a policy file; every analysis is a stateless pass over
//! the caller-supplied snapshot, so calls can run in parallel freely.

/// Body mass index and derived daily targets
pub mod biometrics;

/// The rule-based coaching engine and its rule table
pub mod coaching;

/// Coaching policy (thresholds, message templates, rule toggles)
pub mod config;

/// One-rep-max estimation and training zones
pub mod one_rep_max;

/// Rounding helpers shared by the rules
pub mod rounding;

/// Strength-to-bodyweight standards for the major lifts
pub mod strength_standards;

pub use biometrics::{BiometricSummary, BmiCategory};
pub use coaching::{CoachingEngine, RuleId, RULESET_VERSION};
pub use config::{CoachingPolicy, ConfigError};
pub use one_rep_max::{predict_one_rep_max, OneRepMaxPrediction};

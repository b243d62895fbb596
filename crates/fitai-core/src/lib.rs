// ABOUTME: Core types and constants for the FitAI coaching platform
// ABOUTME: Foundation crate with error handling, domain models, wire payloads and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitAI Core
//!
//! Foundation crate providing shared types and constants for the FitAI
//! coaching platform. The coaching engine and the HTTP service both build on
//! these types, so this crate is kept free of any rule logic.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Service-wide defaults and limits
//! - **models**: Typed domain records (`Profile`, log entries, `AdviceItem`)
//!   and the JSON wire payloads that are validated into them

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration defaults organized by domain
pub mod constants;

/// Core data models and request payloads
pub mod models;

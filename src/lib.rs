// ABOUTME: Main library entry point for the FitAI coaching service
// ABOUTME: Wires configuration, logging, middleware and JSON routes around the coaching engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitAI Coach Server
//!
//! A JSON HTTP service exposing the rule-based coaching engine from
//! `fitai-intelligence`. Each request is independent and stateless: handlers
//! share only an immutable [`server::ServerResources`] holding configuration
//! and the active coaching policy.
//!
//! ## Endpoints
//!
//! - `POST /coach` - ordered coaching advice for a profile and its logs
//! - `POST /predict/one-rep-max` - one-rep-max estimate with training zones
//! - `POST /profile/metrics` - BMI and daily intake targets
//! - `GET /policy` - active coaching policy
//! - `GET /health`, `GET /ready` - liveness and readiness
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitai_coach_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("FitAI Coach configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Logging configuration and structured logging helpers
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

pub use fitai_core::errors;
pub use fitai_core::models;

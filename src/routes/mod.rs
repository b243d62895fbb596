// ABOUTME: Route module organization for the coaching service HTTP endpoints
// ABOUTME: Groups route definitions by domain and shares request error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains only route definitions and thin handlers that
//! validate the payload and delegate to `fitai-intelligence`.

/// One-rep-max and profile metrics calculators
pub mod calculators;
/// Coaching report and policy routes
pub mod coach;
/// Health check and readiness routes
pub mod health;

pub use calculators::CalculatorRoutes;
pub use coach::{CoachResponse, CoachRoutes};
pub use health::HealthRoutes;

use crate::logging::AppLogger;
use crate::middleware::REQUEST_ID_HEADER;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use fitai_core::errors::AppError;

/// Map an unreadable JSON body to `INVALID_INPUT`
fn invalid_json(rejection: &JsonRejection) -> AppError {
    AppError::invalid_input(format!("Invalid JSON body: {}", rejection.body_text()))
}

/// Attach the request id and log the rejection
fn reject(error: AppError, path: &str, headers: &HeaderMap) -> AppError {
    AppLogger::log_rejected_input(path, &format!("{:?}", error.code), &error.message);
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(request_id) => error.with_request_id(request_id),
        None => error,
    }
}

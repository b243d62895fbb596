// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{routing::get, Json, Router};
use chrono::Utc;
use fitai_core::constants::service_names;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::FITAI_COACH_SERVER,
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready() -> Json<Value> {
        Json(json!({
            "status": "ready",
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}

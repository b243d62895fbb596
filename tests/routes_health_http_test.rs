// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests liveness, readiness and CORS preflight handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use fitai_coach_server::routes::HealthRoutes;
use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::test_app;
use serde_json::Value;

// ============================================================================
// GET /health - Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/health")
        .send(HealthRoutes::routes())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "fitai-coach-server");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint_success() {
    let response = AxumTestRequest::get("/ready")
        .send(HealthRoutes::routes())
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_health_through_middleware_sets_request_id() {
    let response = AxumTestRequest::get("/health").send(test_app()).await;
    assert_eq!(response.status(), 200);
    assert!(response.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = AxumTestRequest::get("/workouts").send(test_app()).await;
    assert_eq!(response.status(), 404);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_cors_preflight_allows_dashboard_origin() {
    let response = AxumTestRequest::options("/coach")
        .header("origin", "http://localhost:8501")
        .header("access-control-request-method", "POST")
        .send(test_app())
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}

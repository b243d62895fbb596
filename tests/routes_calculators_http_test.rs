// ABOUTME: HTTP integration tests for the one-rep-max and profile metrics routes
// ABOUTME: Validates predictions, biometric summaries and input rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{profile_payload, test_app};
use serde_json::{json, Value};

// ============================================================================
// POST /predict/one-rep-max
// ============================================================================

#[tokio::test]
async fn test_one_rep_max_prediction() {
    let response = AxumTestRequest::post("/predict/one-rep-max")
        .json(&json!({"weight": 100, "reps": 5}))
        .send(test_app())
        .await;
    assert_eq!(response.status(), 200);

    let json: Value = response.json();
    assert_eq!(json["one_rm"], 112.5);
    assert_eq!(json["zones"]["strength"], 95.6);
    assert_eq!(json["zones"]["hypertrophy"], 84.4);
    assert_eq!(json["zones"]["endurance"], 67.5);
}

#[tokio::test]
async fn test_one_rep_max_single_rep_is_the_load() {
    let response = AxumTestRequest::post("/predict/one-rep-max")
        .json(&json!({"weight": 140, "reps": 1}))
        .send(test_app())
        .await;
    assert_eq!(response.status(), 200);

    let json: Value = response.json();
    assert_eq!(json["one_rm"], 140.0);
}

#[tokio::test]
async fn test_one_rep_max_rejects_out_of_range_reps() {
    for reps in [0, 37] {
        let response = AxumTestRequest::post("/predict/one-rep-max")
            .json(&json!({"weight": 100, "reps": reps}))
            .send(test_app())
            .await;
        assert_eq!(response.status(), 400, "reps {reps}");

        let json: Value = response.json();
        assert_eq!(json["error"]["code"], "INVALID_INPUT");
    }
}

#[tokio::test]
async fn test_one_rep_max_missing_weight() {
    let response = AxumTestRequest::post("/predict/one-rep-max")
        .json(&json!({"reps": 5}))
        .send(test_app())
        .await;
    assert_eq!(response.status(), 400);

    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(json["error"]["details"]["field"], "weight");
}

// ============================================================================
// POST /profile/metrics
// ============================================================================

#[tokio::test]
async fn test_profile_metrics_summary() {
    let response = AxumTestRequest::post("/profile/metrics")
        .json(&json!({"profile": profile_payload()}))
        .send(test_app())
        .await;
    assert_eq!(response.status(), 200);

    let json: Value = response.json();
    assert_eq!(json["bmi"], 26.1);
    assert_eq!(json["bmi_category"], "overweight");
    assert_eq!(json["protein_target_g"], 160);
    assert_eq!(json["bulk_calorie_target"], 3040);
    assert_eq!(json["cut_calorie_target"], 1920);
    assert_eq!(json["goal"], "bulk");
}

#[tokio::test]
async fn test_profile_metrics_requires_profile() {
    let response = AxumTestRequest::post("/profile/metrics")
        .json(&json!({}))
        .send(test_app())
        .await;
    assert_eq!(response.status(), 400);

    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "MISSING_REQUIRED_FIELD");
}

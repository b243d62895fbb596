// ABOUTME: HTTP integration tests for the coaching report and policy routes
// ABOUTME: Exercises POST /coach and GET /policy through the full middleware stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use fitai_core::constants::limits;
use fitai_coach_server::routes::CoachResponse;
use fitai_coach_server::server::build_router;
use fitai_intelligence::{CoachingPolicy, RuleId, RULESET_VERSION};
use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{profile_payload, test_app, test_resources};
use serde_json::{json, Value};

// ============================================================================
// POST /coach - success
// ============================================================================

#[tokio::test]
async fn test_coach_single_bench_entry() {
    let body = json!({
        "profile": profile_payload(),
        "strength_logs": [
            {"name": "Bench Press", "pr": 60, "reps": 5, "updated_at": "2024-01-01T10:00:00"}
        ],
        "nutrition_logs": []
    });

    let response = AxumTestRequest::post("/coach")
        .json(&body)
        .send(test_app())
        .await;
    assert_eq!(response.status(), 200);

    let report: CoachResponse = response.json();
    assert_eq!(report.ruleset_version, RULESET_VERSION);
    assert_eq!(report.report.len(), 3);

    let wire = serde_json::to_value(&report.report).unwrap();
    assert_eq!(wire[0]["type"], "info");
    assert_eq!(wire[1]["type"], "strength");
    assert_eq!(wire[1]["msg"], "Bench Press: 60 kg is 0.8x bodyweight (Novice).");
    assert_eq!(wire[2]["type"], "info");
}

#[tokio::test]
async fn test_coach_without_logs_returns_onboarding_message() {
    let body = json!({"profile": profile_payload()});

    let response = AxumTestRequest::post("/coach")
        .json(&body)
        .send(test_app())
        .await;
    assert_eq!(response.status(), 200);

    let json: Value = response.json();
    let report = json["report"].as_array().unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0]["type"], "info");
    assert_eq!(report[0]["msg"], CoachingPolicy::default().messages.no_data);
}

#[tokio::test]
async fn test_coach_accepts_dashboard_field_aliases() {
    let body = json!({
        "user": profile_payload(),
        "stats": [
            {"name": "Squat", "pr": 100, "reps": 5, "updated_at": "2024-01-01"},
            {"name": "Squat", "pr": 105, "reps": 5, "updated_at": "2024-01-08"}
        ],
        "nutrition": [
            {"date": "2024-01-08", "total_calories": 3100, "total_protein": 160}
        ]
    });

    let response = AxumTestRequest::post("/coach")
        .json(&body)
        .send(test_app())
        .await;
    assert_eq!(response.status(), 200);

    let json: Value = response.json();
    let types: Vec<&str> = json["report"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["type"].as_str())
        .collect();
    assert!(types.contains(&"success"));
}

#[tokio::test]
async fn test_coach_uses_configured_policy() {
    let mut policy = CoachingPolicy::default();
    policy.disabled_rules.insert(RuleId::BiometricScreen);
    let app = build_router(test_resources(policy));

    let body = json!({
        "profile": profile_payload(),
        "strength_logs": [
            {"name": "Bench Press", "pr": 60, "reps": 5, "updated_at": "2024-01-01"}
        ]
    });

    let response = AxumTestRequest::post("/coach").json(&body).send(app).await;
    assert_eq!(response.status(), 200);

    let report: CoachResponse = response.json();
    assert_eq!(report.report.len(), 2);
}

#[tokio::test]
async fn test_coach_response_carries_request_id() {
    let response = AxumTestRequest::post("/coach")
        .header("x-request-id", "req-123")
        .json(&json!({"profile": profile_payload()}))
        .send(test_app())
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("x-request-id").as_deref(), Some("req-123"));
}

// ============================================================================
// POST /coach - rejected input
// ============================================================================

#[tokio::test]
async fn test_coach_zero_weight_is_invalid_input() {
    let mut profile = profile_payload();
    profile["weight"] = json!(0);

    let response = AxumTestRequest::post("/coach")
        .header("x-request-id", "req-zero")
        .json(&json!({"profile": profile, "strength_logs": []}))
        .send(test_app())
        .await;
    assert_eq!(response.status(), 400);

    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
    assert_eq!(json["error"]["request_id"], "req-zero");
}

#[tokio::test]
async fn test_coach_missing_profile_field_is_named() {
    let mut profile = profile_payload();
    profile.as_object_mut().unwrap().remove("goal");

    let response = AxumTestRequest::post("/coach")
        .json(&json!({"profile": profile}))
        .send(test_app())
        .await;
    assert_eq!(response.status(), 400);

    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("profile.goal"));
}

#[tokio::test]
async fn test_coach_unknown_goal_is_invalid_format() {
    let mut profile = profile_payload();
    profile["goal"] = json!("maintain");

    let response = AxumTestRequest::post("/coach")
        .json(&json!({"profile": profile}))
        .send(test_app())
        .await;
    assert_eq!(response.status(), 400);

    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn test_coach_bad_timestamp_is_rejected() {
    let body = json!({
        "profile": profile_payload(),
        "strength_logs": [
            {"name": "Bench Press", "pr": 60, "reps": 5, "updated_at": "last tuesday"}
        ]
    });

    let response = AxumTestRequest::post("/coach")
        .json(&body)
        .send(test_app())
        .await;
    assert_eq!(response.status(), 400);

    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "INVALID_FORMAT");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("strength_logs[0].updated_at"));
}

#[tokio::test]
async fn test_coach_malformed_json_is_invalid_input() {
    let response = AxumTestRequest::post("/coach")
        .raw_json("{\"profile\": ")
        .send(test_app())
        .await;
    assert_eq!(response.status(), 400);

    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_coach_wrong_method_is_not_allowed() {
    let response = AxumTestRequest::get("/coach").send(test_app()).await;
    assert_eq!(response.status(), 405);
}

#[tokio::test]
async fn test_coach_oversized_body_is_rejected() {
    let padding = "x".repeat(limits::MAX_REQUEST_BODY_BYTES + 1);
    let body = format!("{{\"padding\": \"{padding}\"}}");

    let response = AxumTestRequest::post("/coach")
        .header("content-length", &body.len().to_string())
        .raw_json(&body)
        .send(test_app())
        .await;
    assert_eq!(response.status(), 413);
}

#[tokio::test]
async fn test_coach_response_carries_cors_header() {
    let response = AxumTestRequest::post("/coach")
        .header("origin", "http://localhost:8501")
        .json(&json!({"profile": profile_payload()}))
        .send(test_app())
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
    assert!(response.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_coach_null_logs_are_treated_as_empty() {
    let body = json!({
        "profile": profile_payload(),
        "strength_logs": null,
        "nutrition_logs": null
    });

    let response = AxumTestRequest::post("/coach")
        .json(&body)
        .send(test_app())
        .await;
    assert_eq!(response.status(), 200);

    let json: Value = response.json();
    let report = json["report"].as_array().unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0]["msg"], CoachingPolicy::default().messages.no_data);
}

// ============================================================================
// GET /policy
// ============================================================================

#[tokio::test]
async fn test_policy_returns_active_policy() {
    let response = AxumTestRequest::get("/policy").send(test_app()).await;
    assert_eq!(response.status(), 200);

    let json: Value = response.json();
    assert_eq!(json["biometrics"]["overweight_bmi"], 25.0);
    assert_eq!(json["plateau"]["window"], 3);
    assert_eq!(json["strength_standards"].as_array().unwrap().len(), 4);

    let policy: CoachingPolicy = serde_json::from_value(json).unwrap();
    assert_eq!(policy, CoachingPolicy::default());
}

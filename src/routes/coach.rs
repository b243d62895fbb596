// ABOUTME: Coaching route handlers producing rule-based advice reports
// ABOUTME: Validates profile and log payloads, runs the coaching engine and exposes the policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{invalid_json, reject};
use crate::logging::AppLogger;
use crate::server::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use fitai_core::errors::AppError;
use fitai_core::models::{AdviceItem, CoachRequest};
use fitai_intelligence::RULESET_VERSION;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Body of a successful `POST /coach`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachResponse {
    /// Advice in rule-table order
    pub report: Vec<AdviceItem>,
    /// Rule table version that produced the report
    pub ruleset_version: String,
}

/// Coaching routes
pub struct CoachRoutes;

impl CoachRoutes {
    /// Create all coaching routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/coach", post(Self::handle_coach))
            .route("/policy", get(Self::handle_policy))
            .with_state(resources)
    }

    /// Handle a coaching report request
    async fn handle_coach(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<CoachRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let started = Instant::now();
        let report = Self::build_report(&resources, payload)
            .map_err(|error| reject(error, "/coach", &headers))?;

        AppLogger::log_coaching_report(
            report.profile_id.as_deref(),
            report.response.report.len(),
            RULESET_VERSION,
            started.elapsed().as_millis() as u64,
        );

        Ok((StatusCode::OK, Json(report.response)).into_response())
    }

    fn build_report(
        resources: &ServerResources,
        payload: Result<Json<CoachRequest>, JsonRejection>,
    ) -> Result<GeneratedReport, AppError> {
        let Json(request) = payload.map_err(|rejection| invalid_json(&rejection))?;
        let input = request.into_input()?;
        let report = resources.engine.analyze(
            &input.profile,
            &input.strength_logs,
            &input.nutrition_logs,
        )?;

        Ok(GeneratedReport {
            profile_id: input.profile.id,
            response: CoachResponse {
                report,
                ruleset_version: RULESET_VERSION.to_owned(),
            },
        })
    }

    /// Handle policy inspection
    async fn handle_policy(State(resources): State<Arc<ServerResources>>) -> Response {
        (StatusCode::OK, Json(resources.engine.policy())).into_response()
    }
}

struct GeneratedReport {
    profile_id: Option<String>,
    response: CoachResponse,
}

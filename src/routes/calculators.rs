// ABOUTME: Calculator route handlers for one-rep-max prediction and profile metrics
// ABOUTME: Stateless endpoints backing the dashboard's 1RM tool and biometrics sidebar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{invalid_json, reject};
use crate::server::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use fitai_core::errors::AppError;
use fitai_core::models::{OneRepMaxRequest, ProfileMetricsRequest};
use fitai_intelligence::biometrics;
use fitai_intelligence::predict_one_rep_max;
use std::sync::Arc;

/// Calculator routes
pub struct CalculatorRoutes;

impl CalculatorRoutes {
    /// Create all calculator routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/predict/one-rep-max", post(Self::handle_one_rep_max))
            .route("/profile/metrics", post(Self::handle_profile_metrics))
            .with_state(resources)
    }

    /// Handle a one-rep-max prediction
    async fn handle_one_rep_max(
        headers: HeaderMap,
        payload: Result<Json<OneRepMaxRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let prediction = payload
            .map_err(|rejection| invalid_json(&rejection))
            .and_then(|Json(request)| request.into_parts())
            .and_then(|(weight, reps)| predict_one_rep_max(weight, reps))
            .map_err(|error| reject(error, "/predict/one-rep-max", &headers))?;

        Ok((StatusCode::OK, Json(prediction)).into_response())
    }

    /// Handle a biometrics summary
    async fn handle_profile_metrics(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<ProfileMetricsRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let summary = payload
            .map_err(|rejection| invalid_json(&rejection))
            .and_then(|Json(request)| request.into_profile())
            .and_then(|profile| biometrics::summarize(&profile, resources.engine.policy()))
            .map_err(|error| reject(error, "/profile/metrics", &headers))?;

        Ok((StatusCode::OK, Json(summary)).into_response())
    }
}

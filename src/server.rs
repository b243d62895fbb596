// ABOUTME: HTTP server assembly with shared resources, middleware stack and graceful shutdown
// ABOUTME: Merges domain routers and applies body limits, request id, tracing, CORS and timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server lifecycle
//!
//! Handlers share a single immutable [`ServerResources`]; there is no other
//! state between requests.

use crate::config::ServerConfig;
use crate::middleware::{create_request_span, setup_cors};
use crate::routes::{CalculatorRoutes, CoachRoutes, HealthRoutes};
use anyhow::{Context, Result};
use axum::http::{StatusCode, Uri};
use axum::Router;
use fitai_core::constants::limits;
use fitai_core::errors::AppError;
use fitai_intelligence::{CoachingEngine, CoachingPolicy, RULESET_VERSION};
use std::future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Immutable resources shared by every handler
#[derive(Debug)]
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Coaching engine bound to the active policy
    pub engine: CoachingEngine,
}

impl ServerResources {
    /// Bundle configuration with a policy
    #[must_use]
    pub fn new(config: ServerConfig, policy: CoachingPolicy) -> Self {
        Self {
            config,
            engine: CoachingEngine::new(policy),
        }
    }

    /// Load the configured policy and bundle it with `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the policy file cannot be loaded
    pub fn from_config(config: ServerConfig) -> Result<Self> {
        let policy = config.load_policy()?;
        Ok(Self::new(config, policy))
    }
}

/// Build the full application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);
    let timeout = resources.config.request_timeout();

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(CoachRoutes::routes(Arc::clone(&resources)))
        .merge(CalculatorRoutes::routes(resources))
        .fallback(handle_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(limits::MAX_REQUEST_BODY_BYTES))
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(cors)
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    timeout,
                )),
        )
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Bind and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = resources.config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        address = %addr,
        ruleset_version = RULESET_VERSION,
        "FitAI coach server listening"
    );
    display_available_endpoints(&addr);

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("FitAI coach server stopped");
    Ok(())
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(addr: &str) {
    info!("=== Available API Endpoints ===");
    info!("   Coaching Report:   POST http://{addr}/coach");
    info!("   One-Rep Max:       POST http://{addr}/predict/one-rep-max");
    info!("   Profile Metrics:   POST http://{addr}/profile/metrics");
    info!("   Coaching Policy:   GET  http://{addr}/policy");
    info!("   Health Check:      GET  http://{addr}/health");
    info!("   Readiness:         GET  http://{addr}/ready");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            warn!(%error, "Failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                warn!(%error, "Failed to install SIGTERM handler");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}

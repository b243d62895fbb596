// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Builds the per-request span carrying method, path and x-request-id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::Request;
use tracing::{info_span, Span};

/// Header carrying the request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id assigned upstream or by `SetRequestIdLayer`
#[must_use]
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
}

/// Span for one HTTP request
#[must_use]
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
    )
}

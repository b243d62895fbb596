// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides CORS setup and request span creation with request ids

/// Cross-origin resource sharing
pub mod cors;
/// Request spans and request ids
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use self::tracing::{create_request_span, request_id, REQUEST_ID_HEADER};

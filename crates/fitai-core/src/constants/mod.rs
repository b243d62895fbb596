// ABOUTME: Application-wide constants for the FitAI coaching platform
// ABOUTME: Service names, network defaults, request limits and profile bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants organized by domain

/// Service identifiers used in logs and health responses
pub mod service_names {
    /// HTTP coaching service
    pub const FITAI_COACH_SERVER: &str = "fitai-coach-server";
    /// Command line tool
    pub const FITAI_CLI: &str = "fitai-cli";
}

/// Network defaults
pub mod defaults {
    /// Default HTTP port (matches the dashboard's `API_URL` default)
    pub const DEFAULT_HTTP_PORT: u16 = 8000;
    /// Default bind address
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default CORS origin list
    pub const DEFAULT_CORS_ORIGINS: &str = "*";
}

/// Request size limits
pub mod limits {
    /// Maximum accepted request body (1 MiB)
    pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
    /// Maximum log entries of either kind accepted in one coaching request
    pub const MAX_LOG_ENTRIES: usize = 10_000;
}

/// Bounds applied when validating a profile at the API boundary
pub mod profile_bounds {
    /// Minimum training frequency (days/week)
    pub const MIN_TRAINING_FREQUENCY: u8 = 1;
    /// Maximum training frequency (days/week)
    pub const MAX_TRAINING_FREQUENCY: u8 = 7;
    /// Oldest accepted age in years
    pub const MAX_AGE_YEARS: u32 = 120;
}

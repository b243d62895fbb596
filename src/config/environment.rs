// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses port, host, CORS, timeout and coaching policy file from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable                | Default      |
//! |-------------------------|--------------|
//! | `HTTP_PORT`             | `8000`       |
//! | `HOST`                  | `127.0.0.1`  |
//! | `CORS_ALLOWED_ORIGINS`  | `*`          |
//! | `FITAI_POLICY_FILE`     | unset        |
//! | `REQUEST_TIMEOUT_SECS`  | `30`         |
//! | `ENVIRONMENT`           | `development`|

use anyhow::{Context, Result};
use fitai_core::constants::{defaults, service_names};
use fitai_intelligence::CoachingPolicy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*`
    pub allowed_origins: String,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Optional JSON coaching policy; defaults apply when unset
    pub policy_file: Option<PathBuf>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Service name for logs
    pub server_name: String,
    /// Service version (from Cargo.toml)
    pub server_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::DEFAULT_HTTP_PORT,
            host: defaults::DEFAULT_HOST.to_owned(),
            environment: Environment::Development,
            cors: CorsConfig {
                allowed_origins: defaults::DEFAULT_CORS_ORIGINS.to_owned(),
            },
            policy_file: None,
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
            server_name: service_names::FITAI_COACH_SERVER.to_owned(),
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &defaults::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_var_or("HOST", defaults::DEFAULT_HOST),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", defaults::DEFAULT_CORS_ORIGINS),
            },
            policy_file: env::var("FITAI_POLICY_FILE")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            request_timeout_secs: env_var_or(
                "REQUEST_TIMEOUT_SECS",
                &defaults::DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid REQUEST_TIMEOUT_SECS value")?,
            server_name: env_var_or("SERVICE_NAME", service_names::FITAI_COACH_SERVER),
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero port or zero timeout
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must be non-zero"));
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be at least 1"));
        }
        Ok(())
    }

    /// Load the coaching policy named by `FITAI_POLICY_FILE`, or the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load_policy(&self) -> Result<CoachingPolicy> {
        match &self.policy_file {
            Some(path) => CoachingPolicy::from_file(path).with_context(|| {
                format!("Failed to load coaching policy from {}", path.display())
            }),
            None => Ok(CoachingPolicy::default()),
        }
    }

    /// `host:port` bind address
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Per-request timeout
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FitAI Coach Server Configuration:\n\
             - Service: {} v{}\n\
             - Environment: {}\n\
             - Bind Address: {}\n\
             - CORS Origins: {}\n\
             - Coaching Policy: {}\n\
             - Request Timeout: {}s",
            self.server_name,
            self.server_version,
            self.environment,
            self.socket_addr(),
            self.cors.allowed_origins,
            self.policy_file
                .as_ref()
                .map_or_else(|| "built-in defaults".to_owned(), |path| path.display().to_string()),
            self.request_timeout_secs,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

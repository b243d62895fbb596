// ABOUTME: HTTP server binary for the FitAI coaching service
// ABOUTME: Loads environment configuration and the coaching policy, then serves the JSON API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # FitAI Coach Server Binary
//!
//! Starts the coaching API with configuration read from the environment.

use anyhow::Result;
use clap::Parser;
use fitai_coach_server::{
    config::environment::ServerConfig,
    logging,
    server::{self, ServerResources},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fitai-coach-server")]
#[command(about = "FitAI Coach - rule-based strength and nutrition coaching API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Coaching policy JSON file (overrides `FITAI_POLICY_FILE`)
    #[arg(long)]
    policy: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(policy) = args.policy {
        config.policy_file = Some(policy);
    }

    info!("Starting FitAI Coach Server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config)?);
    info!(
        disabled_rules = resources.engine.policy().disabled_rules.len(),
        "Coaching policy ready"
    );

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

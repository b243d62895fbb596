// ABOUTME: FitAI CLI - command-line access to the coaching engine without the HTTP service
// ABOUTME: Runs coaching reports from JSON files, predicts one-rep maxes and prints policies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Coaching report for a request file (same shape as POST /coach)
//! fitai-cli coach --input request.json
//!
//! # Same, with a custom policy
//! fitai-cli coach --input request.json --policy policy.json
//!
//! # Estimate a one-rep max
//! fitai-cli one-rep-max --weight 100 --reps 5
//!
//! # Print the default policy (or validate and print a policy file)
//! fitai-cli policy
//! fitai-cli policy --file policy.json
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitai_coach_server::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitai-cli",
    about = "FitAI coaching command line tool",
    long_about = "Run the rule-based coaching engine, one-rep-max predictor and policy tooling from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging (written to stderr)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Produce a coaching report from a JSON request file
    Coach {
        /// Request file with `profile`, `strength_logs` and `nutrition_logs`
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Coaching policy JSON file (defaults apply when omitted)
        #[arg(long)]
        policy: Option<PathBuf>,
    },

    /// Estimate a one-rep max and training zones
    OneRepMax {
        /// Load lifted (kg)
        #[arg(long)]
        weight: f64,

        /// Repetitions performed (1-36)
        #[arg(long)]
        reps: u32,
    },

    /// Print the coaching policy as JSON
    Policy {
        /// Validate and print this policy file instead of the defaults
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    debug!("FitAI CLI");

    let output = match cli.command {
        Command::Coach { input, policy } => commands::coach::run(&input, policy.as_deref())?,
        Command::OneRepMax { weight, reps } => commands::calculators::one_rep_max(weight, reps)?,
        Command::Policy { file } => commands::policy::show(file.as_deref())?,
    };

    println!("{}", commands::render_json(&output, cli.pretty)?);
    Ok(())
}

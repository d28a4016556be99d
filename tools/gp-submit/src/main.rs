//! GP-Submit: Governance Portal submission replay tool
//!
//! Replays a recorded submission scenario through the extrinsic submitter,
//! printing each status update and the final outcome, or decodes a dispatch
//! error into the message users would see.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;
use tracing::info;

use gp_extrinsic_submitter::{
    AccountAddress, SubmissionOutcome, SubmitterConfig, DEFAULT_FALLBACK_ERROR_MESSAGE,
};
use gp_submit::{describe_error_json, replay, Scenario};
use gp_telemetry::{encode_metrics, init_telemetry, TelemetryConfig};

/// GP-Submit: replay governance extrinsic submissions
#[derive(Parser, Debug)]
#[command(name = "gp-submit")]
#[command(about = "Replay extrinsic submissions and decode dispatch errors")]
struct Args {
    /// Log level filter (overrides GP_LOG_LEVEL and RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scenario file through the submitter
    Replay {
        /// Scenario JSON file
        #[arg(short, long)]
        scenario: PathBuf,

        /// Submit through this proxy account
        #[arg(long)]
        proxy: Option<String>,

        /// Give up waiting for an outcome after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Print Prometheus metrics after the replay
        #[arg(long)]
        metrics: bool,
    },

    /// Render a dispatch error JSON as the user-facing message
    DescribeError {
        /// DispatchError JSON, e.g. {"kind":"Token","detail":"BelowMinimum"}
        #[arg(long)]
        json: String,

        /// Message used when the error carries no description
        #[arg(long, default_value = DEFAULT_FALLBACK_ERROR_MESSAGE)]
        fallback: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Replay {
            scenario,
            proxy,
            timeout_secs,
            metrics,
        } => {
            let mut telemetry = TelemetryConfig::for_component("submit");
            if let Some(level) = args.log_level {
                telemetry = telemetry.with_log_level(level);
            }
            let _telemetry = init_telemetry(telemetry)?;
            let outcome = run_replay(scenario, proxy, timeout_secs).await;

            if metrics {
                println!("{}", encode_metrics()?);
            }

            match outcome? {
                SubmissionOutcome::Success(tx_hash) => {
                    println!("Success: {:?}", tx_hash);
                    Ok(())
                }
                SubmissionOutcome::Failure(message) => bail!("Failed: {}", message),
            }
        }
        Command::DescribeError { json, fallback } => {
            println!("{}", describe_error_json(&json, &fallback)?);
            Ok(())
        }
    }
}

async fn run_replay(
    path: PathBuf,
    proxy: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<SubmissionOutcome> {
    let scenario = Scenario::load(&path)?;
    let proxy = proxy.as_deref().map(AccountAddress::parse).transpose()?;

    let mut config = SubmitterConfig::from_env();
    if let Some(secs) = timeout_secs {
        config = config.with_outcome_timeout(Duration::from_secs(secs));
    }

    let (status_tx, mut status_rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(async move {
        while let Some(status) = status_rx.recv().await {
            println!("{}", status);
        }
    });

    info!(scenario = %path.display(), "Replaying scenario");
    let outcome = replay(&scenario, proxy, config, Some(status_tx)).await;
    // let queued statuses drain before returning
    let _ = tokio::time::timeout(Duration::from_millis(100), printer).await;
    outcome
}

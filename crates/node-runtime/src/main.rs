//! # Guild-Ledger Node
//!
//! Runs the Settings Normalizer and the Role-Event Ledger behind a
//! role-change intake channel.
//!
//! ## Startup Sequence
//!
//! 1. Install logging (`RUST_LOG` overrides the default `info` level)
//! 2. Load configuration from `GL_*` environment variables
//! 3. Build services and start the intake handler
//! 4. Run until Ctrl+C, then drain the intake and audit the ledger

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{NodeRuntime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = RuntimeConfig::from_env().context("invalid GL_* configuration")?;

    // Create and start the node runtime
    let runtime = NodeRuntime::new(config)?;
    runtime.start()?;

    // Keep the node running
    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    // Graceful shutdown
    let report = runtime.shutdown().await?;
    info!(
        recorded = report.intake.recorded,
        rejected = report.intake.rejected,
        failed = report.intake.failed,
        "Intake summary"
    );
    if !report.divergences.is_empty() {
        warn!("{} ledger record(s) diverged", report.divergences.len());
    }

    Ok(())
}

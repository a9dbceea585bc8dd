//! # Node Runtime
//!
//! Owns the service container, the role-change intake channel and the
//! handler task.
//!
//! ## Startup Sequence
//!
//! 1. Validate configuration
//! 2. Build services in dependency order (settings, then ledger)
//! 3. Spawn the role-change handler
//!
//! ## Shutdown Sequence
//!
//! 1. Signal the handler; it closes the intake and drains buffered changes
//! 2. Await the handler
//! 3. Audit every ledger record

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use gl_02_role_ledger::Divergence;
use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::container::{ConfigError, RuntimeConfig, ServiceContainer};
use crate::handlers::{IntakeStats, RoleChangeHandler, RoleChanged};

/// What the runtime observed by the time it stopped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShutdownReport {
    /// Intake outcome counts.
    pub intake: IntakeStats,
    /// Records whose counters disagree with their events.
    pub divergences: Vec<Divergence>,
}

/// The Guild-Ledger node runtime.
pub struct NodeRuntime {
    /// Subsystem services.
    container: Arc<ServiceContainer>,
    /// Sending half handed to the event source.
    intake_tx: mpsc::Sender<RoleChanged>,
    /// Receiving half, taken by `start`.
    intake_rx: Mutex<Option<mpsc::Receiver<RoleChanged>>>,
    /// Running handler task.
    handler: Mutex<Option<JoinHandle<IntakeStats>>>,
    /// Shutdown signal sender.
    shutdown_tx: watch::Sender<bool>,
}

impl NodeRuntime {
    /// Create a runtime with fresh in-memory stores.
    pub fn new(config: RuntimeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_container(ServiceContainer::new(config)))
    }

    /// Create a runtime around an existing container.
    pub fn with_container(container: ServiceContainer) -> Self {
        info!("Creating Guild-Ledger node runtime");
        let (intake_tx, intake_rx) = mpsc::channel(container.config.intake.capacity.max(1));
        let (shutdown_tx, _) = watch::channel(false);

        Self {
            container: Arc::new(container),
            intake_tx,
            intake_rx: Mutex::new(Some(intake_rx)),
            handler: Mutex::new(None),
            shutdown_tx,
        }
    }

    /// Spawn the role-change handler.
    pub fn start(&self) -> Result<()> {
        let receiver = self
            .intake_rx
            .lock()
            .take()
            .ok_or_else(|| anyhow!("runtime already started"))?;

        let handler = RoleChangeHandler::new(receiver, Arc::clone(&self.container.ledger));
        let task = tokio::spawn(handler.run(self.shutdown_tx.subscribe()));
        *self.handler.lock() = Some(task);

        info!(
            intake_capacity = self.container.config.intake.capacity,
            store_timeout_ms = self.container.config.ledger.store_timeout.as_millis() as u64,
            require_idempotency_key = self.container.config.ledger.require_idempotency_key,
            "Guild-Ledger runtime started"
        );
        Ok(())
    }

    /// A sender for the role-change intake.
    pub fn intake(&self) -> mpsc::Sender<RoleChanged> {
        self.intake_tx.clone()
    }

    /// Get a reference to the service container.
    pub fn container(&self) -> Arc<ServiceContainer> {
        Arc::clone(&self.container)
    }

    /// Stop the handler, then audit the ledger.
    pub async fn shutdown(&self) -> Result<ShutdownReport> {
        info!("Initiating graceful shutdown...");
        self.shutdown_tx.send_replace(true);

        let task = self.handler.lock().take();
        let intake = match task {
            Some(task) => task.await.context("role-change handler task failed")?,
            None => IntakeStats::default(),
        };

        let divergences = self
            .container
            .checker
            .audit()
            .await
            .context("ledger audit failed")?;
        for divergence in &divergences {
            warn!("[gl-02] Counter divergence: {}", divergence);
        }

        info!("Shutdown complete");
        Ok(ShutdownReport {
            intake,
            divergences,
        })
    }
}

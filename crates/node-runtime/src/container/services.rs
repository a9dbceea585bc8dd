//! # Service Container
//!
//! Holds the subsystem services and the stores behind them.
//!
//! ## Thread Safety
//!
//! - Services are wrapped in `Arc` and shared with handler tasks
//! - Services keep no mutable state of their own; all state lives in the stores

use std::sync::Arc;

use gl_01_settings::{InMemorySettingsStore, SettingsNormalizer};
use gl_02_role_ledger::{ConsistencyChecker, InMemoryLedgerStore, RoleEventLedger};
use shared_types::SystemTimeSource;
use tracing::info;

use crate::container::config::RuntimeConfig;

/// Settings Normalizer over the in-memory store.
pub type ConcreteSettingsService = SettingsNormalizer<InMemorySettingsStore>;

/// Role-Event Ledger over the in-memory store.
pub type ConcreteLedgerService = RoleEventLedger<InMemoryLedgerStore>;

/// Central container holding all subsystem instances.
pub struct ServiceContainer {
    /// Settings Normalizer (Subsystem 1).
    pub settings: Arc<ConcreteSettingsService>,

    /// Role-Event Ledger (Subsystem 2).
    pub ledger: Arc<ConcreteLedgerService>,

    /// Reads the ledger store directly to audit counters.
    pub checker: ConsistencyChecker<InMemoryLedgerStore>,

    /// Configuration the container was built from.
    pub config: RuntimeConfig,
}

impl ServiceContainer {
    /// Build every service with fresh in-memory stores.
    pub fn new(config: RuntimeConfig) -> Self {
        Self::with_stores(
            config,
            Arc::new(InMemorySettingsStore::new()),
            Arc::new(InMemoryLedgerStore::new()),
        )
    }

    /// Build every service around the given stores.
    pub fn with_stores(
        config: RuntimeConfig,
        settings_store: Arc<InMemorySettingsStore>,
        ledger_store: Arc<InMemoryLedgerStore>,
    ) -> Self {
        info!("[gl-01] Initializing Settings Normalizer...");
        let settings = Arc::new(SettingsNormalizer::with_config(
            settings_store,
            config.settings.clone(),
        ));

        info!("[gl-02] Initializing Role-Event Ledger...");
        let checker =
            ConsistencyChecker::new(Arc::clone(&ledger_store), config.ledger.store_timeout);
        let ledger = Arc::new(RoleEventLedger::with_config(
            ledger_store,
            Arc::new(SystemTimeSource),
            config.ledger.clone(),
        ));

        Self {
            settings,
            ledger,
            checker,
            config,
        }
    }
}

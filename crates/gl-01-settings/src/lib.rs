//! # GL-01 Settings Normalizer
//!
//! Canonical boolean settings for every community.
//!
//! **Subsystem ID:** 1  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Settings arrive from dashboard forms, JSON payloads and previously stored
//! documents, so a boolean may show up as `true`, `"true"`, `"false"`, `1` or
//! `null`. This subsystem converts each incoming value into exactly `true` or
//! `false` with one strict policy, then merges the result into the stored
//! document.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Canonical Booleans | Only `true`/`false` is ever persisted |
//! | 2 | Strict Strings | Only the exact string `"true"` converts to `true` |
//! | 3 | Atomic Patches | One bad field rejects the whole patch, nothing is written |
//! | 4 | Merge Not Replace | Fields absent from a patch keep their stored value |
//!
//! ## Module Structure
//!
//! ```text
//! gl-01-settings/
//! ├── domain/          # Coercion policy, field paths, CommunitySettings
//! ├── ports/           # SettingsApi (inbound), SettingsStore (outbound)
//! ├── adapters/        # In-memory SettingsStore
//! └── service/         # SettingsNormalizer
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::InMemorySettingsStore;
pub use domain::{
    coerce_bool, json_type_name, normalize_patch, CoercionError, CommunitySettings,
    NormalizedPatch, SettingField, SettingsConfig, SettingsError, KNOWN_FLAGS, KNOWN_MODULES,
};
pub use ports::{SettingsApi, SettingsStore};
pub use service::SettingsNormalizer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

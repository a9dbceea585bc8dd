//! # Guild-Ledger Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/  # End-to-end flows across both subsystems
//! └── benches/          # Ledger and normalizer throughput
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gl-tests
//! cargo bench -p gl-tests
//! ```

pub mod integration;

//! # Integration Tests
//!
//! - `scenarios`: the reference behaviours of coercion, recording and settings
//! - `runtime_flow`: role changes through the node runtime intake

mod runtime_flow;
mod scenarios;

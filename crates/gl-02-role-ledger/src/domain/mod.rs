//! # Domain Module
//!
//! Core ledger types and the pure counter-consistency check.

pub mod consistency;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use consistency::*;
pub use entities::*;
pub use errors::*;
pub use value_objects::*;

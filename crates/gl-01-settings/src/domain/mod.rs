//! # Domain Module
//!
//! Pure settings logic. Nothing here touches a store, so the coercion policy
//! and patch validation are unit-testable on their own.

pub mod coercion;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use coercion::*;
pub use entities::*;
pub use errors::*;
pub use value_objects::*;

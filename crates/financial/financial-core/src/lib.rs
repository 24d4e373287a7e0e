//! Financial Analytics Core
//!
//! Implementations for return derivation and risk metrics.

pub mod returns;
pub mod risk;

pub use returns::*;
pub use risk::*;

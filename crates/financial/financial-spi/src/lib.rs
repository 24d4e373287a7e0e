//! Financial Analytics Service Provider Interface
//!
//! Defines traits and types for return derivation and risk metrics
//! (historical Value-at-Risk, annualized Sharpe ratio).

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::*;
pub use error::*;
pub use model::*;

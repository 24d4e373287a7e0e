//! Forecast Service Provider Interface
//!
//! Defines traits and result types for seasonal decomposition and
//! hold-out forecast evaluation.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Decomposer, ForecastEvaluator};
pub use error::{ErrorCategory, ForecastError, Result};
pub use model::{
    ArimaOrder, DecompositionResult, ForecastResult, TrendForecastResult, MAX_AR_ORDER,
    MAX_DIFFERENCING, MAX_MA_ORDER,
};

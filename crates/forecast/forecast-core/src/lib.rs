//! Forecast Core
//!
//! Core implementations for seasonal decomposition, ARIMA estimation and
//! hold-out forecast evaluation.

pub mod arima;
pub mod decomposition;
pub mod evaluation;
pub mod metrics;
pub mod optimize;
pub mod state_space;
pub mod transform;
pub mod trend;

// Re-export SPI traits for implementations
pub use forecast_spi::{
    ArimaOrder, DecompositionResult, Decomposer, ForecastError, ForecastEvaluator, ForecastResult,
    Result, TrendForecastResult,
};

// Re-export main types
pub use arima::{Arima, FittedArima};
pub use decomposition::{decompose_additive, AdditiveDecomposer};
pub use evaluation::{evaluate_arima, ArimaEvaluation, ArimaEvaluator};
pub use trend::{evaluate_trend, LinearTrendEvaluator};

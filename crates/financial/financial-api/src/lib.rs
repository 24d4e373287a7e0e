//! Financial Analytics API
//!
//! Configuration types for risk metrics.

mod config;

pub use config::RiskConfig;

// Re-export SPI types for convenience
pub use financial_spi::{
    FinancialError, MetricParameters, Result, ReturnSeries, RiskMetric, RiskMetricResult,
};

//! Forecast Consumer API
//!
//! Consumer configurations for decomposition and forecast evaluation.
//!
//! This crate provides:
//! - Configuration types with defaults and validation
//! - Re-exports from SPI for convenience

// Re-export traits from SPI
pub use forecast_spi::{
    ArimaOrder, DecompositionResult, Decomposer, ForecastError, ForecastEvaluator, ForecastResult,
    Result, TrendForecastResult,
};

use serde::{Deserialize, Serialize};

/// Configuration for decomposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecompositionConfig {
    /// Seasonality period
    pub period: usize,
}

impl DecompositionConfig {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn validate(&self) -> Result<()> {
        if self.period < 2 {
            return Err(ForecastError::InvalidParameter {
                name: "period".to_string(),
                reason: format!("must be at least 2, got {}", self.period),
            });
        }
        Ok(())
    }
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self { period: 12 }
    }
}

/// Optimizer settings for maximum-likelihood fitting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    /// Nelder-Mead iteration limit
    pub max_iterations: usize,
    /// Convergence tolerance on objective spread and simplex size
    pub tolerance: f64,
}

impl FitOptions {
    pub fn new(max_iterations: usize, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(ForecastError::InvalidParameter {
                name: "max_iterations".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ForecastError::InvalidParameter {
                name: "tolerance".to_string(),
                reason: format!("must be finite and positive, got {}", self.tolerance),
            });
        }
        Ok(())
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            max_iterations: 5000,
            tolerance: 1e-8,
        }
    }
}

/// Configuration for ARIMA hold-out evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of trailing observations held out for scoring
    pub holdout: usize,
    /// Model order
    pub order: ArimaOrder,
    /// Optimizer settings
    pub fit: FitOptions,
}

impl ForecastConfig {
    pub fn new(holdout: usize, order: ArimaOrder) -> Self {
        Self {
            holdout,
            order,
            fit: FitOptions::default(),
        }
    }

    pub fn with_fit(mut self, fit: FitOptions) -> Self {
        self.fit = fit;
        self
    }

    /// Validate configuration values that do not depend on the series.
    pub fn validate(&self) -> Result<()> {
        self.order.validate()?;
        self.fit.validate()
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            holdout: 4,
            order: ArimaOrder::default(),
            fit: FitOptions::default(),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{DecompositionConfig, FitOptions, ForecastConfig};
    pub use forecast_spi::{
        ArimaOrder, DecompositionResult, Decomposer, ForecastError, ForecastEvaluator,
        ForecastResult, Result,
    };
}

//! Trait for time series decomposition

use data_spi::TimeSeries;

use crate::error::Result;
use crate::model::DecompositionResult;

/// Trait for time series decomposition
pub trait Decomposer: Send + Sync {
    /// Decompose a time series into trend, seasonal, and residual components
    fn decompose(&self, series: &TimeSeries, period: usize) -> Result<DecompositionResult>;
}

//! Trait for hold-out forecast evaluation

use data_spi::TimeSeries;

use crate::error::Result;
use crate::model::ForecastResult;

/// Fits a model on `series[..len - holdout]`, forecasts the last `holdout`
/// points and scores the forecasts against them.
pub trait ForecastEvaluator: Send + Sync {
    fn evaluate(&self, series: &TimeSeries, holdout: usize) -> Result<ForecastResult>;
}

//! Linear trend baseline
//!
//! Fits `y = intercept + slope * t` by ordinary least squares on the
//! observation index `t = 0, 1, 2, ...` of the training split and
//! extrapolates it over the held-out tail.

use data_spi::TimeSeries;
use forecast_spi::{
    ForecastError, ForecastEvaluator, ForecastResult, Result, TrendForecastResult,
};

use crate::evaluation::split_holdout;
use crate::metrics::r_squared;

/// Linear trend hold-out evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearTrendEvaluator;

impl LinearTrendEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl ForecastEvaluator for LinearTrendEvaluator {
    fn evaluate(&self, series: &TimeSeries, holdout: usize) -> Result<ForecastResult> {
        evaluate_trend(series, holdout).map(TrendForecastResult::into_forecast)
    }
}

/// Fit on `series[..len - holdout]` and score the last `holdout` points.
pub fn evaluate_trend(series: &TimeSeries, holdout: usize) -> Result<TrendForecastResult> {
    let (train, test) = split_holdout(series, holdout, 2)?;
    let (slope, intercept) = fit_linear_trend(train.values())?;

    let start = train.len();
    let forecasts: Vec<f64> = (start..start + holdout)
        .map(|t| intercept + slope * t as f64)
        .collect();
    let r2 = r_squared(test.values(), &forecasts)?;
    let forecast = ForecastResult::new(
        test.timestamps().to_vec(),
        forecasts,
        test.values().to_vec(),
    )?;
    Ok(TrendForecastResult::new(forecast, slope, intercept, r2))
}

/// OLS `(slope, intercept)` of `data` on its index.
pub fn fit_linear_trend(data: &[f64]) -> Result<(f64, f64)> {
    if data.len() < 2 {
        return Err(ForecastError::InsufficientData {
            required: 2,
            actual: data.len(),
        });
    }

    let n = data.len() as f64;

    // Time indices: 0, 1, 2, ...
    let sum_t: f64 = (0..data.len()).map(|i| i as f64).sum();
    let sum_y: f64 = data.iter().sum();
    let sum_t2: f64 = (0..data.len()).map(|i| (i * i) as f64).sum();
    let sum_ty: f64 = data.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

    let denominator = n * sum_t2 - sum_t * sum_t;
    if denominator.abs() < 1e-10 {
        return Err(ForecastError::NumericalError(
            "Singular matrix in regression".to_string(),
        ));
    }

    let slope = (n * sum_ty - sum_t * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_t) / n;
    Ok((slope, intercept))
}

//! Hold-out evaluation of ARIMA forecasts

use data_spi::TimeSeries;
use forecast_api::{FitOptions, ForecastConfig};
use forecast_spi::{ArimaOrder, ForecastError, ForecastEvaluator, ForecastResult, Result};
use serde::Serialize;

use crate::arima::{Arima, FittedArima};

/// Fits ARIMA of a fixed order on the training split and scores its
/// forecasts of the held-out tail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArimaEvaluator {
    order: ArimaOrder,
    options: FitOptions,
}

/// Fitted model together with its scored forecasts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArimaEvaluation {
    pub model: FittedArima,
    pub forecast: ForecastResult,
}

impl ArimaEvaluator {
    pub fn new(order: ArimaOrder) -> Self {
        Self {
            order,
            options: FitOptions::default(),
        }
    }

    pub fn from_config(config: &ForecastConfig) -> Self {
        Self {
            order: config.order,
            options: config.fit,
        }
    }

    pub fn with_options(mut self, options: FitOptions) -> Self {
        self.options = options;
        self
    }

    /// Evaluate and keep the fitted model.
    pub fn evaluate_with_model(&self, series: &TimeSeries, holdout: usize) -> Result<ArimaEvaluation> {
        let model = Arima::new(self.order)?.with_options(self.options);
        let (train, test) = split_holdout(series, holdout, self.order.total() + 1)?;

        let fitted = model.fit(train.values())?;
        let forecasts = fitted.forecast(holdout);
        let forecast = ForecastResult::new(
            test.timestamps().to_vec(),
            forecasts,
            test.values().to_vec(),
        )?;
        Ok(ArimaEvaluation {
            model: fitted,
            forecast,
        })
    }
}

impl ForecastEvaluator for ArimaEvaluator {
    fn evaluate(&self, series: &TimeSeries, holdout: usize) -> Result<ForecastResult> {
        self.evaluate_with_model(series, holdout)
            .map(|evaluation| evaluation.forecast)
    }
}

/// Evaluate an ARIMA model of `order` with default optimizer settings.
pub fn evaluate_arima(
    series: &TimeSeries,
    holdout: usize,
    order: ArimaOrder,
) -> Result<ForecastResult> {
    ArimaEvaluator::new(order).evaluate(series, holdout)
}

/// Chronological split into `series[..len - holdout]` and the last
/// `holdout` points.
///
/// An empty hold-out is `InsufficientData { required: 1, actual: 0 }`; a
/// training split shorter than `min_train` (including an empty one) is
/// `InsufficientData { required: min_train, actual: train_len }`.
pub(crate) fn split_holdout(
    series: &TimeSeries,
    holdout: usize,
    min_train: usize,
) -> Result<(TimeSeries, TimeSeries)> {
    if holdout == 0 {
        return Err(ForecastError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    let train_len = series.len().saturating_sub(holdout);
    if train_len < min_train.max(1) {
        return Err(ForecastError::InsufficientData {
            required: min_train.max(1),
            actual: train_len,
        });
    }
    Ok(series.split_at(train_len))
}

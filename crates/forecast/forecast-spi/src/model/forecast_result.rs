//! Hold-out forecast results

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Point forecasts for a held-out horizon scored against the actuals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    timestamps: Vec<i64>,
    forecasts: Vec<f64>,
    actuals: Vec<f64>,
    mse: f64,
}

impl ForecastResult {
    /// Build a result; the mean squared error is computed here.
    pub fn new(timestamps: Vec<i64>, forecasts: Vec<f64>, actuals: Vec<f64>) -> Result<Self> {
        if forecasts.is_empty() {
            return Err(ForecastError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        if forecasts.len() != actuals.len() || timestamps.len() != actuals.len() {
            return Err(ForecastError::InvalidParameter {
                name: "forecasts".to_string(),
                reason: format!(
                    "{} timestamps, {} forecasts and {} actuals must have equal length",
                    timestamps.len(),
                    forecasts.len(),
                    actuals.len()
                ),
            });
        }
        let mse = actuals
            .iter()
            .zip(&forecasts)
            .map(|(a, f)| (a - f).powi(2))
            .sum::<f64>()
            / actuals.len() as f64;
        Ok(Self {
            timestamps,
            forecasts,
            actuals,
            mse,
        })
    }

    /// Timestamps of the held-out observations
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Point forecasts, one per held-out step
    pub fn forecasts(&self) -> &[f64] {
        &self.forecasts
    }

    /// Held-out actual values
    pub fn actuals(&self) -> &[f64] {
        &self.actuals
    }

    /// Mean squared error
    pub fn mse(&self) -> f64 {
        self.mse
    }

    /// Forecast errors `actual - forecast`
    pub fn errors(&self) -> Vec<f64> {
        self.actuals
            .iter()
            .zip(&self.forecasts)
            .map(|(a, f)| a - f)
            .collect()
    }

    /// Mean absolute error
    pub fn mae(&self) -> f64 {
        self.errors().iter().map(|e| e.abs()).sum::<f64>() / self.forecasts.len() as f64
    }

    /// Root mean squared error
    pub fn rmse(&self) -> f64 {
        self.mse.sqrt()
    }

    /// Forecast horizon
    pub fn horizon(&self) -> usize {
        self.forecasts.len()
    }
}

/// Linear trend hold-out evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendForecastResult {
    forecast: ForecastResult,
    slope: f64,
    intercept: f64,
    r_squared: f64,
}

impl TrendForecastResult {
    pub fn new(forecast: ForecastResult, slope: f64, intercept: f64, r_squared: f64) -> Self {
        Self {
            forecast,
            slope,
            intercept,
            r_squared,
        }
    }

    /// Scored forecasts
    pub fn forecast(&self) -> &ForecastResult {
        &self.forecast
    }

    /// Fitted slope per observation
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Fitted value at observation index 0
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficient of determination on the held-out actuals
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    pub fn into_forecast(self) -> ForecastResult {
        self.forecast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_result_scores() {
        let result =
            ForecastResult::new(vec![5, 6], vec![1.0, 2.0], vec![2.0, 4.0]).unwrap();
        assert!((result.mse() - 2.5).abs() < 1e-12);
        assert!((result.mae() - 1.5).abs() < 1e-12);
        assert!((result.rmse() - 2.5_f64.sqrt()).abs() < 1e-12);
        assert_eq!(result.errors(), vec![1.0, 2.0]);
        assert_eq!(result.horizon(), 2);
    }

    #[test]
    fn test_forecast_result_perfect() {
        let result = ForecastResult::new(vec![1], vec![5.0], vec![5.0]).unwrap();
        assert_eq!(result.mse(), 0.0);
        assert_eq!(result.mae(), 0.0);
    }

    #[test]
    fn test_forecast_result_rejects_mismatch() {
        let result = ForecastResult::new(vec![1, 2], vec![1.0], vec![1.0, 2.0]);
        assert!(matches!(
            result,
            Err(ForecastError::InvalidParameter { .. })
        ));
        assert!(ForecastResult::new(vec![], vec![], vec![]).is_err());
    }

    #[test]
    fn test_trend_result_accessors() {
        let forecast = ForecastResult::new(vec![3], vec![4.0], vec![4.0]).unwrap();
        let trend = TrendForecastResult::new(forecast.clone(), 1.0, 1.0, 1.0);
        assert_eq!(trend.slope(), 1.0);
        assert_eq!(trend.r_squared(), 1.0);
        assert_eq!(trend.into_forecast(), forecast);
    }
}

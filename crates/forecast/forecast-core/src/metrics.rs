//! Forecast accuracy metrics
//!
//! Provides standard metrics for evaluating forecasts. Unlike a bare
//! `f64` return these reject empty or mismatched inputs instead of
//! producing NaN.

use forecast_spi::{ForecastError, Result};

fn check_inputs(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.is_empty() {
        return Err(ForecastError::InvalidParameter {
            name: "actual".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if actual.len() != predicted.len() {
        return Err(ForecastError::InvalidParameter {
            name: "predicted".to_string(),
            reason: format!(
                "length {} does not match {} actual values",
                predicted.len(),
                actual.len()
            ),
        });
    }
    Ok(())
}

/// Mean Absolute Error (MAE)
///
/// Average of absolute differences between predictions and actual values.
/// Lower is better. Same scale as the data.
///
/// # Example
///
/// ```rust
/// use forecast_core::metrics::mae;
///
/// let actual = vec![1.0, 2.0, 3.0];
/// let predicted = vec![1.5, 2.0, 2.0];
/// assert_eq!(mae(&actual, &predicted).unwrap(), 0.5);
/// ```
pub fn mae(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_inputs(actual, predicted)?;
    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();
    Ok(sum / actual.len() as f64)
}

/// Mean Squared Error (MSE)
///
/// Average of squared differences. Penalizes large errors more heavily.
/// Lower is better.
///
/// # Example
///
/// ```rust
/// use forecast_core::metrics::mse;
///
/// let actual = vec![1.0, 2.0, 3.0];
/// let predicted = vec![1.0, 2.0, 5.0];
/// assert_eq!(mse(&actual, &predicted).unwrap(), 4.0 / 3.0);
/// ```
pub fn mse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_inputs(actual, predicted)?;
    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    Ok(sum / actual.len() as f64)
}

/// Root Mean Squared Error (RMSE)
///
/// Square root of MSE. Same scale as the data.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    mse(actual, predicted).map(f64::sqrt)
}

/// Coefficient of determination of `predicted` against `actual`.
///
/// A constant `actual` has no variance to explain: the score is `1.0` when
/// the prediction matches it exactly and `0.0` otherwise.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_inputs(actual, predicted)?;
    let mean = actual.iter().sum::<f64>() / actual.len() as f64;
    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    if ss_tot == 0.0 {
        return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }
    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_prediction() {
        let actual = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(mae(&actual, &actual).unwrap(), 0.0);
        assert_eq!(mse(&actual, &actual).unwrap(), 0.0);
        assert_eq!(rmse(&actual, &actual).unwrap(), 0.0);
        assert_eq!(r_squared(&actual, &actual).unwrap(), 1.0);
    }

    #[test]
    fn test_known_errors() {
        let actual = vec![2.0, 4.0];
        let predicted = vec![1.0, 2.0];
        assert!((mae(&actual, &predicted).unwrap() - 1.5).abs() < 1e-12);
        assert!((mse(&actual, &predicted).unwrap() - 2.5).abs() < 1e-12);
        assert!((rmse(&actual, &predicted).unwrap() - 2.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_mean_prediction_is_zero() {
        let actual = vec![1.0, 2.0, 3.0];
        let predicted = vec![2.0, 2.0, 2.0];
        assert!(r_squared(&actual, &predicted).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_constant_target() {
        assert_eq!(r_squared(&[3.0, 3.0], &[3.0, 3.0]).unwrap(), 1.0);
        assert_eq!(r_squared(&[3.0, 3.0], &[3.0, 3.5]).unwrap(), 0.0);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert!(matches!(
            mse(&[], &[]),
            Err(ForecastError::InvalidParameter { .. })
        ));
        assert!(matches!(
            mae(&[1.0, 2.0], &[1.0]),
            Err(ForecastError::InvalidParameter { .. })
        ));
        assert!(rmse(&[1.0], &[]).is_err());
        assert!(r_squared(&[], &[1.0]).is_err());
    }
}

//! Additive seasonal decomposition
//!
//! Splits a series into a centered moving-average trend, a zero-mean
//! seasonal pattern and a residual: `Y = T + S + R`.

use data_spi::TimeSeries;
use forecast_spi::{DecompositionResult, Decomposer, ForecastError, Result};

/// Additive decomposition: Y = T + S + R
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveDecomposer;

impl AdditiveDecomposer {
    pub fn new() -> Self {
        Self
    }
}

impl Decomposer for AdditiveDecomposer {
    fn decompose(&self, series: &TimeSeries, period: usize) -> Result<DecompositionResult> {
        decompose_additive(series, period)
    }
}

/// Perform additive decomposition.
///
/// Requires `period >= 2` and at least two full periods of data.
pub fn decompose_additive(series: &TimeSeries, period: usize) -> Result<DecompositionResult> {
    let n = series.len();
    if period < 2 || n < 2 * period {
        return Err(ForecastError::InsufficientPeriods {
            period,
            required: 2 * period.max(2),
            actual: n,
        });
    }

    let data = series.values();
    let trend = centered_moving_average(data, period);

    // Average detrended value per phase, over defined trend points only
    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (i, t) in trend.iter().enumerate() {
        if let Some(t) = t {
            sums[i % period] += data[i] - t;
            counts[i % period] += 1;
        }
    }
    let phase_means: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(s, &c)| s / c as f64)
        .collect();
    let offset = phase_means.iter().sum::<f64>() / period as f64;
    let seasonal: Vec<f64> = (0..n).map(|i| phase_means[i % period] - offset).collect();

    let residual = trend
        .iter()
        .zip(data)
        .zip(&seasonal)
        .map(|((t, x), s)| t.map(|t| x - t - s))
        .collect();

    Ok(DecompositionResult::new(
        period,
        series.timestamps().to_vec(),
        trend,
        seasonal,
        residual,
    ))
}

/// Centered moving average over `period` points.
///
/// Even periods use the 2 x `period` filter (half weight on both ends of a
/// `period + 1` window). The first and last `period / 2` points are `None`.
fn centered_moving_average(data: &[f64], period: usize) -> Vec<Option<f64>> {
    let half = period / 2;
    let weights: Vec<f64> = if period % 2 == 0 {
        let mut w = vec![1.0; period + 1];
        w[0] = 0.5;
        w[period] = 0.5;
        w
    } else {
        vec![1.0; period]
    };

    (0..data.len())
        .map(|i| {
            if i < half || i + half >= data.len() {
                return None;
            }
            let window = &data[i - half..=i + half];
            let sum: f64 = window.iter().zip(&weights).map(|(x, w)| x * w).sum();
            Some(sum / period as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seasonal_series(period_pattern: &[f64], cycles: usize) -> TimeSeries {
        let values = (0..period_pattern.len() * cycles)
            .map(|i| 10.0 + 0.5 * i as f64 + period_pattern[i % period_pattern.len()])
            .collect();
        TimeSeries::from_values(values).unwrap()
    }

    #[test]
    fn test_even_period_recovers_components() {
        let pattern = [1.0, -1.0, 2.0, -2.0];
        let series = seasonal_series(&pattern, 3);
        let result = decompose_additive(&series, 4).unwrap();

        assert_eq!(result.trend()[..2], [None, None]);
        assert_eq!(result.trend()[10..], [None, None]);
        for i in 2..10 {
            let trend = result.trend()[i].unwrap();
            assert!((trend - (10.0 + 0.5 * i as f64)).abs() < 1e-10);
            assert!((result.seasonal()[i] - pattern[i % 4]).abs() < 1e-10);
            assert!(result.residual()[i].unwrap().abs() < 1e-10);
        }
    }

    #[test]
    fn test_odd_period_edges() {
        let pattern = [3.0, 0.0, -3.0];
        let series = seasonal_series(&pattern, 3);
        let result = decompose_additive(&series, 3).unwrap();
        assert_eq!(result.trend()[0], None);
        assert!(result.trend()[1].is_some());
        assert!(result.trend()[7].is_some());
        assert_eq!(result.trend()[8], None);
        assert_eq!(result.residual()[8], None);
        for i in 1..8 {
            assert!((result.seasonal()[i] - pattern[i % 3]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_seasonal_sums_to_zero_over_period() {
        let values = vec![5.0, 9.0, 2.0, 7.0, 6.0, 11.0, 1.0, 8.0, 4.0, 10.0, 3.0, 9.0];
        let series = TimeSeries::from_values(values).unwrap();
        let result = decompose_additive(&series, 4).unwrap();
        let sum: f64 = result.seasonal()[..4].iter().sum();
        assert!(sum.abs() < 1e-10);
    }

    #[test]
    fn test_reconstruction() {
        let values = vec![5.0, 9.0, 2.0, 7.0, 6.0, 11.0, 1.0, 8.0, 4.0, 10.0, 3.0, 9.0];
        let series = TimeSeries::from_values(values.clone()).unwrap();
        let result = decompose_additive(&series, 3).unwrap();
        for (i, value) in result.reconstructed().iter().enumerate() {
            if let Some(value) = value {
                assert!((value - values[i]).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_insufficient_periods() {
        let series = TimeSeries::from_values(vec![1.0; 7]).unwrap();
        assert_eq!(
            decompose_additive(&series, 4),
            Err(ForecastError::InsufficientPeriods {
                period: 4,
                required: 8,
                actual: 7
            })
        );
        assert!(matches!(
            decompose_additive(&series, 1),
            Err(ForecastError::InsufficientPeriods { period: 1, .. })
        ));
    }

    #[test]
    fn test_decomposer_trait() {
        let decomposer: Box<dyn Decomposer> = Box::new(AdditiveDecomposer::new());
        let series = TimeSeries::from_values(vec![1.0, 2.0, 1.0, 2.0]).unwrap();
        let result = decomposer.decompose(&series, 2).unwrap();
        assert_eq!(result.period(), 2);
        assert_eq!(result.trend()[1], Some(1.5));
    }
}

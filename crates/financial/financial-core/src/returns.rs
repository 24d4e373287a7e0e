//! Simple-return derivation.

use data_spi::TimeSeries;
use financial_spi::{FinancialError, Result, ReturnSeries, ReturnSeriesBuilder};

/// Builds simple returns `(p[t] - p[t-1]) / p[t-1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleReturnBuilder;

impl SimpleReturnBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl ReturnSeriesBuilder for SimpleReturnBuilder {
    fn build(&self, prices: &TimeSeries) -> Result<ReturnSeries> {
        simple_returns(prices)
    }
}

/// Compute simple returns of a price series.
///
/// Each return is stamped with the later price's timestamp. A pair whose
/// earlier price is zero has no defined return: it is left out and its
/// timestamp is recorded in [`ReturnSeries::excluded`].
pub fn simple_returns(prices: &TimeSeries) -> Result<ReturnSeries> {
    if prices.len() < 2 {
        return Err(FinancialError::InsufficientData {
            required: 2,
            actual: prices.len(),
        });
    }

    let p = prices.values();
    let t = prices.timestamps();
    let mut timestamps = Vec::with_capacity(p.len() - 1);
    let mut values = Vec::with_capacity(p.len() - 1);
    let mut excluded = Vec::new();

    for i in 1..p.len() {
        if p[i - 1] == 0.0 {
            excluded.push(t[i]);
            continue;
        }
        timestamps.push(t[i]);
        values.push((p[i] - p[i - 1]) / p[i - 1]);
    }

    // Overflowing quotients surface here as NonFiniteValue.
    let series = TimeSeries::from_parts(timestamps, values)?;
    Ok(ReturnSeries::new(series, excluded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_spi::DataError;

    #[test]
    fn test_simple_returns_basic() {
        let prices = TimeSeries::from_values(vec![100.0, 110.0, 99.0]).unwrap();
        let returns = simple_returns(&prices).unwrap();
        assert_eq!(returns.len(), 2);
        assert!((returns.values()[0] - 0.1).abs() < 1e-12);
        assert!((returns.values()[1] + 0.1).abs() < 1e-12);
        assert_eq!(returns.timestamps(), &[1, 2]);
    }

    #[test]
    fn test_simple_returns_zero_price_excluded() {
        let prices =
            TimeSeries::from_parts(vec![10, 20, 30, 40], vec![100.0, 0.0, 50.0, 55.0]).unwrap();
        let returns = simple_returns(&prices).unwrap();
        assert_eq!(returns.timestamps(), &[20, 40]);
        assert!((returns.values()[0] + 1.0).abs() < 1e-12);
        assert!((returns.values()[1] - 0.1).abs() < 1e-12);
        assert_eq!(returns.excluded(), &[30]);
    }

    #[test]
    fn test_simple_returns_all_zero_prices() {
        let prices = TimeSeries::from_values(vec![0.0, 0.0, 0.0]).unwrap();
        let returns = simple_returns(&prices).unwrap();
        assert!(returns.is_empty());
        assert_eq!(returns.excluded(), &[1, 2]);
    }

    #[test]
    fn test_simple_returns_insufficient() {
        let prices = TimeSeries::from_values(vec![100.0]).unwrap();
        assert_eq!(
            simple_returns(&prices),
            Err(FinancialError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
        let empty = TimeSeries::default();
        assert!(simple_returns(&empty).is_err());
    }

    #[test]
    fn test_simple_returns_overflow_is_rejected() {
        let prices = TimeSeries::from_values(vec![1e-300, 1e300]).unwrap();
        assert!(matches!(
            simple_returns(&prices),
            Err(FinancialError::Data(DataError::NonFiniteValue { index: 0, .. }))
        ));
    }

    #[test]
    fn test_builder_matches_function() {
        let prices = TimeSeries::from_values(vec![1.0, 2.0, 3.0]).unwrap();
        let builder = SimpleReturnBuilder::new();
        assert_eq!(builder.build(&prices), simple_returns(&prices));
    }
}

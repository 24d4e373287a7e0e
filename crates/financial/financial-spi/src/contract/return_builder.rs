//! Return series builder trait.

use data_spi::TimeSeries;

use crate::error::Result;
use crate::model::ReturnSeries;

/// Derives a [`ReturnSeries`] from a price series.
pub trait ReturnSeriesBuilder: Send + Sync {
    /// Build returns from consecutive prices.
    fn build(&self, prices: &TimeSeries) -> Result<ReturnSeries>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinancialError;

    /// Log-return builder, a second implementation of the contract
    struct LogReturnBuilder;

    impl ReturnSeriesBuilder for LogReturnBuilder {
        fn build(&self, prices: &TimeSeries) -> Result<ReturnSeries> {
            if prices.len() < 2 {
                return Err(FinancialError::InsufficientData {
                    required: 2,
                    actual: prices.len(),
                });
            }
            let values = prices
                .values()
                .windows(2)
                .map(|w| (w[1] / w[0]).ln())
                .collect();
            let timestamps = prices.timestamps()[1..].to_vec();
            let series = TimeSeries::from_parts(timestamps, values)?;
            Ok(ReturnSeries::new(series, Vec::new()))
        }
    }

    #[test]
    fn test_builder_trait_object() {
        let builder: Box<dyn ReturnSeriesBuilder> = Box::new(LogReturnBuilder);
        let prices = TimeSeries::from_parts(vec![10, 20, 30], vec![100.0, 110.0, 99.0]).unwrap();
        let returns = builder.build(&prices).unwrap();
        assert_eq!(returns.len(), 2);
        assert_eq!(returns.timestamps(), &[20, 30]);
        assert!((returns.values()[0] - 1.1_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_builder_rejects_short_series() {
        let builder = LogReturnBuilder;
        let prices = TimeSeries::from_values(vec![100.0]).unwrap();
        assert!(matches!(
            builder.build(&prices),
            Err(FinancialError::InsufficientData { required: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_builder_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LogReturnBuilder>();
    }
}

//! Simple-return series.

use data_spi::TimeSeries;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Returns derived from a price series.
///
/// Each observation carries the timestamp of the later price of its pair.
/// Pairs whose earlier price was zero have no defined return; their
/// timestamps are listed in [`ReturnSeries::excluded`] instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReturnSeries {
    series: TimeSeries,
    excluded: Vec<i64>,
}

impl ReturnSeries {
    /// Wrap an already computed return series.
    pub fn new(series: TimeSeries, excluded: Vec<i64>) -> Self {
        Self { series, excluded }
    }

    /// Build from raw return values indexed `0..n`.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        Ok(Self::new(TimeSeries::from_values(values)?, Vec::new()))
    }

    /// Underlying series.
    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Return values in time order.
    pub fn values(&self) -> &[f64] {
        self.series.values()
    }

    /// Timestamps of the later observation of each pair.
    pub fn timestamps(&self) -> &[i64] {
        self.series.timestamps()
    }

    /// Timestamps whose return was undefined (zero base price).
    pub fn excluded(&self) -> &[i64] {
        &self.excluded
    }

    /// Number of returns.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether there are no returns.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Consume into the underlying series.
    pub fn into_series(self) -> TimeSeries {
        self.series
    }
}

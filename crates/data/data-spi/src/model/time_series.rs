//! Validated time series.
//!
//! A [`TimeSeries`] is an ordered sequence of `(timestamp, value)` pairs with
//! strictly increasing timestamps and finite values. Every constructor (and
//! deserialization) enforces both invariants, so downstream computations never
//! see NaN or infinity coming from the input.

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// A single observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Ordering key (Unix seconds, period index, ...)
    pub timestamp: i64,
    /// Observed value
    pub value: f64,
}

impl Observation {
    /// Create a new observation.
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Ordered, validated sequence of observations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawSeries", into = "RawSeries")]
pub struct TimeSeries {
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
struct RawSeries {
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

impl TryFrom<RawSeries> for TimeSeries {
    type Error = DataError;

    fn try_from(raw: RawSeries) -> Result<Self> {
        TimeSeries::from_parts(raw.timestamps, raw.values)
    }
}

impl From<TimeSeries> for RawSeries {
    fn from(series: TimeSeries) -> Self {
        RawSeries {
            timestamps: series.timestamps,
            values: series.values,
        }
    }
}

impl TimeSeries {
    /// Build a series, rejecting non-finite values and unordered timestamps.
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        let (timestamps, values) = observations
            .into_iter()
            .map(|o| (o.timestamp, o.value))
            .unzip();
        Self::from_parts(timestamps, values)
    }

    /// Build a series after dropping observations with non-finite values.
    ///
    /// Timestamp ordering is still enforced on the remaining observations.
    pub fn new_filtered(observations: Vec<Observation>) -> Result<Self> {
        let kept = observations
            .into_iter()
            .filter(|o| o.value.is_finite())
            .collect();
        Self::new(kept)
    }

    /// Build a series from parallel timestamp and value vectors.
    pub fn from_parts(timestamps: Vec<i64>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(DataError::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }

        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(DataError::NonFiniteValue { index, value });
        }

        for (i, pair) in timestamps.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(DataError::NonIncreasingTimestamp {
                    index: i + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }

        Ok(Self { timestamps, values })
    }

    /// Build a series whose timestamps are the positions `0..n`.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        let timestamps = (0..values.len() as i64).collect();
        Self::from_parts(timestamps, values)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Observation values in time order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Observation timestamps in time order.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Observation at `index`.
    pub fn get(&self, index: usize) -> Option<Observation> {
        Some(Observation::new(
            *self.timestamps.get(index)?,
            *self.values.get(index)?,
        ))
    }

    /// First observation.
    pub fn first(&self) -> Option<Observation> {
        self.get(0)
    }

    /// Last observation.
    pub fn last(&self) -> Option<Observation> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate over observations.
    pub fn iter(&self) -> impl Iterator<Item = Observation> + '_ {
        self.timestamps
            .iter()
            .zip(self.values.iter())
            .map(|(&t, &v)| Observation::new(t, v))
    }

    /// Split into the first `mid` observations and the remainder.
    ///
    /// `mid` is clamped to the series length.
    pub fn split_at(&self, mid: usize) -> (TimeSeries, TimeSeries) {
        let mid = mid.min(self.len());
        let head = TimeSeries {
            timestamps: self.timestamps[..mid].to_vec(),
            values: self.values[..mid].to_vec(),
        };
        let tail = TimeSeries {
            timestamps: self.timestamps[mid..].to_vec(),
            values: self.values[mid..].to_vec(),
        };
        (head, tail)
    }

    /// The last `n` observations (or the whole series if shorter).
    pub fn tail(&self, n: usize) -> TimeSeries {
        self.split_at(self.len().saturating_sub(n)).1
    }

    /// Consume the series, returning `(timestamps, values)`.
    pub fn into_parts(self) -> (Vec<i64>, Vec<f64>) {
        (self.timestamps, self.values)
    }
}

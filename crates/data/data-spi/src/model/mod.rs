//! Data models for time series data.

mod time_series;

pub use time_series::{Observation, TimeSeries};

//! Data Consumer API
//!
//! Configuration types for loading time series from local files.

mod config;

pub use config::{LoadConfig, NonFinitePolicy};

// Re-export SPI types so consumers need a single dependency
pub use data_spi::{DataError, Observation, Result, SeriesSource, TimeSeries};

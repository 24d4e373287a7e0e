//! Error types for forecasting operations

mod forecast_error;

pub use data_spi::ErrorCategory;
pub use forecast_error::{ForecastError, Result};

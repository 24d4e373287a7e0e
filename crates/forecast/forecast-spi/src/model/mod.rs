//! Models for forecasting operations

mod arima_order;
mod decomposition_result;
mod forecast_result;

pub use arima_order::{ArimaOrder, MAX_AR_ORDER, MAX_DIFFERENCING, MAX_MA_ORDER};
pub use decomposition_result::DecompositionResult;
pub use forecast_result::{ForecastResult, TrendForecastResult};

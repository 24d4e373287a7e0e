//! Data models for financial analytics.

mod return_series;
mod risk_metric;

pub use return_series::*;
pub use risk_metric::*;

//! Data Source Core
//!
//! Loaders that turn local CSV and JSON files into validated [`TimeSeries`].
//!
//! ```rust,ignore
//! use data_core::load_series;
//! use data_api::LoadConfig;
//!
//! let prices = load_series("aapl.csv".as_ref(), &LoadConfig::column("Close"))?;
//! ```

mod columns;
pub mod csv_source;
pub mod json_source;
pub mod timestamp;

use std::path::Path;

pub use csv_source::CsvSource;
pub use json_source::JsonSource;

use data_api::{LoadConfig, NonFinitePolicy};
use data_spi::{Observation, Result, SeriesSource, TimeSeries};

/// Load a series from file, picking the format from the extension.
///
/// Unknown extensions are tried as CSV first, then as JSON.
pub fn load_series(path: &Path, config: &LoadConfig) -> Result<TimeSeries> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => CsvSource::new(path, config.clone()).load(),
        "json" => JsonSource::new(path, config.clone()).load(),
        _ => CsvSource::new(path, config.clone())
            .load()
            .or_else(|_| JsonSource::new(path, config.clone()).load()),
    }
}

/// Build the series according to the non-finite policy.
pub(crate) fn build_series(
    observations: Vec<Observation>,
    policy: NonFinitePolicy,
) -> Result<TimeSeries> {
    match policy {
        NonFinitePolicy::Reject => TimeSeries::new(observations),
        NonFinitePolicy::Drop => TimeSeries::new_filtered(observations),
    }
}

/// Parse a numeric cell; empty cells are missing values.
pub(crate) fn parse_value(raw: &str) -> std::result::Result<f64, std::num::ParseFloatError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>()
}

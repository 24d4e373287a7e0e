//! CSV series source.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use data_api::LoadConfig;
use data_spi::{DataError, Observation, Result, SeriesSource, TimeSeries};

use crate::columns;
use crate::timestamp::parse_timestamp;
use crate::{build_series, parse_value};

/// Loads a series from a headed CSV file.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    name: String,
    config: LoadConfig,
}

impl CsvSource {
    /// Create a source for `path`.
    pub fn new(path: &Path, config: LoadConfig) -> Self {
        Self {
            path: path.to_path_buf(),
            name: path.display().to_string(),
            config,
        }
    }
}

impl SeriesSource for CsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<TimeSeries> {
        let file = File::open(&self.path)?;
        read_csv(BufReader::new(file), &self.config)
    }
}

/// Read a series from any CSV reader.
pub fn read_csv<R: Read>(reader: R, config: &LoadConfig) -> Result<TimeSeries> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DataError::ParseError(format!("failed to read headers: {}", e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let ts_col = columns::timestamp_column(&headers, config.timestamp_column.as_deref())?;
    let value_col = columns::value_column(&headers, config.value_column.as_deref(), ts_col)?;

    let mut observations = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| DataError::ParseError(format!("row {}: {}", row + 1, e)))?;

        let raw_value = record.get(value_col).unwrap_or("");
        let value = parse_value(raw_value).map_err(|_| {
            DataError::ParseError(format!("row {}: invalid number '{}'", row + 1, raw_value))
        })?;

        let timestamp = match ts_col {
            Some(col) => parse_timestamp(record.get(col).unwrap_or(""))?,
            None => row as i64,
        };

        observations.push(Observation::new(timestamp, value));
    }

    if observations.is_empty() {
        return Err(DataError::NoData);
    }

    build_series(observations, config.non_finite)
}

//! Column resolution shared by the CSV and JSON loaders.

use data_spi::{DataError, Result};

const TIMESTAMP_NAMES: &[&str] = &["timestamp", "date", "datetime", "time", "year"];
const VALUE_NAMES: &[&str] = &["adj close", "adj_close", "adjclose", "close", "value", "price", "y"];

/// Resolve a column spec (name or zero-based index) against a header row.
pub(crate) fn resolve(headers: &[String], spec: &str) -> Result<usize> {
    if let Some(idx) = headers.iter().position(|h| h == spec) {
        return Ok(idx);
    }
    if let Some(idx) = headers.iter().position(|h| h.eq_ignore_ascii_case(spec)) {
        return Ok(idx);
    }
    match spec.parse::<usize>() {
        Ok(idx) if idx < headers.len() => Ok(idx),
        _ => Err(DataError::ColumnNotFound(spec.to_string())),
    }
}

/// Pick the timestamp column: explicit spec, else a well-known name.
pub(crate) fn timestamp_column(headers: &[String], spec: Option<&str>) -> Result<Option<usize>> {
    match spec {
        Some(spec) => resolve(headers, spec).map(Some),
        None => Ok(find_named(headers, TIMESTAMP_NAMES)),
    }
}

/// Pick the value column: explicit spec, else a price-like name, else the
/// first column that is not the timestamp column.
pub(crate) fn value_column(
    headers: &[String],
    spec: Option<&str>,
    timestamp: Option<usize>,
) -> Result<usize> {
    if let Some(spec) = spec {
        return resolve(headers, spec);
    }
    if let Some(idx) = find_named(headers, VALUE_NAMES) {
        return Ok(idx);
    }
    (0..headers.len())
        .find(|&i| Some(i) != timestamp)
        .ok_or(DataError::NoData)
}

fn find_named(headers: &[String], names: &[&str]) -> Option<usize> {
    names.iter().find_map(|name| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    })
}

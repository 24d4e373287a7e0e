//! JSON series source.
//!
//! Accepted shapes:
//! - `[1.0, 2.0, ...]` (row positions become timestamps)
//! - `{"timestamps": [...], "values": [...]}`
//! - `[{"timestamp": 1, "value": 1.0}, ...]` (column names configurable)
//! - `{"data": [...]}` / `{"values": [...]}` / `{"series": [...]}` with numbers

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use data_api::LoadConfig;
use data_spi::{DataError, Observation, Result, SeriesSource, TimeSeries};
use serde_json::Value;

use crate::build_series;
use crate::timestamp::parse_timestamp;

const VALUE_KEYS: &[&str] = &["value", "close", "adj_close", "price", "y"];
const TIMESTAMP_KEYS: &[&str] = &["timestamp", "date", "time", "year"];
const ARRAY_KEYS: &[&str] = &["data", "values", "series", "y"];

/// Loads a series from a JSON document.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
    name: String,
    config: LoadConfig,
}

impl JsonSource {
    /// Create a source for `path`.
    pub fn new(path: &Path, config: LoadConfig) -> Self {
        Self {
            path: path.to_path_buf(),
            name: path.display().to_string(),
            config,
        }
    }
}

impl SeriesSource for JsonSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<TimeSeries> {
        let file = File::open(&self.path)?;
        read_json(BufReader::new(file), &self.config)
    }
}

/// Read a series from any JSON reader.
pub fn read_json<R: Read>(reader: R, config: &LoadConfig) -> Result<TimeSeries> {
    let json: Value = serde_json::from_reader(reader)
        .map_err(|e| DataError::ParseError(format!("failed to parse JSON: {}", e)))?;
    from_value(&json, config)
}

fn from_value(json: &Value, config: &LoadConfig) -> Result<TimeSeries> {
    match json {
        Value::Array(items) if items.iter().all(|v| v.is_number() || v.is_null()) => {
            let observations = items
                .iter()
                .enumerate()
                .map(|(i, v)| Observation::new(i as i64, number(v)))
                .collect();
            finish(observations, config)
        }
        Value::Array(items) => {
            let observations = items
                .iter()
                .enumerate()
                .map(|(i, item)| record(i, item, config))
                .collect::<Result<Vec<_>>>()?;
            finish(observations, config)
        }
        Value::Object(obj) => {
            if obj.contains_key("timestamps") && obj.contains_key("values") {
                return serde_json::from_value::<TimeSeries>(json.clone())
                    .map_err(|e| DataError::ParseError(e.to_string()));
            }
            for key in ARRAY_KEYS {
                if let Some(inner) = obj.get(*key).filter(|v| v.is_array()) {
                    return from_value(inner, config);
                }
            }
            Err(DataError::ParseError(
                "could not find a series in JSON object".to_string(),
            ))
        }
        _ => Err(DataError::ParseError(
            "expected a JSON array or object".to_string(),
        )),
    }
}

fn record(index: usize, item: &Value, config: &LoadConfig) -> Result<Observation> {
    let obj = item
        .as_object()
        .ok_or_else(|| DataError::ParseError(format!("element {} is not an object", index)))?;

    let value = match config.value_column.as_deref() {
        Some(key) => obj
            .get(key)
            .ok_or_else(|| DataError::ColumnNotFound(key.to_string()))?,
        None => VALUE_KEYS
            .iter()
            .find_map(|k| obj.get(*k))
            .ok_or_else(|| DataError::ParseError(format!("element {} has no value", index)))?,
    };
    if !(value.is_number() || value.is_null()) {
        return Err(DataError::ParseError(format!(
            "element {}: value is not a number",
            index
        )));
    }

    let timestamp = match config.timestamp_column.as_deref() {
        Some(key) => Some(
            obj.get(key)
                .ok_or_else(|| DataError::ColumnNotFound(key.to_string()))?,
        ),
        None => TIMESTAMP_KEYS.iter().find_map(|k| obj.get(*k)),
    };
    let timestamp = match timestamp {
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
            DataError::ParseError(format!("element {}: timestamp is not an integer", index))
        })?,
        Some(Value::String(s)) => parse_timestamp(s)?,
        Some(_) => {
            return Err(DataError::ParseError(format!(
                "element {}: invalid timestamp",
                index
            )))
        }
        None => index as i64,
    };

    Ok(Observation::new(timestamp, number(value)))
}

fn number(value: &Value) -> f64 {
    value.as_f64().unwrap_or(f64::NAN)
}

fn finish(observations: Vec<Observation>, config: &LoadConfig) -> Result<TimeSeries> {
    if observations.is_empty() {
        return Err(DataError::NoData);
    }
    build_series(observations, config.non_finite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_api::NonFinitePolicy;

    fn read(json: &str) -> Result<TimeSeries> {
        read_json(json.as_bytes(), &LoadConfig::default())
    }

    #[test]
    fn test_number_array() {
        let series = read("[3.2, 2.8, 3.5]").unwrap();
        assert_eq!(series.values(), &[3.2, 2.8, 3.5]);
        assert_eq!(series.timestamps(), &[0, 1, 2]);
    }

    #[test]
    fn test_parts_object() {
        let series = read(r#"{"timestamps":[5,6],"values":[1.0,2.0]}"#).unwrap();
        assert_eq!(series.timestamps(), &[5, 6]);
    }

    #[test]
    fn test_parts_object_validated() {
        assert!(read(r#"{"timestamps":[6,5],"values":[1.0,2.0]}"#).is_err());
    }

    #[test]
    fn test_object_records() {
        let json = r#"[{"date":"2024-01-01","close":100},{"date":"2024-01-02","close":101}]"#;
        let series = read(json).unwrap();
        assert_eq!(series.values(), &[100.0, 101.0]);
        assert_eq!(series.timestamps()[0], 1704067200);
    }

    #[test]
    fn test_object_records_custom_keys() {
        let json = r#"[{"t":1,"gdp":3.2},{"t":2,"gdp":2.8}]"#;
        let config = LoadConfig::column("gdp").with_timestamp_column("t");
        let series = read_json(json.as_bytes(), &config).unwrap();
        assert_eq!(series.values(), &[3.2, 2.8]);
        assert_eq!(series.timestamps(), &[1, 2]);
    }

    #[test]
    fn test_nested_data_array() {
        let series = read(r#"{"data":[1,2,3]}"#).unwrap();
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_null_handling() {
        assert!(matches!(
            read("[1.0, null, 2.0]"),
            Err(DataError::NonFiniteValue { index: 1, .. })
        ));
        let config = LoadConfig::default().with_non_finite(NonFinitePolicy::Drop);
        let series = read_json("[1.0, null, 2.0]".as_bytes(), &config).unwrap();
        assert_eq!(series.timestamps(), &[0, 2]);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(read("42"), Err(DataError::ParseError(_))));
        assert!(matches!(read("{\"x\":1}"), Err(DataError::ParseError(_))));
        assert!(matches!(read("not json"), Err(DataError::ParseError(_))));
        assert_eq!(read("[]"), Err(DataError::NoData));
    }
}

//! Series loading configuration types.

use serde::{Deserialize, Serialize};

/// What to do with NaN / infinite values found while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Fail the load with `DataError::NonFiniteValue`.
    #[default]
    Reject,
    /// Drop the offending rows before building the series.
    Drop,
}

/// Configuration for loading a series from a CSV or JSON file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Value column (name or zero-based index). `None` picks a price-like
    /// column (`adj close`, `close`, `value`, ...) or the first non-timestamp column.
    pub value_column: Option<String>,
    /// Timestamp column (name or zero-based index). `None` looks for
    /// `timestamp`, `date` or `time` and otherwise uses the row position.
    pub timestamp_column: Option<String>,
    /// Handling of non-finite values.
    pub non_finite: NonFinitePolicy,
}

impl LoadConfig {
    /// Create a configuration reading the given value column.
    pub fn column(value_column: &str) -> Self {
        Self {
            value_column: Some(value_column.to_string()),
            ..Self::default()
        }
    }

    /// Set the timestamp column.
    pub fn with_timestamp_column(mut self, timestamp_column: &str) -> Self {
        self.timestamp_column = Some(timestamp_column.to_string());
        self
    }

    /// Set the non-finite value policy.
    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }
}

//! Data error types.

use thiserror::Error;

use super::ErrorCategory;

/// Errors raised while building or loading a time series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// Series is shorter than an operation requires
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// NaN or infinite value in the input
    #[error("Non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    /// Timestamps are not strictly increasing
    #[error("Timestamp {current} at index {index} does not follow {previous}")]
    NonIncreasingTimestamp {
        index: usize,
        previous: i64,
        current: i64,
    },

    /// Timestamp and value vectors differ in length
    #[error("Length mismatch: {timestamps} timestamps, {values} values")]
    LengthMismatch { timestamps: usize, values: usize },

    /// Requested column does not exist
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// Failed to parse input
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(String),

    /// Input contained no observations
    #[error("No data returned")]
    NoData,
}

impl DataError {
    /// Coarse category of this error.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::InputValidation
    }
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err.to_string())
    }
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

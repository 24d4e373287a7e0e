//! Forecast error types

use data_spi::{DataError, ErrorCategory};
use thiserror::Error;

/// Errors that can occur during decomposition and forecasting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Series too short for the seasonal period
    #[error("Insufficient periods: period {period} needs at least {required} points, got {actual}")]
    InsufficientPeriods {
        period: usize,
        required: usize,
        actual: usize,
    },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model fitting did not converge
    #[error("Model fit did not converge: {0}")]
    NonConvergence(String),

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    #[error(transparent)]
    Data(#[from] DataError),
}

impl ForecastError {
    /// Coarse category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ForecastError::InsufficientData { .. }
            | ForecastError::InsufficientPeriods { .. } => ErrorCategory::InputValidation,
            ForecastError::InvalidParameter { .. } => ErrorCategory::InvalidConfiguration,
            ForecastError::NonConvergence(_) | ForecastError::NumericalError(_) => {
                ErrorCategory::Convergence
            }
            ForecastError::Data(err) => err.category(),
        }
    }
}

/// Result type alias for forecast operations
pub type Result<T> = std::result::Result<T, ForecastError>;

//! Financial analytics error types.

use data_spi::{DataError, ErrorCategory};
use thiserror::Error;

/// Financial analytics errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinancialError {
    #[error("Insufficient data: required {required}, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Empty input: at least one return is required")]
    EmptyInput,

    #[error("Invalid confidence level {0}: must lie strictly between 0 and 1")]
    InvalidConfidence(f64),

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error(transparent)]
    Data(#[from] DataError),
}

impl FinancialError {
    /// Coarse category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FinancialError::InsufficientData { .. } | FinancialError::EmptyInput => {
                ErrorCategory::InputValidation
            }
            FinancialError::InvalidConfidence(_) | FinancialError::InvalidParameter { .. } => {
                ErrorCategory::InvalidConfiguration
            }
            FinancialError::Data(err) => err.category(),
        }
    }
}

/// Result type alias for financial operations.
pub type Result<T> = std::result::Result<T, FinancialError>;

//! CLI error type.

use std::path::PathBuf;

use data_facade::{DataError, ErrorCategory};
use financial_facade::FinancialError;
use forecast_facade::ForecastError;
use thiserror::Error;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Load { path: PathBuf, source: DataError },

    #[error(transparent)]
    Financial(#[from] FinancialError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error("Invalid config file {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Category of the underlying analytics error, if any.
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            CliError::Load { source, .. } => Some(source.category()),
            CliError::Financial(e) => Some(e.category()),
            CliError::Forecast(e) => Some(e.category()),
            CliError::Config { .. } => Some(ErrorCategory::InvalidConfiguration),
            CliError::Io(_) | CliError::Json(_) => None,
        }
    }

    /// Process exit code: 2 for bad input or configuration, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            Some(ErrorCategory::InputValidation) | Some(ErrorCategory::InvalidConfiguration) => 2,
            Some(ErrorCategory::Convergence) | None => 1,
        }
    }
}

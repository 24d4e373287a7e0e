//! Error module containing error types and result aliases

mod financial_error;

pub use data_spi::ErrorCategory;
pub use financial_error::{FinancialError, Result};

//! Error module containing error types and result aliases

mod category;
mod data_error;

pub use category::ErrorCategory;
pub use data_error::{DataError, Result};

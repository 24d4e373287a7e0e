//! Financial Analytics Facade
//!
//! Unified re-exports for the financial module.
//!
//! This facade provides access to all financial analytics components:
//! - `returns` - Simple returns with zero-price exclusion (ReturnSeries, SimpleReturnBuilder)
//! - `risk` - Historical VaR and annualized Sharpe ratio (StandardRiskCalculator)

// Re-export everything from SPI (traits, errors, types)
pub use financial_spi::*;

// Re-export everything from API (configs)
pub use financial_api::*;

// Re-export everything from Core (implementations)
pub use financial_core::*;

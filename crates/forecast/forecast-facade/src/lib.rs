//! Forecast Facade
//!
//! High-level API for decomposition and forecast evaluation. Re-exports all
//! public types from the forecast stack for convenient usage.

// Re-export everything from SPI (traits, errors, result types)
pub use forecast_spi::*;

// Re-export everything from API (configs and prelude)
pub use forecast_api::*;

// Re-export everything from Core (implementations and modules)
pub use forecast_core::*;

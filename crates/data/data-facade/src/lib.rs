//! Data Facade
//!
//! Unified re-exports for the data module.
//!
//! This facade provides a single entry point for series handling:
//! - `data_spi` - `TimeSeries`, errors and the `SeriesSource` trait
//! - `data_api` - Loading configuration
//! - `data_core` - CSV / JSON loaders
//!
//! # Example
//!
//! ```rust,ignore
//! use data_facade::{load_series, LoadConfig};
//!
//! let prices = load_series("prices.csv".as_ref(), &LoadConfig::default())?;
//! println!("Loaded {} observations", prices.len());
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;

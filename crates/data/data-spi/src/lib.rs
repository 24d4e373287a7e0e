//! Data Service Provider Interface
//!
//! Defines the validated [`TimeSeries`] value type shared by every analytics
//! domain, the [`DataError`] type, and the [`SeriesSource`] contract for
//! anything that can produce a series (files, fixtures, external feeds).

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SeriesSource;
pub use error::{DataError, ErrorCategory, Result};
pub use model::{Observation, TimeSeries};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_are_usable() {
        let series = TimeSeries::from_values(vec![1.0, 2.0]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.first(), Some(Observation::new(0, 1.0)));
    }

    #[test]
    fn test_error_category_reexport() {
        let error = DataError::NoData;
        assert_eq!(error.category(), ErrorCategory::InputValidation);
    }
}

//! Trait contracts for series acquisition.

mod series_source;

pub use series_source::SeriesSource;

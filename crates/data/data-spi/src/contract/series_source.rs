//! Series source trait definition.

use crate::error::Result;
use crate::model::TimeSeries;

/// Anything that can produce a validated [`TimeSeries`].
///
/// Implementations own their I/O; the analytics crates only ever see the
/// resulting series.
pub trait SeriesSource: Send + Sync {
    /// Human readable source name (file path, feed name, ...).
    fn name(&self) -> &str;

    /// Load the series.
    fn load(&self) -> Result<TimeSeries>;
}

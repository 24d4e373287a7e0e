//! Decomposition result model

use serde::{Deserialize, Serialize};

/// Additive decomposition `value = trend + seasonal + residual`.
///
/// All component vectors are aligned index-for-index with the input series.
/// Trend and residual are `None` at the edges where the centered moving
/// average window is incomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    period: usize,
    timestamps: Vec<i64>,
    trend: Vec<Option<f64>>,
    seasonal: Vec<f64>,
    residual: Vec<Option<f64>>,
}

impl DecompositionResult {
    pub fn new(
        period: usize,
        timestamps: Vec<i64>,
        trend: Vec<Option<f64>>,
        seasonal: Vec<f64>,
        residual: Vec<Option<f64>>,
    ) -> Self {
        Self {
            period,
            timestamps,
            trend,
            seasonal,
            residual,
        }
    }

    /// Seasonal period used
    pub fn period(&self) -> usize {
        self.period
    }

    /// Timestamps of the input series
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Trend component
    pub fn trend(&self) -> &[Option<f64>] {
        &self.trend
    }

    /// Seasonal component
    pub fn seasonal(&self) -> &[f64] {
        &self.seasonal
    }

    /// Residual component
    pub fn residual(&self) -> &[Option<f64>] {
        &self.residual
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.seasonal.len()
    }

    /// Whether the decomposition is empty
    pub fn is_empty(&self) -> bool {
        self.seasonal.is_empty()
    }

    /// `trend + seasonal + residual` wherever the trend is defined.
    pub fn reconstructed(&self) -> Vec<Option<f64>> {
        self.trend
            .iter()
            .zip(&self.seasonal)
            .zip(&self.residual)
            .map(|((t, s), r)| match (t, r) {
                (Some(t), Some(r)) => Some(t + s + r),
                _ => None,
            })
            .collect()
    }
}

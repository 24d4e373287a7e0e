//! Risk metric results.

use serde::{Deserialize, Serialize};

/// Kind of risk metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskMetric {
    /// Historical-simulation Value-at-Risk (positive loss magnitude)
    ValueAtRisk,
    /// Annualized Sharpe ratio
    SharpeRatio,
}

/// Configuration a metric was computed with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum MetricParameters {
    /// Nearest-rank historical VaR.
    HistoricalVar {
        /// Confidence level alpha
        confidence: f64,
        /// Zero-based rank of the selected return in ascending order
        rank: usize,
    },
    /// Annualized Sharpe ratio.
    AnnualizedSharpe {
        /// Annual risk-free rate
        annual_risk_free_rate: f64,
        /// Per-period rate compounded from the annual one
        period_risk_free_rate: f64,
        /// Periods per year used for annualization
        periods_per_year: u32,
    },
}

/// A computed risk metric together with the inputs that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetricResult {
    value: f64,
    observations: usize,
    parameters: MetricParameters,
}

impl RiskMetricResult {
    /// Create a result.
    pub fn new(value: f64, observations: usize, parameters: MetricParameters) -> Self {
        Self {
            value,
            observations,
            parameters,
        }
    }

    /// Metric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of returns the metric was computed from.
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Parameters used.
    pub fn parameters(&self) -> &MetricParameters {
        &self.parameters
    }

    /// Which metric this is.
    pub fn metric(&self) -> RiskMetric {
        match self.parameters {
            MetricParameters::HistoricalVar { .. } => RiskMetric::ValueAtRisk,
            MetricParameters::AnnualizedSharpe { .. } => RiskMetric::SharpeRatio,
        }
    }
}

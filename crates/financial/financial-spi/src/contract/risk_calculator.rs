//! Risk calculator trait.

use crate::error::Result;
use crate::model::{ReturnSeries, RiskMetricResult};

/// Risk metrics calculator trait.
pub trait RiskCalculator: Send + Sync {
    /// Historical-simulation Value-at-Risk at confidence `confidence`,
    /// reported as a positive loss magnitude.
    fn historical_var(&self, returns: &ReturnSeries, confidence: f64) -> Result<RiskMetricResult>;

    /// Annualized Sharpe ratio against an annual risk-free rate.
    fn annualized_sharpe(
        &self,
        returns: &ReturnSeries,
        annual_risk_free_rate: f64,
        periods_per_year: u32,
    ) -> Result<RiskMetricResult>;
}

//! Risk metrics implementation.

use financial_api::RiskConfig;
use financial_spi::{
    FinancialError, MetricParameters, Result, ReturnSeries, RiskCalculator, RiskMetricResult,
};
use serde::{Deserialize, Serialize};

/// Standard risk metrics calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRiskCalculator;

impl StandardRiskCalculator {
    /// Create a new risk calculator.
    pub fn new() -> Self {
        Self
    }

    /// Compute VaR and Sharpe with one validated configuration.
    pub fn summarize(&self, returns: &ReturnSeries, config: &RiskConfig) -> Result<RiskSummary> {
        config.validate()?;
        Ok(RiskSummary {
            value_at_risk: self.historical_var(returns, config.confidence)?,
            sharpe_ratio: self.annualized_sharpe(
                returns,
                config.annual_risk_free_rate,
                config.periods_per_year,
            )?,
        })
    }
}

impl RiskCalculator for StandardRiskCalculator {
    fn historical_var(&self, returns: &ReturnSeries, confidence: f64) -> Result<RiskMetricResult> {
        let (value, rank) = nearest_rank_var(returns.values(), confidence)?;
        Ok(RiskMetricResult::new(
            value,
            returns.len(),
            MetricParameters::HistoricalVar { confidence, rank },
        ))
    }

    fn annualized_sharpe(
        &self,
        returns: &ReturnSeries,
        annual_risk_free_rate: f64,
        periods_per_year: u32,
    ) -> Result<RiskMetricResult> {
        let value = annualized_sharpe(returns.values(), annual_risk_free_rate, periods_per_year)?;
        Ok(RiskMetricResult::new(
            value,
            returns.len(),
            MetricParameters::AnnualizedSharpe {
                annual_risk_free_rate,
                period_risk_free_rate: period_rate(annual_risk_free_rate, periods_per_year),
                periods_per_year,
            },
        ))
    }
}

/// VaR and Sharpe ratio of one return series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub value_at_risk: RiskMetricResult,
    pub sharpe_ratio: RiskMetricResult,
}

/// Historical Value-at-Risk using the nearest-rank rule.
///
/// Returns are sorted ascending and the element at
/// `floor((1 - confidence) * n)` (clamped to the last index) is negated, so
/// a loss is reported as a positive number.
pub fn var_historical(returns: &[f64], confidence: f64) -> Result<f64> {
    nearest_rank_var(returns, confidence).map(|(value, _)| value)
}

fn nearest_rank_var(returns: &[f64], confidence: f64) -> Result<(f64, usize)> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(FinancialError::InvalidConfidence(confidence));
    }
    if returns.is_empty() {
        return Err(FinancialError::EmptyInput);
    }
    let mut sorted = returns.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let rank = (((1.0 - confidence) * sorted.len() as f64).floor() as usize).min(sorted.len() - 1);
    Ok((-sorted[rank], rank))
}

/// Annualized Sharpe ratio.
///
/// The annual risk-free rate is de-compounded to a per-period rate
/// `(1 + rf)^(1 / periods_per_year) - 1` and subtracted from every return.
/// Mean excess return scales by `periods_per_year`, its sample standard
/// deviation by `sqrt(periods_per_year)`. Identical excess returns (which
/// includes a single return) and a zero deviation yield `0.0`.
pub fn annualized_sharpe(
    returns: &[f64],
    annual_risk_free_rate: f64,
    periods_per_year: u32,
) -> Result<f64> {
    if periods_per_year == 0 {
        return Err(FinancialError::InvalidParameter {
            name: "periods_per_year".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if !annual_risk_free_rate.is_finite() || annual_risk_free_rate <= -1.0 {
        return Err(FinancialError::InvalidParameter {
            name: "annual_risk_free_rate".to_string(),
            reason: format!(
                "must be finite and greater than -1, got {}",
                annual_risk_free_rate
            ),
        });
    }
    if returns.is_empty() {
        return Err(FinancialError::EmptyInput);
    }

    let rf = period_rate(annual_risk_free_rate, periods_per_year);
    let excess: Vec<f64> = returns.iter().map(|r| r - rf).collect();
    if excess.iter().all(|&e| e == excess[0]) {
        return Ok(0.0);
    }

    let n = excess.len() as f64;
    let mean = excess.iter().sum::<f64>() / n;
    let variance = excess.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let periods = f64::from(periods_per_year);
    let annual_std = variance.sqrt() * periods.sqrt();
    if annual_std == 0.0 {
        return Ok(0.0);
    }
    Ok(mean * periods / annual_std)
}

fn period_rate(annual_risk_free_rate: f64, periods_per_year: u32) -> f64 {
    (1.0 + annual_risk_free_rate).powf(1.0 / f64::from(periods_per_year)) - 1.0
}

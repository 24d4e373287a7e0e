//! Financial configuration types.

use financial_spi::{FinancialError, Result};
use serde::{Deserialize, Serialize};

/// Risk calculation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Confidence level for VaR, strictly between 0 and 1.
    pub confidence: f64,
    /// Annual risk-free rate for the Sharpe ratio.
    pub annual_risk_free_rate: f64,
    /// Return periods per year (252 daily, 52 weekly, 12 monthly).
    pub periods_per_year: u32,
}

impl RiskConfig {
    pub fn new(confidence: f64, annual_risk_free_rate: f64, periods_per_year: u32) -> Self {
        Self {
            confidence,
            annual_risk_free_rate,
            periods_per_year,
        }
    }

    pub fn daily() -> Self {
        Self {
            periods_per_year: 252,
            ..Self::default()
        }
    }

    pub fn weekly() -> Self {
        Self {
            periods_per_year: 52,
            ..Self::default()
        }
    }

    pub fn monthly() -> Self {
        Self {
            periods_per_year: 12,
            ..Self::default()
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_risk_free_rate(mut self, annual_risk_free_rate: f64) -> Self {
        self.annual_risk_free_rate = annual_risk_free_rate;
        self
    }

    /// Check every field before any metric is computed.
    pub fn validate(&self) -> Result<()> {
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(FinancialError::InvalidConfidence(self.confidence));
        }
        if !self.annual_risk_free_rate.is_finite() || self.annual_risk_free_rate <= -1.0 {
            return Err(FinancialError::InvalidParameter {
                name: "annual_risk_free_rate".to_string(),
                reason: format!(
                    "must be finite and greater than -1, got {}",
                    self.annual_risk_free_rate
                ),
            });
        }
        if self.periods_per_year == 0 {
            return Err(FinancialError::InvalidParameter {
                name: "periods_per_year".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            confidence: 0.95,
            annual_risk_free_rate: 0.02,
            periods_per_year: 252,
        }
    }
}

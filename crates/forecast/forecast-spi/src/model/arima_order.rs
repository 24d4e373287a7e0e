//! ARIMA model order

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Largest supported autoregressive order
pub const MAX_AR_ORDER: usize = 10;
/// Largest supported differencing order
pub const MAX_DIFFERENCING: usize = 2;
/// Largest supported moving-average order
pub const MAX_MA_ORDER: usize = 10;

/// Caller-supplied `(p, d, q)` order of an ARIMA model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArimaOrder {
    /// Autoregressive order
    pub p: usize,
    /// Differencing order
    pub d: usize,
    /// Moving-average order
    pub q: usize,
}

impl ArimaOrder {
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Check the orders against the supported limits.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("p", self.p, MAX_AR_ORDER),
            ("d", self.d, MAX_DIFFERENCING),
            ("q", self.q, MAX_MA_ORDER),
        ];
        for (name, value, max) in limits {
            if value > max {
                return Err(ForecastError::InvalidParameter {
                    name: name.to_string(),
                    reason: format!("must be at most {}, got {}", max, value),
                });
            }
        }
        Ok(())
    }

    /// `p + d + q`; a training split must be strictly longer than this.
    pub fn total(&self) -> usize {
        self.p + self.d + self.q
    }
}

impl Default for ArimaOrder {
    fn default() -> Self {
        Self::new(2, 1, 2)
    }
}

impl fmt::Display for ArimaOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARIMA({},{},{})", self.p, self.d, self.q)
    }
}

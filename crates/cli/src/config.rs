//! Combined configuration file for the CLI.
//!
//! Every section is optional; missing fields keep their library defaults.
//!
//! ```json
//! {
//!   "load": { "value_column": "Close", "non_finite": "drop" },
//!   "risk": { "confidence": 0.99, "periods_per_year": 52 },
//!   "decomposition": { "period": 4 },
//!   "forecast": { "holdout": 8, "order": { "p": 1, "d": 1, "q": 1 } }
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use data_facade::LoadConfig;
use financial_facade::RiskConfig;
use forecast_facade::{DecompositionConfig, ForecastConfig};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub load: LoadConfig,
    pub risk: RiskConfig,
    pub decomposition: DecompositionConfig,
    pub forecast: ForecastConfig,
}

impl AppConfig {
    /// Read a config file, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let file = File::open(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

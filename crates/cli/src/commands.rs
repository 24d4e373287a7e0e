//! Subcommand implementations.
//!
//! Each command loads its input, runs one analysis and hands back a
//! serializable result; `main` decides where the JSON goes.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use data_facade::{load_series, LoadConfig, NonFinitePolicy, TimeSeries};
use financial_facade::{
    simple_returns, ReturnSeries, RiskCalculator, RiskMetricResult, RiskSummary,
    StandardRiskCalculator,
};
use forecast_facade::{
    evaluate_trend, AdditiveDecomposer, ArimaEvaluation, ArimaEvaluator, Decomposer,
    DecompositionResult, TrendForecastResult,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Load a series, attaching the path to any loader error.
pub fn load(path: &Path, config: &LoadConfig) -> CliResult<TimeSeries> {
    let series = load_series(path, config).map_err(|source| CliError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} observations from {}", series.len(), path.display());
    if config.non_finite == NonFinitePolicy::Drop {
        debug!("Non-finite rows are dropped for {}", path.display());
    }
    Ok(series)
}

fn returns_of(path: &Path, config: &LoadConfig) -> CliResult<ReturnSeries> {
    let prices = load(path, config)?;
    let returns = simple_returns(&prices)?;
    if !returns.excluded().is_empty() {
        warn!(
            "{}: excluded {} return(s) following a zero price at timestamps {:?}",
            path.display(),
            returns.excluded().len(),
            returns.excluded()
        );
    }
    Ok(returns)
}

pub fn run_returns(input: &Path, config: &AppConfig) -> CliResult<ReturnSeries> {
    let returns = returns_of(input, &config.load)?;
    info!("Computed {} simple returns", returns.len());
    Ok(returns)
}

pub fn run_var(input: &Path, config: &AppConfig) -> CliResult<RiskMetricResult> {
    config.risk.validate()?;
    let returns = returns_of(input, &config.load)?;
    let result =
        StandardRiskCalculator::new().historical_var(&returns, config.risk.confidence)?;
    info!(
        "VaR at {:.1}% confidence: {:.6}",
        config.risk.confidence * 100.0,
        result.value()
    );
    Ok(result)
}

pub fn run_sharpe(input: &Path, config: &AppConfig) -> CliResult<RiskMetricResult> {
    config.risk.validate()?;
    let returns = returns_of(input, &config.load)?;
    let result = StandardRiskCalculator::new().annualized_sharpe(
        &returns,
        config.risk.annual_risk_free_rate,
        config.risk.periods_per_year,
    )?;
    info!("Annualized Sharpe ratio: {:.6}", result.value());
    Ok(result)
}

pub fn run_decompose(input: &Path, config: &AppConfig) -> CliResult<DecompositionResult> {
    let series = load(input, &config.load)?;
    let period = config.decomposition.period;
    debug!("Decomposing with period {}", period);
    let result = AdditiveDecomposer::new().decompose(&series, period)?;
    info!("Decomposed {} observations (period {})", result.len(), period);
    Ok(result)
}

pub fn run_forecast(input: &Path, config: &AppConfig) -> CliResult<ArimaEvaluation> {
    config.forecast.validate()?;
    let series = load(input, &config.load)?;
    let order = config.forecast.order;
    info!(
        "Fitting {} on {} observations, holding out {}",
        order,
        series.len().saturating_sub(config.forecast.holdout),
        config.forecast.holdout
    );

    let evaluation = ArimaEvaluator::from_config(&config.forecast)
        .evaluate_with_model(&series, config.forecast.holdout)?;
    let model = &evaluation.model;
    debug!(
        "ar={:?} ma={:?} mean={:?} sigma2={} iterations={}",
        model.ar_coefficients(),
        model.ma_coefficients(),
        model.mean(),
        model.sigma2(),
        model.iterations()
    );
    info!(
        "{} hold-out MSE: {:.6}",
        order,
        evaluation.forecast.mse()
    );
    Ok(evaluation)
}

pub fn run_trend(input: &Path, config: &AppConfig) -> CliResult<TrendForecastResult> {
    let series = load(input, &config.load)?;
    let result = evaluate_trend(&series, config.forecast.holdout)?;
    debug!(
        "slope={} intercept={}",
        result.slope(),
        result.intercept()
    );
    info!(
        "Linear trend hold-out MSE: {:.6}, R^2: {:.4}",
        result.forecast().mse(),
        result.r_squared()
    );
    Ok(result)
}

/// Risk summary of one input file in a report.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RiskSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// VaR and Sharpe for every input, computed in parallel.
///
/// A file that fails to load or evaluate is reported with its error; the
/// other files are unaffected.
pub fn run_report(inputs: &[PathBuf], config: &AppConfig) -> CliResult<Vec<FileReport>> {
    config.risk.validate()?;
    info!("Building risk report for {} file(s)", inputs.len());

    let calculator = StandardRiskCalculator::new();
    let reports: Vec<FileReport> = inputs
        .par_iter()
        .map(|input| {
            let outcome = returns_of(input, &config.load)
                .and_then(|returns| {
                    calculator
                        .summarize(&returns, &config.risk)
                        .map_err(CliError::from)
                });
            match outcome {
                Ok(summary) => FileReport {
                    input: input.clone(),
                    summary: Some(summary),
                    error: None,
                },
                Err(e) => {
                    warn!("{}: {}", input.display(), e);
                    FileReport {
                        input: input.clone(),
                        summary: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    info!(
        "Report complete: {} succeeded, {} failed",
        reports.len() - failed,
        failed
    );
    Ok(reports)
}

/// Write `value` as pretty JSON to `output`, or to stdout.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)?;
            writer.flush()?;
            info!("Results written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, value)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_facade::{ArimaOrder, ForecastError};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn csv_file(values: &[f64]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "timestamp,value").unwrap();
        for (i, v) in values.iter().enumerate() {
            writeln!(file, "{},{}", i, v).unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn sample_prices() -> Vec<f64> {
        vec![100.0, 102.0, 101.0, 105.0, 103.0]
    }

    fn sample_seasonal(cycles: usize) -> Vec<f64> {
        let pattern = [3.0, -1.0, -2.0, 0.0];
        (0..cycles * 4)
            .map(|i| 50.0 + 0.5 * i as f64 + pattern[i % 4])
            .collect()
    }

    #[test]
    fn test_returns_records_exclusions() {
        let file = csv_file(&[100.0, 0.0, 50.0, 55.0]);
        let returns = run_returns(file.path(), &AppConfig::default()).unwrap();
        assert_eq!(returns.len(), 2);
        assert_eq!(returns.excluded(), &[2]);
        assert!((returns.values()[0] + 1.0).abs() < 1e-12);
        assert!((returns.values()[1] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_var_matches_nearest_rank() {
        let file = csv_file(&sample_prices());
        let result = run_var(file.path(), &AppConfig::default()).unwrap();
        assert!((result.value() - 0.019047619047619).abs() < 1e-10);
        assert_eq!(result.observations(), 4);
    }

    #[test]
    fn test_var_rejects_bad_confidence() {
        let file = csv_file(&sample_prices());
        let mut config = AppConfig::default();
        config.risk.confidence = 1.0;
        let err = run_var(file.path(), &config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_sharpe_flat_prices_is_zero() {
        let file = csv_file(&[100.0, 100.0, 100.0, 100.0]);
        let result = run_sharpe(file.path(), &AppConfig::default()).unwrap();
        assert_eq!(result.value(), 0.0);
    }

    #[test]
    fn test_decompose_uses_configured_period() {
        let file = csv_file(&sample_seasonal(4));
        let mut config = AppConfig::default();
        config.decomposition.period = 4;
        let result = run_decompose(file.path(), &config).unwrap();
        assert_eq!(result.period(), 4);
        assert_eq!(result.len(), 16);
        assert!(result.trend()[0].is_none());
        assert!(result.trend()[2].is_some());
    }

    #[test]
    fn test_decompose_too_short() {
        let file = csv_file(&sample_seasonal(1));
        let err = run_decompose(file.path(), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Forecast(_)));
    }

    #[test]
    fn test_forecast_constant_series() {
        let file = csv_file(&[5.0; 12]);
        let mut config = AppConfig::default();
        config.forecast.order = ArimaOrder::new(1, 1, 0);
        config.forecast.holdout = 3;
        let evaluation = run_forecast(file.path(), &config).unwrap();
        assert_eq!(evaluation.forecast.horizon(), 3);
        assert!(evaluation.forecast.mse().abs() < 1e-12);
    }

    #[test]
    fn test_forecast_invalid_holdout() {
        let file = csv_file(&[1.0, 2.0, 3.0]);
        let mut config = AppConfig::default();
        config.forecast.holdout = 3;
        let err = run_forecast(file.path(), &config).unwrap_err();
        assert!(matches!(
            err,
            CliError::Forecast(ForecastError::InsufficientData {
                required: 6,
                actual: 0
            })
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_trend_on_line() {
        let values: Vec<f64> = (0..10).map(|i| 2.0 + 3.0 * i as f64).collect();
        let file = csv_file(&values);
        let result = run_trend(file.path(), &AppConfig::default()).unwrap();
        assert!((result.slope() - 3.0).abs() < 1e-10);
        assert!((result.intercept() - 2.0).abs() < 1e-10);
        assert!(result.forecast().mse() < 1e-12);
    }

    #[test]
    fn test_report_keeps_going_after_failure() {
        let good = csv_file(&sample_prices());
        let bad = csv_file(&[100.0]);
        let inputs = vec![
            good.path().to_path_buf(),
            bad.path().to_path_buf(),
            PathBuf::from("/nonexistent/prices.csv"),
        ];

        let reports = run_report(&inputs, &AppConfig::default()).unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].input, inputs[0]);
        assert!(reports[0].summary.is_some());
        assert!(reports[1].error.as_deref().unwrap().contains("Insufficient data"));
        assert!(reports[2].error.is_some());
    }

    #[test]
    fn test_write_json_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        write_json(&vec![1.0, 2.5], Some(path.as_path())).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<f64> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![1.0, 2.5]);
        assert!(text.ends_with('\n'));
    }
}

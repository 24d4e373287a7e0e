//! # rustful-cli
//!
//! Command-line interface for risk metrics and forecast evaluation.
//!
//! Logs go to stderr (filter with `RUST_LOG`, default `rustful=info`);
//! results are printed as JSON to stdout or written to `--output`.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use data_facade::{LoadConfig, NonFinitePolicy};
use forecast_facade::ArimaOrder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::error::CliResult;

#[derive(Parser)]
#[command(name = "rustful")]
#[command(version, about = "Risk metrics and time series forecast evaluation", long_about = None)]
struct Cli {
    /// JSON config file with `load`, `risk`, `decomposition` and `forecast` sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Options for reading the input file.
#[derive(Args, Debug, Default)]
struct LoadArgs {
    /// Column name or index for the values
    #[arg(short, long)]
    column: Option<String>,

    /// Column name or index for the timestamps
    #[arg(long)]
    timestamp_column: Option<String>,

    /// Drop NaN / infinite rows instead of failing
    #[arg(long)]
    drop_non_finite: bool,
}

impl LoadArgs {
    fn apply(&self, config: &mut LoadConfig) {
        if let Some(column) = &self.column {
            config.value_column = Some(column.clone());
        }
        if let Some(column) = &self.timestamp_column {
            config.timestamp_column = Some(column.clone());
        }
        if self.drop_non_finite {
            config.non_finite = NonFinitePolicy::Drop;
        }
    }
}

/// Sharpe ratio options shared by `sharpe` and `report`.
#[derive(Args, Debug, Default)]
struct SharpeArgs {
    /// Annual risk-free rate
    #[arg(long)]
    risk_free_rate: Option<f64>,

    /// Return periods per year (252 daily, 52 weekly, 12 monthly)
    #[arg(long)]
    periods_per_year: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple returns of a price series
    Returns {
        /// Input file with prices (CSV or JSON)
        input: PathBuf,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Historical Value-at-Risk of a price series' returns
    Var {
        /// Input file with prices (CSV or JSON)
        input: PathBuf,

        /// Confidence level, strictly between 0 and 1
        #[arg(long)]
        confidence: Option<f64>,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Annualized Sharpe ratio of a price series' returns
    Sharpe {
        /// Input file with prices (CSV or JSON)
        input: PathBuf,

        #[command(flatten)]
        sharpe: SharpeArgs,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Additive decomposition into trend, seasonal and residual
    Decompose {
        /// Input file (CSV or JSON)
        input: PathBuf,

        /// Seasonal period
        #[arg(short, long)]
        period: Option<usize>,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// ARIMA hold-out evaluation
    Forecast {
        /// Input file (CSV or JSON)
        input: PathBuf,

        /// Number of trailing observations to hold out
        #[arg(long)]
        holdout: Option<usize>,

        /// Model order as p,d,q
        #[arg(long, value_parser = parse_order)]
        order: Option<ArimaOrder>,

        /// Optimizer iteration limit
        #[arg(long)]
        max_iterations: Option<usize>,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Linear trend hold-out evaluation
    Trend {
        /// Input file (CSV or JSON)
        input: PathBuf,

        /// Number of trailing observations to hold out
        #[arg(long)]
        holdout: Option<usize>,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// VaR and Sharpe ratio for several price files, computed in parallel
    Report {
        /// Input files with prices (CSV or JSON)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Confidence level, strictly between 0 and 1
        #[arg(long)]
        confidence: Option<f64>,

        #[command(flatten)]
        sharpe: SharpeArgs,

        #[command(flatten)]
        load: LoadArgs,
    },
}

/// Parse an ARIMA order written as `p,d,q`.
fn parse_order(raw: &str) -> Result<ArimaOrder, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected p,d,q, got '{}'", raw));
    }
    let mut orders = [0usize; 3];
    for (slot, part) in orders.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("invalid order component '{}'", part))?;
    }
    Ok(ArimaOrder::new(orders[0], orders[1], orders[2]))
}

fn apply_sharpe(args: &SharpeArgs, config: &mut AppConfig) {
    if let Some(rate) = args.risk_free_rate {
        config.risk.annual_risk_free_rate = rate;
    }
    if let Some(periods) = args.periods_per_year {
        config.risk.periods_per_year = periods;
    }
}

fn run(command: &Commands, mut config: AppConfig, output: Option<&Path>) -> CliResult<()> {
    match command {
        Commands::Returns { input, load } => {
            load.apply(&mut config.load);
            let returns = commands::run_returns(input, &config)?;
            commands::write_json(&returns, output)
        }
        Commands::Var {
            input,
            confidence,
            load,
        } => {
            load.apply(&mut config.load);
            if let Some(confidence) = confidence {
                config.risk.confidence = *confidence;
            }
            let result = commands::run_var(input, &config)?;
            commands::write_json(&result, output)
        }
        Commands::Sharpe {
            input,
            sharpe,
            load,
        } => {
            load.apply(&mut config.load);
            apply_sharpe(sharpe, &mut config);
            let result = commands::run_sharpe(input, &config)?;
            commands::write_json(&result, output)
        }
        Commands::Decompose {
            input,
            period,
            load,
        } => {
            load.apply(&mut config.load);
            if let Some(period) = period {
                config.decomposition.period = *period;
            }
            let result = commands::run_decompose(input, &config)?;
            commands::write_json(&result, output)
        }
        Commands::Forecast {
            input,
            holdout,
            order,
            max_iterations,
            load,
        } => {
            load.apply(&mut config.load);
            if let Some(holdout) = holdout {
                config.forecast.holdout = *holdout;
            }
            if let Some(order) = order {
                config.forecast.order = *order;
            }
            if let Some(max_iterations) = max_iterations {
                config.forecast.fit.max_iterations = *max_iterations;
            }
            let evaluation = commands::run_forecast(input, &config)?;
            commands::write_json(&evaluation, output)
        }
        Commands::Trend {
            input,
            holdout,
            load,
        } => {
            load.apply(&mut config.load);
            if let Some(holdout) = holdout {
                config.forecast.holdout = *holdout;
            }
            let result = commands::run_trend(input, &config)?;
            commands::write_json(&result, output)
        }
        Commands::Report {
            inputs,
            confidence,
            sharpe,
            load,
        } => {
            load.apply(&mut config.load);
            if let Some(confidence) = confidence {
                config.risk.confidence = *confidence;
            }
            apply_sharpe(sharpe, &mut config);
            let reports = commands::run_report(inputs, &config)?;
            commands::write_json(&reports, output)
        }
    }
}

fn main() -> ExitCode {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rustful=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = AppConfig::load(cli.config.as_deref())
        .and_then(|config| run(&cli.command, config, cli.output.as_deref()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order() {
        assert_eq!(parse_order("1,1,0").unwrap(), ArimaOrder::new(1, 1, 0));
        assert_eq!(parse_order(" 2, 0 ,3").unwrap(), ArimaOrder::new(2, 0, 3));
        assert!(parse_order("1,1").is_err());
        assert!(parse_order("a,1,1").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "rustful",
            "forecast",
            "series.csv",
            "--holdout",
            "6",
            "--order",
            "1,0,1",
            "--column",
            "Close",
        ]);
        let Commands::Forecast {
            holdout,
            order,
            load,
            ..
        } = &cli.command
        else {
            panic!("expected forecast command");
        };
        assert_eq!(*holdout, Some(6));
        assert_eq!(*order, Some(ArimaOrder::new(1, 0, 1)));

        let mut config = AppConfig::default();
        load.apply(&mut config.load);
        assert_eq!(config.load.value_column.as_deref(), Some("Close"));
        assert_eq!(config.load.non_finite, NonFinitePolicy::Reject);
    }

    #[test]
    fn test_report_requires_inputs() {
        assert!(Cli::try_parse_from(["rustful", "report"]).is_err());
        let cli = Cli::try_parse_from(["rustful", "report", "a.csv", "b.json", "-o", "out.json"])
            .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert!(matches!(cli.command, Commands::Report { ref inputs, .. } if inputs.len() == 2));
    }
}

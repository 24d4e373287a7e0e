//! Risk metrics for a short price series
//!
//! Run with: cargo run --example risk_report -p financial-facade

use data_facade::TimeSeries;
use financial_facade::{simple_returns, RiskConfig, StandardRiskCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Risk Report ===\n");

    let prices = TimeSeries::from_values(vec![
        100.0, 101.0, 100.5, 102.5, 101.5, 103.0, 103.8, 101.7, 104.2, 103.4, 104.6,
    ])?;

    let returns = simple_returns(&prices)?;
    println!("Returns: {:?}\n", returns.values());

    let config = RiskConfig::daily();
    let summary = StandardRiskCalculator::new().summarize(&returns, &config)?;

    println!(
        "1. Value at Risk ({:.0}% confidence): {:.4}",
        config.confidence * 100.0,
        summary.value_at_risk.value()
    );
    println!(
        "2. Annualized Sharpe Ratio (rf {:.2}%): {:.4}",
        config.annual_risk_free_rate * 100.0,
        summary.sharpe_ratio.value()
    );

    println!("\n=== Report Complete ===");
    Ok(())
}

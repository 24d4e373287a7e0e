//! Decomposition and ARIMA hold-out evaluation on a short monthly series
//!
//! Run with: cargo run --example arima_holdout -p forecast-facade

use data_facade::TimeSeries;
use forecast_facade::{decompose_additive, ArimaEvaluator, ArimaOrder, ForecastConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== ARIMA Hold-out Example ===\n");

    let values: Vec<f64> = (0..48)
        .map(|i| {
            let t = i as f64;
            100.0 + 0.8 * t + 6.0 * (t * std::f64::consts::PI / 6.0).sin() + ((i * 7) % 5) as f64
        })
        .collect();
    let series = TimeSeries::from_values(values)?;

    // 1. Additive decomposition
    let decomposition = decompose_additive(&series, 12)?;
    println!("1. Seasonal indices (period 12):");
    for (month, s) in decomposition.seasonal()[..12].iter().enumerate() {
        println!("   {:>2}: {:+.3}", month + 1, s);
    }

    // 2. ARIMA evaluation
    let config = ForecastConfig::new(6, ArimaOrder::new(1, 1, 1));
    let evaluation = ArimaEvaluator::from_config(&config).evaluate_with_model(&series, config.holdout)?;
    let model = &evaluation.model;
    println!("\n2. {} fit", model.order());
    println!("   AR: {:?}", model.ar_coefficients());
    println!("   MA: {:?}", model.ma_coefficients());
    println!("   sigma2: {:.4}", model.sigma2());
    if let (Some(aic), Some(bic)) = (model.aic(), model.bic()) {
        println!("   AIC: {:.2}  BIC: {:.2}", aic, bic);
    }

    println!("\n3. Hold-out forecasts:");
    let forecast = &evaluation.forecast;
    for ((t, f), a) in forecast
        .timestamps()
        .iter()
        .zip(forecast.forecasts())
        .zip(forecast.actuals())
    {
        println!("   t={:>2}  forecast {:>8.3}  actual {:>8.3}", t, f, a);
    }
    println!("   MSE: {:.4}  RMSE: {:.4}", forecast.mse(), forecast.rmse());

    println!("\n=== Example Complete ===");
    Ok(())
}

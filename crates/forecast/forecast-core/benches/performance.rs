//! Performance benchmarks for forecast-core

use std::time::Instant;

use data_spi::TimeSeries;
use forecast_core::{decompose_additive, evaluate_arima, Arima, ArimaOrder};

fn generate_data(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            100.0 + t * 0.5 + 10.0 * (t * 0.5236).sin() + ((i * 7919) % 97) as f64 / 97.0
        })
        .collect()
}

fn bench<F>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut(),
{
    // Warmup
    for _ in 0..3 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations;

    println!(
        "{:30} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
        name, elapsed, per_iter, iterations
    );
}

fn main() {
    println!("=== forecast-core Performance Benchmarks ===\n");

    let data_1k = generate_data(1_000);
    let series_1k = TimeSeries::from_values(data_1k.clone()).expect("finite data");
    let series_10k = TimeSeries::from_values(generate_data(10_000)).expect("finite data");

    println!("--- Additive decomposition ---");
    bench("decompose period 12 (1K)", 1000, || {
        let _ = decompose_additive(&series_1k, 12);
    });
    bench("decompose period 12 (10K)", 100, || {
        let _ = decompose_additive(&series_10k, 12);
    });

    println!("\n--- ARIMA fit (1K points) ---");
    for order in [
        ArimaOrder::new(1, 1, 0),
        ArimaOrder::new(0, 1, 1),
        ArimaOrder::new(2, 1, 2),
    ] {
        let model = Arima::new(order).expect("valid order");
        bench(&format!("fit {}", order), 5, || {
            let _ = model.fit(&data_1k);
        });
    }

    println!("\n--- ARIMA hold-out evaluation ---");
    bench("evaluate ARIMA(1,1,1) holdout 12", 5, || {
        let _ = evaluate_arima(&series_1k, 12, ArimaOrder::new(1, 1, 1));
    });

    println!("\n=== Benchmarks Complete ===");
}

//! Trait contracts for decomposition and forecast evaluation

mod decomposer;
mod forecast_evaluator;

pub use decomposer::Decomposer;
pub use forecast_evaluator::ForecastEvaluator;

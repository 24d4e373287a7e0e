//! Trait contracts for financial analytics.

mod return_builder;
mod risk_calculator;

pub use return_builder::*;
pub use risk_calculator::*;

pub mod error;
pub mod validation;
pub mod registry;
pub mod engine;

pub mod trend;
pub mod momentum;
pub mod volatility;
pub mod volume;
pub mod ichimoku;
pub mod patterns;
pub mod structure;

pub use error::IndicatorError;
pub use validation::*;
pub use registry::*;
pub use engine::IndicatorEngine;

use crate::models::indicators::Candle;

pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

pub fn highs(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.high).collect()
}

pub fn lows(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.low).collect()
}

pub fn volumes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.volume).collect()
}

//! Realized (historical) volatility and volatility regime

use crate::common::math;
use crate::indicators::closes;
use crate::models::indicators::{Candle, HistoricalVolatility, VolatilityRegime};

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
pub const HV_PERIOD: usize = 20;
pub const SHORT_TERM_PERIOD: usize = 10;
pub const LONG_TERM_PERIOD: usize = 50;

pub const REGIME_INCREASING_RATIO: f64 = 1.2;
pub const REGIME_DECREASING_RATIO: f64 = 0.8;
/// Annualized volatility below this is treated as zero
const MIN_VOLATILITY: f64 = 1e-9;

/// Close-to-close log returns
pub fn log_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .map(|pair| (pair[1] / pair[0]).ln())
        .collect()
}

fn annualized(returns: &[f64], period: usize) -> Option<f64> {
    if returns.len() < period {
        return None;
    }
    let std = math::sample_std(&returns[returns.len() - period..])?;
    math::finite(std * TRADING_DAYS_PER_YEAR.sqrt())
}

/// Short vs long realized volatility
pub fn volatility_regime(short_term: f64, long_term: f64) -> VolatilityRegime {
    if long_term < MIN_VOLATILITY {
        return VolatilityRegime::Stable;
    }
    let ratio = short_term / long_term;
    if ratio > REGIME_INCREASING_RATIO {
        VolatilityRegime::Increasing
    } else if ratio < REGIME_DECREASING_RATIO {
        VolatilityRegime::Decreasing
    } else {
        VolatilityRegime::Stable
    }
}

/// Annualized volatility of log returns; needs `LONG_TERM_PERIOD + 1` bars
pub fn calculate_historical_volatility(candles: &[Candle]) -> Option<HistoricalVolatility> {
    let returns = log_returns(&closes(candles));
    let short_term = annualized(&returns, SHORT_TERM_PERIOD)?;
    let hv = annualized(&returns, HV_PERIOD)?;
    let long_term = annualized(&returns, LONG_TERM_PERIOD)?;

    Some(HistoricalVolatility {
        annualized: hv,
        short_term,
        long_term,
        regime: volatility_regime(short_term, long_term),
    })
}

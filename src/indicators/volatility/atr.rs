//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::indicators::{AtrIndicator, Candle};

/// ATR above this share of price (in percent) marks high volatility
pub const HIGH_VOLATILITY_PCT: f64 = 3.0;

/// True range of every bar after the first
pub fn true_ranges(candles: &[Candle]) -> Vec<f64> {
    candles
        .windows(2)
        .map(|pair| math::true_range(pair[1].high, pair[1].low, pair[0].close))
        .collect()
}

/// Latest Wilder-smoothed ATR value
pub fn atr_value(candles: &[Candle], period: usize) -> Option<f64> {
    math::finite(*math::wilder_series(&true_ranges(candles), period).last()?)
}

/// Calculate ATR (Average True Range)
///
/// ATR measures market volatility by Wilder-smoothing the true range over a period
pub fn calculate_atr(candles: &[Candle], period: u32) -> Option<AtrIndicator> {
    let value = atr_value(candles, period as usize)?;
    let close = candles.last()?.close;
    let percent = if close > 0.0 { value / close * 100.0 } else { 0.0 };

    Some(AtrIndicator {
        value,
        period,
        percent,
        high_volatility: percent > HIGH_VOLATILITY_PCT,
    })
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(candles: &[Candle]) -> Option<AtrIndicator> {
    calculate_atr(candles, 14)
}

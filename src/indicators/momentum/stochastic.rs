//! Stochastic oscillator and Stochastic RSI

use crate::common::math;
use crate::indicators::closes;
use crate::indicators::momentum::rsi::rsi_series;
use crate::models::indicators::{Candle, StochasticIndicator, Zone};

pub const STOCH_OVERSOLD: f64 = 20.0;
pub const STOCH_OVERBOUGHT: f64 = 80.0;

fn position_in_range(value: f64, low: f64, high: f64) -> f64 {
    let range = high - low;
    if range > 0.0 {
        100.0 * (value - low) / range
    } else {
        50.0
    }
}

/// Smooth raw %K into %K and %D and classify the last reading
fn smooth(raw_k: &[f64], k_smooth: usize, d_smooth: usize) -> Option<StochasticIndicator> {
    let k_series = math::sma_series(raw_k, k_smooth);
    let d_series = math::sma_series(&k_series, d_smooth);
    let k = math::finite(*k_series.last()?)?;
    let d = math::finite(*d_series.last()?)?;
    let zone = Zone::classify(k, STOCH_OVERSOLD, STOCH_OVERBOUGHT);

    Some(StochasticIndicator {
        k,
        d,
        zone,
        signal: zone.signal(),
    })
}

/// Calculate the slow Stochastic oscillator
///
/// Raw %K = 100 * (close - lowest low) / (highest high - lowest low);
/// %K is its `k_smooth` SMA and %D the `d_smooth` SMA of %K.
pub fn calculate_stochastic(
    candles: &[Candle],
    period: u32,
    k_smooth: u32,
    d_smooth: u32,
) -> Option<StochasticIndicator> {
    let p = period as usize;
    if p == 0 || candles.len() < p {
        return None;
    }

    let raw_k: Vec<f64> = candles
        .windows(p)
        .map(|window| {
            let high = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
            let low = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
            let close = window[p - 1].close;
            position_in_range(close, low, high)
        })
        .collect();

    smooth(&raw_k, k_smooth as usize, d_smooth as usize)
}

/// Calculate Stochastic with default parameters (14, 3, 3)
pub fn calculate_stochastic_default(candles: &[Candle]) -> Option<StochasticIndicator> {
    calculate_stochastic(candles, 14, 3, 3)
}

/// Stochastic oscillator applied to the RSI series
pub fn calculate_stoch_rsi(
    candles: &[Candle],
    rsi_period: u32,
    stoch_period: u32,
    k_smooth: u32,
    d_smooth: u32,
) -> Option<StochasticIndicator> {
    let rsi = rsi_series(&closes(candles), rsi_period as usize);
    let p = stoch_period as usize;
    if p == 0 || rsi.len() < p {
        return None;
    }

    let raw_k: Vec<f64> = rsi
        .windows(p)
        .map(|window| {
            let high = math::highest(window).unwrap_or(0.0);
            let low = math::lowest(window).unwrap_or(0.0);
            position_in_range(window[p - 1], low, high)
        })
        .collect();

    smooth(&raw_k, k_smooth as usize, d_smooth as usize)
}

/// Calculate Stochastic RSI with default parameters (14, 14, 3, 3)
pub fn calculate_stoch_rsi_default(candles: &[Candle]) -> Option<StochasticIndicator> {
    calculate_stoch_rsi(candles, 14, 14, 3, 3)
}

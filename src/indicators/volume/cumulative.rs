//! Running-total volume lines: OBV, Accumulation/Distribution, Volume Price Trend
//!
//! Each line's trend is the least-squares slope of its last `SLOPE_WINDOW` values.

use crate::common::math;
use crate::models::indicators::{Candle, CumulativeVolumeIndicator};

pub const SLOPE_WINDOW: usize = 20;

/// Close location value: +1 at the high, -1 at the low, 0 for a zero-range bar
pub fn money_flow_multiplier(candle: &Candle) -> f64 {
    let range = candle.range();
    if range > 0.0 {
        ((candle.close - candle.low) - (candle.high - candle.close)) / range
    } else {
        0.0
    }
}

fn cumulative(candles: &[Candle], step: impl Fn(Option<&Candle>, &Candle) -> f64) -> Vec<f64> {
    let mut total = 0.0;
    let mut prev: Option<&Candle> = None;
    let mut out = Vec::with_capacity(candles.len());
    for candle in candles {
        total += step(prev, candle);
        out.push(total);
        prev = Some(candle);
    }
    out
}

fn with_trend(series: &[f64]) -> Option<CumulativeVolumeIndicator> {
    if series.len() < SLOPE_WINDOW {
        return None;
    }
    let window = &series[series.len() - SLOPE_WINDOW..];
    let slope = math::finite(math::linear_slope(window)?)?;
    let value = math::finite(window[SLOPE_WINDOW - 1])?;
    let reference = window.iter().map(|v| v.abs()).sum::<f64>() / SLOPE_WINDOW as f64;

    Some(CumulativeVolumeIndicator {
        value,
        slope,
        signal: math::slope_signal(slope, reference),
    })
}

pub fn obv_series(candles: &[Candle]) -> Vec<f64> {
    cumulative(candles, |prev, cur| match prev {
        Some(prev) if cur.close > prev.close => cur.volume,
        Some(prev) if cur.close < prev.close => -cur.volume,
        _ => 0.0,
    })
}

pub fn accumulation_distribution_series(candles: &[Candle]) -> Vec<f64> {
    cumulative(candles, |_, cur| money_flow_multiplier(cur) * cur.volume)
}

pub fn vpt_series(candles: &[Candle]) -> Vec<f64> {
    cumulative(candles, |prev, cur| match prev {
        Some(prev) if prev.close > 0.0 => cur.volume * (cur.close - prev.close) / prev.close,
        _ => 0.0,
    })
}

/// On-Balance Volume
pub fn calculate_obv(candles: &[Candle]) -> Option<CumulativeVolumeIndicator> {
    with_trend(&obv_series(candles))
}

/// Accumulation/Distribution line
pub fn calculate_accumulation_distribution(candles: &[Candle]) -> Option<CumulativeVolumeIndicator> {
    with_trend(&accumulation_distribution_series(candles))
}

/// Volume Price Trend
pub fn calculate_vpt(candles: &[Candle]) -> Option<CumulativeVolumeIndicator> {
    with_trend(&vpt_series(candles))
}

//! Williams %R

use crate::common::math;
use crate::models::indicators::{Candle, OscillatorIndicator, Zone};

pub const WILLIAMS_OVERBOUGHT: f64 = -20.0;
pub const WILLIAMS_OVERSOLD: f64 = -80.0;

/// %R = -100 * (highest high - close) / (highest high - lowest low), in -100..=0
pub fn calculate_williams_r(candles: &[Candle], period: u32) -> Option<OscillatorIndicator> {
    let p = period as usize;
    if p == 0 || candles.len() < p {
        return None;
    }

    let window = &candles[candles.len() - p..];
    let high = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let low = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    let close = window[p - 1].close;
    let range = high - low;
    let value = if range > 0.0 {
        -100.0 * (high - close) / range
    } else {
        -50.0
    };
    let value = math::finite(value)?;
    let zone = Zone::classify(value, WILLIAMS_OVERSOLD, WILLIAMS_OVERBOUGHT);

    Some(OscillatorIndicator {
        value,
        period,
        zone,
        signal: zone.signal(),
    })
}

pub fn calculate_williams_r_default(candles: &[Candle]) -> Option<OscillatorIndicator> {
    calculate_williams_r(candles, 14)
}

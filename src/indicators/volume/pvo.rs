//! Percentage Volume Oscillator

use crate::common::math;
use crate::indicators::volumes;
use crate::models::indicators::{Candle, PvoIndicator};

/// PVO = 100 * (EMA(fast) - EMA(slow)) / EMA(slow) of volume, with an EMA signal line
pub fn calculate_pvo(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<PvoIndicator> {
    if fast_period == 0 || fast_period >= slow_period {
        return None;
    }
    let volumes = volumes(candles);
    let fast = math::ema_series(&volumes, fast_period as usize);
    let slow = math::ema_series(&volumes, slow_period as usize);
    if slow.is_empty() {
        return None;
    }

    let offset = fast.len() - slow.len();
    let pvo_line: Vec<f64> = slow
        .iter()
        .enumerate()
        .map(|(i, &slow_value)| {
            if slow_value > 0.0 {
                100.0 * (fast[i + offset] - slow_value) / slow_value
            } else {
                0.0
            }
        })
        .collect();

    let signal_line = math::ema_series(&pvo_line, signal_period as usize);
    let pvo = math::finite(*pvo_line.last()?)?;
    let signal = math::finite(*signal_line.last()?)?;
    let histogram = pvo - signal;

    Some(PvoIndicator {
        pvo,
        signal_line: signal,
        histogram,
        expanding: histogram > 0.0 && !math::approx_eq(pvo, signal),
    })
}

pub fn calculate_pvo_default(candles: &[Candle]) -> Option<PvoIndicator> {
    calculate_pvo(candles, 12, 26, 9)
}

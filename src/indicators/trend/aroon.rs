//! Aroon up/down and oscillator

use crate::common::math;
use crate::models::indicators::{AroonIndicator, Candle, Signal};

pub const AROON_SIGNAL_THRESHOLD: f64 = 50.0;

/// Bars since the highest high / lowest low over the last `period + 1` bars,
/// scaled to 0..=100.
pub fn calculate_aroon(candles: &[Candle], period: u32) -> Option<AroonIndicator> {
    let p = period as usize;
    if p == 0 || candles.len() < p + 1 {
        return None;
    }

    let window = &candles[candles.len() - (p + 1)..];
    let mut high_idx = 0;
    let mut low_idx = 0;
    for (i, candle) in window.iter().enumerate() {
        // Ties resolve to the most recent bar.
        if candle.high >= window[high_idx].high {
            high_idx = i;
        }
        if candle.low <= window[low_idx].low {
            low_idx = i;
        }
    }

    let since_high = (p - high_idx) as f64;
    let since_low = (p - low_idx) as f64;
    let up = 100.0 * (p as f64 - since_high) / p as f64;
    let down = 100.0 * (p as f64 - since_low) / p as f64;
    let oscillator = math::finite(up - down)?;

    let signal = if oscillator > AROON_SIGNAL_THRESHOLD {
        Signal::Bullish
    } else if oscillator < -AROON_SIGNAL_THRESHOLD {
        Signal::Bearish
    } else {
        Signal::Neutral
    };

    Some(AroonIndicator {
        up,
        down,
        oscillator,
        period,
        signal,
    })
}

/// Calculate Aroon with default period (25)
pub fn calculate_aroon_default(candles: &[Candle]) -> Option<AroonIndicator> {
    calculate_aroon(candles, 25)
}

//! Fibonacci retracements of the recent swing range

use crate::models::indicators::{Candle, FibonacciLevels, PriceLevel};

pub const FIBONACCI_LOOKBACK: usize = 60;
pub const RETRACEMENTS: [(&str, f64); 4] = [
    ("23.6%", 0.236),
    ("38.2%", 0.382),
    ("50.0%", 0.5),
    ("61.8%", 0.618),
];

/// Retracement levels measured down from the swing high; `None` for a flat range
pub fn calculate_fibonacci(candles: &[Candle], lookback: usize) -> Option<FibonacciLevels> {
    let price = candles.last()?.close;
    let recent = &candles[candles.len().saturating_sub(lookback)..];
    let swing_high = recent.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let swing_low = recent.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    let range = swing_high - swing_low;
    if range <= 0.0 || !range.is_finite() {
        return None;
    }

    let levels = RETRACEMENTS
        .iter()
        .map(|(label, ratio)| PriceLevel::new(*label, swing_high - ratio * range, price))
        .collect();

    Some(FibonacciLevels {
        swing_high,
        swing_low,
        levels,
    })
}

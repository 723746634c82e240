//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::indicators::closes;
use crate::models::indicators::{Candle, CrossoverType, MacdIndicator, Signal};

/// MACD line and signal line series, tail-aligned with each other
fn macd_series(closes: &[f64], fast: usize, slow: usize, signal: usize) -> Option<(Vec<f64>, Vec<f64>)> {
    if fast == 0 || fast >= slow {
        return None;
    }
    let fast_ema = math::ema_series(closes, fast);
    let slow_ema = math::ema_series(closes, slow);
    if slow_ema.is_empty() {
        return None;
    }

    let offset = fast_ema.len() - slow_ema.len();
    let macd_line: Vec<f64> = slow_ema
        .iter()
        .enumerate()
        .map(|(i, slow_value)| fast_ema[i + offset] - slow_value)
        .collect();

    let signal_line = math::ema_series(&macd_line, signal);
    if signal_line.is_empty() {
        return None;
    }
    Some((macd_line, signal_line))
}

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    let (macd_line, signal_line) = macd_series(
        &closes(candles),
        fast_period as usize,
        slow_period as usize,
        signal_period as usize,
    )?;

    let macd = math::finite(*macd_line.last()?)?;
    let signal = math::finite(*signal_line.last()?)?;
    let histogram = macd - signal;

    let line_vs_signal = math::compare_signal(macd, signal);
    // A converged signal line leaves the sign of the MACD line as the direction.
    let trend = if line_vs_signal.is_directional() {
        line_vs_signal
    } else {
        math::compare_signal(macd, 0.0)
    };

    let crossover = if signal_line.len() >= 2 {
        let prev = math::compare_signal(
            macd_line[macd_line.len() - 2],
            signal_line[signal_line.len() - 2],
        );
        match (prev, line_vs_signal) {
            (prev, Signal::Bullish) if prev != Signal::Bullish => CrossoverType::Bullish,
            (prev, Signal::Bearish) if prev != Signal::Bearish => CrossoverType::Bearish,
            _ => CrossoverType::None,
        }
    } else {
        CrossoverType::None
    };

    Some(MacdIndicator {
        macd,
        signal_line: signal,
        histogram,
        period: (fast_period, slow_period, signal_period),
        signal: trend,
        crossover,
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdIndicator> {
    calculate_macd(candles, 12, 26, 9)
}

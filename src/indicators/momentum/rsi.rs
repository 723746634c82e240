//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::indicators::closes;
use crate::models::indicators::{Candle, RsiIndicator, Zone};

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            50.0
        } else {
            100.0
        }
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}

/// RSI series with Wilder smoothing, tail-aligned with `values`
pub fn rsi_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period + 1 {
        return Vec::new();
    }

    let mut gains = Vec::with_capacity(values.len() - 1);
    let mut losses = Vec::with_capacity(values.len() - 1);
    for pair in values.windows(2) {
        let change = pair[1] - pair[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let avg_gains = math::wilder_series(&gains, period);
    let avg_losses = math::wilder_series(&losses, period);
    avg_gains
        .iter()
        .zip(&avg_losses)
        .map(|(&gain, &loss)| rsi_from_averages(gain, loss))
        .collect()
}

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// A series without losses reads 100; a series without any movement reads 50.
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Option<RsiIndicator> {
    let value = math::finite(*rsi_series(&closes(candles), period as usize).last()?)?;
    let zone = Zone::classify(value, RSI_OVERSOLD, RSI_OVERBOUGHT);

    Some(RsiIndicator {
        value,
        period,
        zone,
        signal: zone.signal(),
    })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Option<RsiIndicator> {
    calculate_rsi(candles, 14)
}

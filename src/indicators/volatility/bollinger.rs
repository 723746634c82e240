//! Bollinger Bands indicator

use crate::common::math;
use crate::indicators::closes;
use crate::models::indicators::{BollingerBandsIndicator, Candle, Zone};

pub const PERCENT_B_OVERBOUGHT: f64 = 0.8;
pub const PERCENT_B_OVERSOLD: f64 = 0.2;

/// Bandwidths considered when looking for a squeeze
pub const SQUEEZE_LOOKBACK: usize = 120;
/// Fewer bandwidth values than this leave the squeeze undetermined
pub const SQUEEZE_MIN_VALUES: usize = 20;
pub const SQUEEZE_PERCENTILE: f64 = 20.0;

fn bands(window: &[f64], std_dev: f64) -> Option<(f64, f64, f64)> {
    let middle = math::mean(window)?;
    let std = math::standard_deviation(window, window.len())?;
    Some((middle + std_dev * std, middle, middle - std_dev * std))
}

fn bandwidth(upper: f64, middle: f64, lower: f64) -> f64 {
    if middle != 0.0 {
        (upper - lower) / middle
    } else {
        0.0
    }
}

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * population standard deviation)
/// Lower Band = Middle - (std_dev * population standard deviation)
///
/// The squeeze flag marks a bandwidth at or below the 20th percentile of the
/// last 120 bandwidths.
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    let p = period as usize;
    if p == 0 || candles.len() < p {
        return None;
    }

    let closes = closes(candles);
    let close = closes[closes.len() - 1];
    let (upper, middle, lower) = bands(&closes[closes.len() - p..], std_dev)?;
    let upper = math::finite(upper)?;
    let lower = math::finite(lower)?;

    let width = upper - lower;
    let percent_b = if math::approx_eq(upper, lower) {
        0.5
    } else {
        (close - lower) / width
    };
    let current_bandwidth = bandwidth(upper, middle, lower);

    let history: Vec<f64> = closes
        .windows(p)
        .rev()
        .take(SQUEEZE_LOOKBACK)
        .filter_map(|window| bands(window, std_dev))
        .map(|(u, m, l)| bandwidth(u, m, l))
        .collect();
    let squeeze = if history.len() >= SQUEEZE_MIN_VALUES {
        math::percentile(&history, SQUEEZE_PERCENTILE).map(|threshold| current_bandwidth <= threshold)
    } else {
        None
    };

    let zone = Zone::classify(percent_b, PERCENT_B_OVERSOLD, PERCENT_B_OVERBOUGHT);

    Some(BollingerBandsIndicator {
        upper,
        middle,
        lower,
        period,
        std_dev,
        percent_b,
        bandwidth: current_bandwidth,
        squeeze,
        zone,
        signal: zone.signal(),
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(candles: &[Candle]) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_bands(candles, 20, 2.0)
}

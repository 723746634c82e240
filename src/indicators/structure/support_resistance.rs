//! Support and Resistance levels detection

use crate::models::indicators::{Candle, PriceLevel};

pub const SWING_LOOKBACK: usize = 60;
/// Bars on each side a swing point must dominate
pub const SWING_NEIGHBOURHOOD: usize = 2;
pub const MAX_LEVELS: usize = 3;

/// Swing highs above and swing lows below the current price
///
/// Finds local maxima (resistance) and minima (support) within the lookback
/// window; a swing must be strictly beyond every bar within
/// `SWING_NEIGHBOURHOOD` on both sides. Levels are ordered nearest first.
pub fn calculate_dynamic_levels(
    candles: &[Candle],
    lookback: usize,
) -> (Vec<PriceLevel>, Vec<PriceLevel>) {
    let n = SWING_NEIGHBOURHOOD;
    let Some(current) = candles.last() else {
        return (Vec::new(), Vec::new());
    };
    let price = current.close;
    let recent = &candles[candles.len().saturating_sub(lookback)..];
    if recent.len() < 2 * n + 1 {
        return (Vec::new(), Vec::new());
    }

    let mut swing_highs = Vec::new();
    let mut swing_lows = Vec::new();
    for i in n..recent.len() - n {
        let neighbours = (i - n..=i + n).filter(|&j| j != i);
        let bar = &recent[i];
        if neighbours.clone().all(|j| bar.high > recent[j].high) {
            swing_highs.push(bar.high);
        }
        if neighbours.clone().all(|j| bar.low < recent[j].low) {
            swing_lows.push(bar.low);
        }
    }

    let mut resistance: Vec<f64> = swing_highs.into_iter().filter(|&h| h > price).collect();
    resistance.sort_by(|a, b| a.total_cmp(b));
    resistance.dedup();

    let mut support: Vec<f64> = swing_lows.into_iter().filter(|&l| l < price).collect();
    support.sort_by(|a, b| b.total_cmp(a));
    support.dedup();

    let support = support
        .into_iter()
        .take(MAX_LEVELS)
        .map(|level| PriceLevel::new("swing_low", level, price))
        .collect();
    let resistance = resistance
        .into_iter()
        .take(MAX_LEVELS)
        .map(|level| PriceLevel::new("swing_high", level, price))
        .collect();

    (support, resistance)
}

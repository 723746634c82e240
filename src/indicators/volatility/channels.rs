//! Keltner and Donchian channels

use crate::common::math;
use crate::indicators::closes;
use crate::indicators::volatility::atr::atr_value;
use crate::models::indicators::{Candle, ChannelIndicator, ChannelPosition};

fn position(price: f64, upper: f64, lower: f64) -> ChannelPosition {
    if price > upper {
        ChannelPosition::Above
    } else if price < lower {
        ChannelPosition::Below
    } else {
        ChannelPosition::Inside
    }
}

/// Keltner channel: EMA(ema_period) +/- multiplier * ATR(atr_period)
pub fn calculate_keltner(
    candles: &[Candle],
    ema_period: u32,
    atr_period: u32,
    multiplier: f64,
) -> Option<ChannelIndicator> {
    let middle = math::finite(math::ema(&closes(candles), ema_period as usize)?)?;
    let atr = atr_value(candles, atr_period as usize)?;
    let upper = middle + multiplier * atr;
    let lower = middle - multiplier * atr;

    Some(ChannelIndicator {
        upper,
        middle,
        lower,
        position: position(candles.last()?.close, upper, lower),
    })
}

pub fn calculate_keltner_default(candles: &[Candle]) -> Option<ChannelIndicator> {
    calculate_keltner(candles, 20, 10, 2.0)
}

/// Donchian channel over the `period` bars before the current one, so the
/// position reports breakouts of the prior range.
pub fn calculate_donchian(candles: &[Candle], period: u32) -> Option<ChannelIndicator> {
    let p = period as usize;
    if p == 0 || candles.len() < p + 1 {
        return None;
    }

    let prior = &candles[candles.len() - 1 - p..candles.len() - 1];
    let upper = prior.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let lower = prior.iter().map(|c| c.low).fold(f64::MAX, f64::min);

    Some(ChannelIndicator {
        upper,
        middle: (upper + lower) / 2.0,
        lower,
        position: position(candles.last()?.close, upper, lower),
    })
}

pub fn calculate_donchian_default(candles: &[Candle]) -> Option<ChannelIndicator> {
    calculate_donchian(candles, 20)
}

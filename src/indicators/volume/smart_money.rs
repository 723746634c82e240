//! Smart-money activity detection
//!
//! A bar is flagged when heavy volume fails to move price: volume at least
//! 1.5x the prior average, a range no wider than the prior average range, and
//! a candle body pointing against the close-to-close move.

use crate::common::math;
use crate::models::indicators::Candle;

pub const SMART_MONEY_LOOKBACK: usize = 20;
pub const SMART_MONEY_VOLUME_RATIO: f64 = 1.5;

/// `None` without `lookback` bars before the latest one
pub fn detect_smart_money(candles: &[Candle], lookback: usize) -> Option<bool> {
    if lookback == 0 || candles.len() < lookback + 1 {
        return None;
    }

    let current = candles.last()?;
    let previous = &candles[candles.len() - 2];
    let prior = &candles[candles.len() - 1 - lookback..candles.len() - 1];

    let avg_volume = math::mean(&prior.iter().map(|c| c.volume).collect::<Vec<_>>())?;
    let avg_range = math::mean(&prior.iter().map(Candle::range).collect::<Vec<_>>())?;

    let heavy_volume = avg_volume > 0.0 && current.volume >= SMART_MONEY_VOLUME_RATIO * avg_volume;
    let narrow_range = current.range() <= avg_range;
    let price_move = current.close - previous.close;
    let body_move = current.close - current.open;
    let divergent = (price_move > 0.0 && body_move < 0.0) || (price_move < 0.0 && body_move > 0.0);

    Some(heavy_volume && narrow_range && divergent)
}

pub fn detect_smart_money_default(candles: &[Candle]) -> Option<bool> {
    detect_smart_money(candles, SMART_MONEY_LOOKBACK)
}

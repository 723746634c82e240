//! Single- and two-bar candlestick patterns

use crate::models::indicators::Candle;

/// Body at or below this share of the range reads as a doji
pub const DOJI_BODY_RATIO: f64 = 0.1;
pub const WICK_BODY_RATIO: f64 = 2.0;

/// Zero-range bars count as doji.
pub fn is_doji(candle: &Candle) -> bool {
    let range = candle.range();
    range <= 0.0 || candle.body() <= DOJI_BODY_RATIO * range
}

fn has_long_lower_wick(candle: &Candle) -> bool {
    let body = candle.body();
    candle.range() > 0.0
        && candle.lower_wick() >= WICK_BODY_RATIO * body
        && candle.upper_wick() < body
}

fn has_long_upper_wick(candle: &Candle) -> bool {
    let body = candle.body();
    candle.range() > 0.0
        && candle.upper_wick() >= WICK_BODY_RATIO * body
        && candle.lower_wick() < body
}

/// Long lower wick under a small body, whatever the bar's colour
pub fn is_hammer(candle: &Candle) -> bool {
    has_long_lower_wick(candle)
}

/// The bearish subset of hammers
pub fn is_hanging_man(candle: &Candle) -> bool {
    has_long_lower_wick(candle) && candle.is_bearish()
}

pub fn is_shooting_star(candle: &Candle) -> bool {
    has_long_upper_wick(candle)
}

fn engulfs(previous: &Candle, current: &Candle) -> bool {
    let prev_top = previous.open.max(previous.close);
    let prev_bottom = previous.open.min(previous.close);
    let cur_top = current.open.max(current.close);
    let cur_bottom = current.open.min(current.close);
    cur_top >= prev_top && cur_bottom <= prev_bottom && current.body() > previous.body()
}

pub fn is_bullish_engulfing(previous: &Candle, current: &Candle) -> bool {
    previous.is_bearish() && current.is_bullish() && engulfs(previous, current)
}

pub fn is_bearish_engulfing(previous: &Candle, current: &Candle) -> bool {
    previous.is_bullish() && current.is_bearish() && engulfs(previous, current)
}

//! Candlestick patterns and gaps

pub mod candlestick;
pub mod gaps;

pub use candlestick::*;
pub use gaps::*;

use crate::models::indicators::{Candle, PatternSignals, Signal};

/// Evaluate the patterns on the latest bar
///
/// Bullish engulfing or a hammer that is not a hanging man reads bullish;
/// bearish engulfing, a hanging man or a shooting star reads bearish.
/// Conflicting readings cancel out.
pub fn detect_patterns(candles: &[Candle], gap_threshold: f64) -> Option<PatternSignals> {
    let current = candles.last()?;
    let previous = candles.len().checked_sub(2).map(|i| &candles[i]);

    let hammer = is_hammer(current);
    let hanging_man = is_hanging_man(current);
    let shooting_star = is_shooting_star(current);
    let bullish_engulfing = previous.is_some_and(|prev| is_bullish_engulfing(prev, current));
    let bearish_engulfing = previous.is_some_and(|prev| is_bearish_engulfing(prev, current));

    let bullish = bullish_engulfing || (hammer && !hanging_man);
    let bearish = bearish_engulfing || hanging_man || shooting_star;
    let signal = match (bullish, bearish) {
        (true, false) => Signal::Bullish,
        (false, true) => Signal::Bearish,
        _ => Signal::Neutral,
    };

    Some(PatternSignals {
        doji: is_doji(current),
        hammer,
        hanging_man,
        shooting_star,
        bullish_engulfing,
        bearish_engulfing,
        gap: detect_gap(candles, gap_threshold),
        signal,
    })
}

//! Ichimoku Kinko Hyo

use crate::common::math;
use crate::models::indicators::{Candle, ChannelPosition, IchimokuCloud, Signal};

pub const CONVERSION_PERIOD: usize = 9;
pub const BASE_PERIOD: usize = 26;
pub const SPAN_B_PERIOD: usize = 52;
pub const DISPLACEMENT: usize = 26;

/// Bars needed so the cloud under the current bar exists
pub const ICHIMOKU_MIN_BARS: usize = SPAN_B_PERIOD + DISPLACEMENT;

/// Midpoint of the highest high and lowest low of `period` bars ending at `end` (inclusive)
fn midpoint(candles: &[Candle], end: usize, period: usize) -> f64 {
    let window = &candles[end + 1 - period..=end];
    let high = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let low = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    (high + low) / 2.0
}

/// (conversion, base, span A, span B) as computed on bar `end`
fn lines_at(candles: &[Candle], end: usize) -> (f64, f64, f64, f64) {
    let conversion = midpoint(candles, end, CONVERSION_PERIOD);
    let base = midpoint(candles, end, BASE_PERIOD);
    let span_a = (conversion + base) / 2.0;
    let span_b = midpoint(candles, end, SPAN_B_PERIOD);
    (conversion, base, span_a, span_b)
}

/// Calculate the Ichimoku cloud for the latest bar
///
/// The cloud under the current bar uses spans computed `DISPLACEMENT` bars
/// ago; the leading spans are the ones computed now. The overall signal is
/// directional only when price vs cloud, the TK cross and the cloud colour agree.
pub fn calculate_ichimoku(candles: &[Candle]) -> Option<IchimokuCloud> {
    if candles.len() < ICHIMOKU_MIN_BARS {
        return None;
    }

    let last = candles.len() - 1;
    let close = candles[last].close;
    let (conversion_line, base_line, leading_span_a, leading_span_b) = lines_at(candles, last);
    let (_, _, span_a, span_b) = lines_at(candles, last - DISPLACEMENT);

    for value in [conversion_line, base_line, leading_span_a, leading_span_b, span_a, span_b] {
        math::finite(value)?;
    }

    let cloud_top = span_a.max(span_b);
    let cloud_bottom = span_a.min(span_b);
    let price_vs_cloud = if close > cloud_top && !math::approx_eq(close, cloud_top) {
        ChannelPosition::Above
    } else if close < cloud_bottom && !math::approx_eq(close, cloud_bottom) {
        ChannelPosition::Below
    } else {
        ChannelPosition::Inside
    };

    let cloud_color = math::compare_signal(span_a, span_b);
    let tk_cross = math::compare_signal(conversion_line, base_line);
    let lagging_confirmation = math::compare_signal(close, candles[last - DISPLACEMENT].close);

    let price_signal = match price_vs_cloud {
        ChannelPosition::Above => Signal::Bullish,
        ChannelPosition::Below => Signal::Bearish,
        ChannelPosition::Inside => Signal::Neutral,
    };
    let signal = if price_signal.is_directional()
        && price_signal == tk_cross
        && price_signal == cloud_color
    {
        price_signal
    } else {
        Signal::Neutral
    };

    Some(IchimokuCloud {
        conversion_line,
        base_line,
        span_a,
        span_b,
        leading_span_a,
        leading_span_b,
        lagging_span: close,
        lagging_confirmation,
        cloud_color,
        price_vs_cloud,
        tk_cross,
        signal,
    })
}

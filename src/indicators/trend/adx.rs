//! ADX (Average Directional Index) indicator

use crate::common::math;
use crate::models::indicators::{AdxIndicator, Candle, Signal, TrendStrength};

/// ADX above this level marks a strong trend
pub const STRONG_TREND_THRESHOLD: f64 = 25.0;

/// Calculate ADX indicator with Wilder smoothing
///
/// ADX measures trend strength regardless of direction; +DI/-DI give the
/// direction. Needs `2 * period` bars.
pub fn calculate_adx(candles: &[Candle], period: u32) -> Option<AdxIndicator> {
    let p = period as usize;
    if p == 0 || candles.len() < 2 * p {
        return None;
    }

    let mut tr_values = Vec::with_capacity(candles.len() - 1);
    let mut plus_dm_values = Vec::with_capacity(candles.len() - 1);
    let mut minus_dm_values = Vec::with_capacity(candles.len() - 1);

    for pair in candles.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        tr_values.push(math::true_range(cur.high, cur.low, prev.close));

        let up_move = cur.high - prev.high;
        let down_move = prev.low - cur.low;
        plus_dm_values.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm_values.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
    }

    let smoothed_tr = math::wilder_series(&tr_values, p);
    let smoothed_plus = math::wilder_series(&plus_dm_values, p);
    let smoothed_minus = math::wilder_series(&minus_dm_values, p);

    let mut plus_di = 0.0;
    let mut minus_di = 0.0;
    let mut dx_values = Vec::with_capacity(smoothed_tr.len());
    for i in 0..smoothed_tr.len() {
        let atr = smoothed_tr[i];
        plus_di = if atr > 0.0 { 100.0 * smoothed_plus[i] / atr } else { 0.0 };
        minus_di = if atr > 0.0 { 100.0 * smoothed_minus[i] / atr } else { 0.0 };
        let di_sum = plus_di + minus_di;
        dx_values.push(if di_sum > 0.0 {
            100.0 * (plus_di - minus_di).abs() / di_sum
        } else {
            0.0
        });
    }

    let adx_value = math::finite(*math::wilder_series(&dx_values, p).last()?)?;

    let strength = if adx_value > STRONG_TREND_THRESHOLD {
        TrendStrength::Strong
    } else {
        TrendStrength::Weak
    };
    let di_trend = math::compare_signal(plus_di, minus_di);
    let signal = match strength {
        TrendStrength::Strong => di_trend,
        TrendStrength::Weak => Signal::Neutral,
    };

    Some(AdxIndicator {
        value: adx_value,
        plus_di,
        minus_di,
        period,
        strength,
        di_trend,
        signal,
    })
}

/// Calculate ADX with default period (14)
pub fn calculate_adx_default(candles: &[Candle]) -> Option<AdxIndicator> {
    calculate_adx(candles, 14)
}

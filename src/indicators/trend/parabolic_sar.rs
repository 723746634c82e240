//! Parabolic SAR (stop and reverse)

use crate::common::math;
use crate::models::indicators::{Candle, ParabolicSarIndicator, Signal};

/// Bars needed before the extreme point and acceleration factor settle
pub const SAR_MIN_BARS: usize = 10;

/// Calculate Wilder's Parabolic SAR
///
/// The SAR trails price by `af * (EP - SAR)` each bar; `af` grows by `step`
/// on every new extreme point up to `max_step`. The trend flips when price
/// pierces the SAR. A series that never sets a new extreme point or flips
/// leaves the SAR parked at its seed, and the signal stays neutral.
pub fn calculate_parabolic_sar(
    candles: &[Candle],
    step: f64,
    max_step: f64,
) -> Option<ParabolicSarIndicator> {
    if candles.len() < SAR_MIN_BARS.max(2) {
        return None;
    }

    let mut long = candles[1].close >= candles[0].close;
    let mut sar = if long { candles[0].low } else { candles[0].high };
    let mut extreme = if long { candles[0].high } else { candles[0].low };
    let mut af = step;
    let mut flipped_at = None;
    let mut extended = false;

    for i in 1..candles.len() {
        let bar = &candles[i];
        let prev = &candles[i - 1];
        let prev2 = if i >= 2 { &candles[i - 2] } else { prev };
        let mut next = sar + af * (extreme - sar);

        if long {
            next = next.min(prev.low).min(prev2.low);
            if bar.low < next {
                long = false;
                next = extreme;
                extreme = bar.low;
                af = step;
                flipped_at = Some(i);
                extended = true;
            } else if bar.high > extreme {
                extreme = bar.high;
                extended = true;
                af = (af + step).min(max_step);
            }
        } else {
            next = next.max(prev.high).max(prev2.high);
            if bar.high > next {
                long = true;
                next = extreme;
                extreme = bar.high;
                af = step;
                flipped_at = Some(i);
                extended = true;
            } else if bar.low < extreme {
                extreme = bar.low;
                extended = true;
                af = (af + step).min(max_step);
            }
        }

        sar = next;
    }

    let sar = math::finite(sar)?;
    let close = candles.last()?.close;

    Some(ParabolicSarIndicator {
        value: sar,
        trend: if long { Signal::Bullish } else { Signal::Bearish },
        flipped: flipped_at == Some(candles.len() - 1),
        signal: if extended {
            math::compare_signal(close, sar)
        } else {
            Signal::Neutral
        },
    })
}

/// Calculate Parabolic SAR with default acceleration (0.02, max 0.2)
pub fn calculate_parabolic_sar_default(candles: &[Candle]) -> Option<ParabolicSarIndicator> {
    calculate_parabolic_sar(candles, 0.02, 0.2)
}

//! Money Flow Index

use crate::common::math;
use crate::models::indicators::{Candle, OscillatorIndicator, Zone};

pub const MFI_OVERSOLD: f64 = 20.0;
pub const MFI_OVERBOUGHT: f64 = 80.0;

/// Volume-weighted RSI over typical prices
///
/// Money flow on a bar counts as positive when the typical price rose, negative
/// when it fell; unchanged bars contribute to neither side.
pub fn calculate_mfi(candles: &[Candle], period: u32) -> Option<OscillatorIndicator> {
    let p = period as usize;
    if p == 0 || candles.len() < p + 1 {
        return None;
    }

    let window = &candles[candles.len() - (p + 1)..];
    let mut positive = 0.0;
    let mut negative = 0.0;
    for pair in window.windows(2) {
        let prev_tp = pair[0].typical_price();
        let tp = pair[1].typical_price();
        let flow = tp * pair[1].volume;
        if tp > prev_tp {
            positive += flow;
        } else if tp < prev_tp {
            negative += flow;
        }
    }

    let value = if negative == 0.0 {
        if positive == 0.0 {
            50.0
        } else {
            100.0
        }
    } else {
        100.0 - 100.0 / (1.0 + positive / negative)
    };
    let value = math::finite(value)?;
    let zone = Zone::classify(value, MFI_OVERSOLD, MFI_OVERBOUGHT);

    Some(OscillatorIndicator {
        value,
        period,
        zone,
        signal: zone.signal(),
    })
}

pub fn calculate_mfi_default(candles: &[Candle]) -> Option<OscillatorIndicator> {
    calculate_mfi(candles, 14)
}

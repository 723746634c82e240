//! Chaikin Money Flow and Ease of Movement

use crate::common::math;
use crate::indicators::volume::cumulative::money_flow_multiplier;
use crate::models::indicators::{Candle, Signal, VolumeFlowIndicator};

pub const CMF_THRESHOLD: f64 = 0.1;
/// Volume scale applied to the EOM box ratio
pub const EOM_VOLUME_DIVISOR: f64 = 1e8;

/// CMF = sum(multiplier * volume) / sum(volume) over `period` bars
pub fn calculate_cmf(candles: &[Candle], period: u32) -> Option<VolumeFlowIndicator> {
    let p = period as usize;
    if p == 0 || candles.len() < p {
        return None;
    }

    let window = &candles[candles.len() - p..];
    let flow: f64 = window
        .iter()
        .map(|c| money_flow_multiplier(c) * c.volume)
        .sum();
    let volume: f64 = window.iter().map(|c| c.volume).sum();
    let value = if volume > 0.0 { flow / volume } else { 0.0 };
    let value = math::finite(value)?;

    let signal = if value > CMF_THRESHOLD {
        Signal::Bullish
    } else if value < -CMF_THRESHOLD {
        Signal::Bearish
    } else {
        Signal::Neutral
    };

    Some(VolumeFlowIndicator {
        value,
        period,
        signal,
    })
}

pub fn calculate_cmf_default(candles: &[Candle]) -> Option<VolumeFlowIndicator> {
    calculate_cmf(candles, 20)
}

/// Ease of Movement: `period` SMA of midpoint move divided by the volume box ratio
pub fn calculate_eom(candles: &[Candle], period: u32) -> Option<VolumeFlowIndicator> {
    let raw: Vec<f64> = candles
        .windows(2)
        .map(|pair| {
            let (prev, cur) = (&pair[0], &pair[1]);
            let distance = (cur.high + cur.low) / 2.0 - (prev.high + prev.low) / 2.0;
            let range = cur.range();
            if range > 0.0 && cur.volume > 0.0 {
                distance / ((cur.volume / EOM_VOLUME_DIVISOR) / range)
            } else {
                0.0
            }
        })
        .collect();

    let value = math::finite(math::sma(&raw, period as usize)?)?;

    Some(VolumeFlowIndicator {
        value,
        period,
        signal: math::compare_signal(value, 0.0),
    })
}

pub fn calculate_eom_default(candles: &[Candle]) -> Option<VolumeFlowIndicator> {
    calculate_eom(candles, 14)
}

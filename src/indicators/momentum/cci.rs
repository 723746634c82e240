//! Commodity Channel Index

use crate::common::math;
use crate::models::indicators::{Candle, OscillatorIndicator, Zone};

const LAMBERT_CONSTANT: f64 = 0.015;
pub const CCI_BAND: f64 = 100.0;

/// CCI = (TP - SMA(TP)) / (0.015 * mean absolute deviation)
pub fn calculate_cci(candles: &[Candle], period: u32) -> Option<OscillatorIndicator> {
    let p = period as usize;
    if p == 0 || candles.len() < p {
        return None;
    }

    let typical: Vec<f64> = candles[candles.len() - p..]
        .iter()
        .map(Candle::typical_price)
        .collect();
    let average = math::mean(&typical)?;
    let deviation = typical.iter().map(|tp| (tp - average).abs()).sum::<f64>() / p as f64;
    let last = typical[p - 1];

    let value = if deviation > 0.0 {
        (last - average) / (LAMBERT_CONSTANT * deviation)
    } else {
        0.0
    };
    let value = math::finite(value)?;
    let zone = Zone::classify(value, -CCI_BAND, CCI_BAND);

    Some(OscillatorIndicator {
        value,
        period,
        zone,
        signal: zone.signal(),
    })
}

pub fn calculate_cci_default(candles: &[Candle]) -> Option<OscillatorIndicator> {
    calculate_cci(candles, 20)
}

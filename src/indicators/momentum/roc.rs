//! Rate of Change

use crate::common::math;
use crate::models::indicators::{Candle, RocIndicator};

/// ROC = 100 * (close / close `period` bars ago - 1)
pub fn calculate_roc(candles: &[Candle], period: u32) -> Option<RocIndicator> {
    let p = period as usize;
    if p == 0 || candles.len() < p + 1 {
        return None;
    }

    let close = candles[candles.len() - 1].close;
    let base = candles[candles.len() - 1 - p].close;
    let value = math::finite((close / base - 1.0) * 100.0)?;

    Some(RocIndicator {
        value,
        period,
        signal: math::compare_signal(value, 0.0),
    })
}

pub fn calculate_roc_default(candles: &[Candle]) -> Option<RocIndicator> {
    calculate_roc(candles, 10)
}

//! Opening gaps against the prior close

use crate::models::indicators::{Candle, GapDirection, GapIndicator};

pub const DEFAULT_GAP_THRESHOLD: f64 = 0.02;

/// Gap size is |open - prior close| / prior close; flagged above `threshold`
pub fn detect_gap(candles: &[Candle], threshold: f64) -> Option<GapIndicator> {
    if candles.len() < 2 {
        return None;
    }
    let current = &candles[candles.len() - 1];
    let prev_close = candles[candles.len() - 2].close;
    if prev_close <= 0.0 {
        return None;
    }

    let size = (current.open - prev_close).abs() / prev_close;
    let direction = if size > threshold {
        if current.open > prev_close {
            GapDirection::Up
        } else {
            GapDirection::Down
        }
    } else {
        GapDirection::None
    };

    Some(GapIndicator {
        direction,
        size,
        gap_up: direction == GapDirection::Up,
        gap_down: direction == GapDirection::Down,
    })
}

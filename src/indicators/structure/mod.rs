//! Market structure: pivots, swing levels, Fibonacci retracements

pub mod pivots;
pub mod support_resistance;
pub mod fibonacci;

pub use pivots::*;
pub use support_resistance::*;
pub use fibonacci::*;

use crate::models::indicators::{Candle, SupportResistance};

/// Combine pivots, swing levels and retracements; `None` when nothing could be derived
pub fn calculate_support_resistance(candles: &[Candle]) -> Option<SupportResistance> {
    let (dynamic_support, dynamic_resistance) = calculate_dynamic_levels(candles, SWING_LOOKBACK);
    let levels = SupportResistance {
        pivots: calculate_pivot_points(candles),
        dynamic_support,
        dynamic_resistance,
        fibonacci: calculate_fibonacci(candles, FIBONACCI_LOOKBACK),
    };
    (!levels.is_empty()).then_some(levels)
}

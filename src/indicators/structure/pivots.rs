//! Classic floor-trader pivot points

use crate::models::indicators::{Candle, PivotPoints, PriceLevel};

/// Pivot levels from the prior bar, with the nearest resistance (R1-R3) above
/// and the nearest support (S1-S3) below the latest close. When no level lies
/// on a side, R1 or S1 is reported.
pub fn calculate_pivot_points(candles: &[Candle]) -> Option<PivotPoints> {
    if candles.len() < 2 {
        return None;
    }
    let prior = &candles[candles.len() - 2];
    let price = candles[candles.len() - 1].close;
    let (high, low, close) = (prior.high, prior.low, prior.close);

    let pivot = (high + low + close) / 3.0;
    let resistance = [
        2.0 * pivot - low,
        pivot + (high - low),
        high + 2.0 * (pivot - low),
    ];
    let support = [
        2.0 * pivot - high,
        pivot - (high - low),
        low - 2.0 * (high - pivot),
    ];

    let resistances = [("R1", resistance[0]), ("R2", resistance[1]), ("R3", resistance[2])];
    let supports = [("S1", support[0]), ("S2", support[1]), ("S3", support[2])];

    let (res_label, res_price) = resistances
        .iter()
        .filter(|(_, level)| *level > price)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .copied()
        .unwrap_or(resistances[0]);
    let (sup_label, sup_price) = supports
        .iter()
        .filter(|(_, level)| *level < price)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .copied()
        .unwrap_or(supports[0]);

    Some(PivotPoints {
        pivot,
        resistance,
        support,
        nearest_resistance: PriceLevel::new(res_label, res_price, price),
        nearest_support: PriceLevel::new(sup_label, sup_price, price),
    })
}

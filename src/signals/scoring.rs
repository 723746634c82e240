//! Net score and confidence calculation

/// (bullish - bearish) / total, 0 when nothing voted
pub fn net_score(bullish: f64, bearish: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    ((bullish - bearish) / total).clamp(-1.0, 1.0)
}

/// Share of the total weight that took a side
pub fn participation(directional: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    (directional / total).clamp(0.0, 1.0)
}

/// Confidence of a directional call
///
/// `100 * agreement * (0.5 + 0.5 * participation)`, where agreement is the
/// share of the directional weight that sides with the call.
pub fn directional_confidence(agreeing: f64, directional: f64, total: f64) -> f64 {
    if directional <= 0.0 {
        return 0.0;
    }
    let agreement = (agreeing / directional).clamp(0.0, 1.0);
    100.0 * agreement * (0.5 + 0.5 * participation(directional, total))
}

/// Confidence of a neutral call: the more components took a side, the less
/// certain the neutral reading.
pub fn neutral_confidence(directional: f64, total: f64) -> f64 {
    50.0 * participation(directional, total)
}

pub fn apply_risk_penalty(confidence: f64, penalty: f64) -> f64 {
    confidence * penalty
}

/// Clamp into `[min, max]`; NaN maps to `min`
pub fn clamp_confidence(confidence: f64, min: f64, max: f64) -> f64 {
    if confidence.is_nan() {
        return min;
    }
    confidence.clamp(min, max)
}

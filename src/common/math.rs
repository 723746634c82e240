//! Rolling-window statistics used by the indicator modules.
//!
//! Series helpers return tail-aligned vectors: the last element always
//! corresponds to the last input value, and a series computed with a window
//! of `period` has `values.len() - period + 1` elements.

use crate::models::indicators::Signal;

/// Relative tolerance used when comparing two indicator values.
const RELATIVE_EPSILON: f64 = 1e-9;

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Simple moving average of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    mean(&values[values.len() - period..])
}

pub fn sma_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(values.len() - period + 1);
    let mut sum: f64 = values[..period].iter().sum();
    out.push(sum / period as f64);
    for i in period..values.len() {
        sum += values[i] - values[i - period];
        out.push(sum / period as f64);
    }
    out
}

pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let alpha = 2.0 / (period as f64 + 1.0);
    alpha * value + (1.0 - alpha) * previous
}

/// EMA series seeded with the SMA of the first `period` values.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    let seed = values[..period].iter().sum::<f64>() / period as f64;
    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(seed);
    let mut prev = seed;
    for &value in &values[period..] {
        prev = ema_from_previous(value, prev, period);
        out.push(prev);
    }
    out
}

/// Latest EMA value.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).last().copied()
}

/// Wilder's smoothing (RMA), seeded with the SMA of the first `period` values.
pub fn wilder_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    let n = period as f64;
    let seed = values[..period].iter().sum::<f64>() / n;
    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(seed);
    let mut prev = seed;
    for &value in &values[period..] {
        prev = (prev * (n - 1.0) + value) / n;
        out.push(prev);
    }
    out
}

/// Population standard deviation of the last `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let avg = mean(window)?;
    let variance = window.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / period as f64;
    Some(variance.sqrt())
}

/// Sample (n - 1) variance.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let avg = mean(values)?;
    Some(values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64)
}

pub fn sample_std(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Sample covariance of two equally sized slices.
pub fn sample_covariance(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() || a.len() < 2 {
        return None;
    }
    let mean_a = mean(a)?;
    let mean_b = mean(b)?;
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x - mean_a) * (y - mean_b))
        .sum();
    Some(sum / (a.len() - 1) as f64)
}

/// Pearson correlation; `None` when either side has zero variance.
pub fn pearson_correlation(a: &[f64], b: &[f64]) -> Option<f64> {
    let cov = sample_covariance(a, b)?;
    let std_a = sample_std(a)?;
    let std_b = sample_std(b)?;
    if std_a == 0.0 || std_b == 0.0 {
        return None;
    }
    let corr = cov / (std_a * std_b);
    corr.is_finite().then(|| corr.clamp(-1.0, 1.0))
}

pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

pub fn highest(values: &[f64]) -> Option<f64> {
    values.iter().copied().fold(None, |acc, v| match acc {
        Some(m) if m >= v => Some(m),
        _ => Some(v),
    })
}

pub fn lowest(values: &[f64]) -> Option<f64> {
    values.iter().copied().fold(None, |acc, v| match acc {
        Some(m) if m <= v => Some(m),
        _ => Some(v),
    })
}

/// Least-squares slope of `values` against their index.
pub fn linear_slope(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = mean(values)?;
    let mut num = 0.0;
    let mut den = 0.0;
    for (i, y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        num += dx * (y - y_mean);
        den += dx * dx;
    }
    if den == 0.0 {
        return None;
    }
    Some(num / den)
}

/// Percentile with linear interpolation between closest ranks (`pct` in 0..=100).
pub fn percentile(values: &[f64], pct: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let rank = (pct.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Whether `a` and `b` are equal within a tolerance relative to their magnitude.
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= RELATIVE_EPSILON * scale
}

/// Bullish when `a` is above `b`, bearish when below, neutral when equal.
pub fn compare_signal(a: f64, b: f64) -> Signal {
    if approx_eq(a, b) {
        Signal::Neutral
    } else if a > b {
        Signal::Bullish
    } else {
        Signal::Bearish
    }
}

/// Direction of a slope relative to the magnitude of the series it came from.
pub fn slope_signal(slope: f64, reference: f64) -> Signal {
    compare_signal(reference + slope, reference)
}

/// Keep a value only when it is a finite number.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#![allow(dead_code)]

//! Candle series builders shared by the unit tests

use chrono::{Duration, NaiveDate};
use tickerscope::models::indicators::Candle;

pub fn day(i: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap() + Duration::days(i as i64)
}

/// Bar with a small body and wicks around `close`
pub fn bar(i: usize, open: f64, close: f64, volume: f64) -> Candle {
    let pad = close.max(open) * 0.002;
    Candle::new(open, open.max(close) + pad, open.min(close) - pad, close, volume, day(i))
}

/// 100 -> 150 compounding at a constant rate over `count` bars
///
/// Each bar opens slightly below its close and closes near its high, on
/// constant volume.
pub fn geometric_rise(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 100.0 * 1.5f64.powf(i as f64 / (count - 1) as f64);
            let s = close * 0.002;
            let open = close - s;
            Candle::new(open, close + s, open - s, close, 1_000_000.0, day(i))
        })
        .collect()
}

/// 100 -> 150 in equal steps, with the same bar shape as `geometric_rise`
pub fn linear_rise(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 100.0 + 50.0 * i as f64 / (count - 1) as f64;
            let s = close * 0.002;
            let open = close - s;
            Candle::new(open, close + s, open - s, close, 1_000_000.0, day(i))
        })
        .collect()
}

/// Mirror of `geometric_rise`: 150 -> 100
pub fn geometric_fall(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 150.0 * (1.0f64 / 1.5).powf(i as f64 / (count - 1) as f64);
            let s = close * 0.002;
            let open = close + s;
            Candle::new(open, open + s, close - s, close, 1_000_000.0, day(i))
        })
        .collect()
}

pub fn flat(count: usize, price: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| Candle::new(price, price, price, price, 1_000_000.0, day(i)))
        .collect()
}

/// Closes oscillating around 100 so that no trend develops
pub fn sideways(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 100.0 + 2.0 * ((i as f64) * 0.7).sin();
            let open = 100.0 + 2.0 * ((i as f64 - 1.0) * 0.7).sin();
            bar(i, open, close, 1_000_000.0 + 50_000.0 * ((i % 5) as f64))
        })
        .collect()
}

/// Bars from a list of closes; each opens at the prior close
pub fn from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            bar(i, open, close, 1_000_000.0)
        })
        .collect()
}

/// 60 quiet bars around 100, then an 8% gap up on three times the usual volume
/// whose bar closes below its open.
pub fn gap_up_on_heavy_volume() -> Vec<Candle> {
    let mut candles: Vec<Candle> = (0..60)
        .map(|i| Candle::new(100.0, 101.0, 99.0, 100.0, 1_000_000.0, day(i)))
        .collect();
    candles.push(Candle::new(108.0, 108.5, 107.0, 107.5, 3_000_000.0, day(60)));
    candles
}

//! Unit tests for trend indicators

use tickerscope::indicators::trend::*;
use tickerscope::models::indicators::{CrossoverType, Signal, TrendStrength};

use crate::support::{flat, from_closes, geometric_fall, geometric_rise, linear_rise, sideways};

#[test]
fn test_sma_insufficient_data() {
    let candles = geometric_rise(10);
    assert!(calculate_sma(&candles, 20).is_none());
    assert!(calculate_ema(&candles, 8).is_some());
}

#[test]
fn test_ema_seeded_with_sma() {
    let candles = from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let ema = calculate_ema(&candles, 8).unwrap();
    assert!((ema.value - 4.5).abs() < 1e-12);
    assert!(ema.price_distance_pct > 0.0);
}

#[test]
fn test_calculate_multiple_emas() {
    let candles = geometric_rise(60);
    let emas = calculate_emas(&candles, &EMA_PERIODS);
    assert_eq!(emas.len(), 3);
    assert!(emas[0].value > emas[1].value && emas[1].value > emas[2].value);
}

#[test]
fn test_moving_averages_rising_trend() {
    let ma = calculate_moving_averages(&geometric_rise(252)).unwrap();
    assert!(ma.sma_200.is_some());
    assert_eq!(ma.sma_trend, Signal::Bullish);
    assert!(!ma.golden_cross);
    assert!(!ma.death_cross);
}

#[test]
fn test_moving_averages_without_long_history() {
    let ma = calculate_moving_averages(&geometric_fall(60)).unwrap();
    assert!(ma.sma_200.is_none());
    assert_eq!(ma.sma_trend, Signal::Bearish);

    assert!(calculate_moving_averages(&flat(5, 100.0)).is_none());
}

#[test]
fn test_golden_cross_on_last_bar() {
    // 200 bars falling then a sharp rally: SMA50 climbs back over SMA200.
    let mut closes: Vec<f64> = (0..200).map(|i| 200.0 - i as f64 * 0.5).collect();
    let mut crossed_at = None;
    for step in 0..120 {
        closes.push(100.0 + step as f64 * 3.0);
        let candles = from_closes(&closes);
        if check_ma_cross(&candles, 50, 200) == Some(CrossoverType::Bullish) {
            crossed_at = Some(candles.len());
            let ma = calculate_moving_averages(&candles).unwrap();
            assert!(ma.golden_cross);
            break;
        }
    }
    let crossed_at = crossed_at.expect("SMA50 never crossed SMA200");

    // One bar later the cross is no longer fresh.
    closes.truncate(crossed_at);
    closes.push(closes[closes.len() - 1] + 3.0);
    let ma = calculate_moving_averages(&from_closes(&closes)).unwrap();
    assert!(!ma.golden_cross);
}

#[test]
fn test_macd_rising_is_bullish() {
    let macd = calculate_macd_default(&geometric_rise(252)).unwrap();
    assert!(macd.macd > 0.0);
    assert!(macd.histogram > 0.0);
    assert_eq!(macd.signal, Signal::Bullish);
    assert_eq!(macd.period, (12, 26, 9));
}

#[test]
fn test_macd_linear_rise_uses_line_sign() {
    // The signal line catches up with a constant-slope MACD line.
    let macd = calculate_macd_default(&linear_rise(252)).unwrap();
    assert!(macd.macd > 1.0);
    assert!(macd.histogram.abs() < 1e-6);
    assert_eq!(macd.signal, Signal::Bullish);
    assert_eq!(macd.crossover, CrossoverType::None);
}

/// First prefix length at which MACD reports `wanted` as a fresh cross
fn first_cross(closes: &[f64], wanted: CrossoverType) -> Option<usize> {
    let candles = from_closes(closes);
    (34..=candles.len()).find(|&n| {
        calculate_macd_default(&candles[..n]).map(|m| m.crossover) == Some(wanted)
    })
}

#[test]
fn test_macd_bullish_crossover_on_v_turn() {
    let mut closes: Vec<f64> = (0..60).map(|i| 150.0 - i as f64).collect();
    closes.extend((1..=40).map(|i| 91.0 + 2.0 * i as f64));

    let n = first_cross(&closes, CrossoverType::Bullish).expect("no bullish cross");
    assert!(n > 60);
    let candles = from_closes(&closes[..n]);
    let at = calculate_macd_default(&candles).unwrap();
    assert!(at.macd > at.signal_line);
    assert_eq!(at.signal, Signal::Bullish);

    // One bar later the cross is no longer fresh.
    let after = calculate_macd_default(&from_closes(&closes[..n + 1])).unwrap();
    assert_eq!(after.crossover, CrossoverType::None);
}

#[test]
fn test_macd_bearish_crossover_on_inverted_v() {
    let mut closes: Vec<f64> = (0..60).map(|i| 50.0 + i as f64).collect();
    closes.extend((1..=40).map(|i| 109.0 - 2.0 * i as f64));

    let n = first_cross(&closes, CrossoverType::Bearish).expect("no bearish cross");
    assert!(n > 60);
    let at = calculate_macd_default(&from_closes(&closes[..n])).unwrap();
    assert!(at.macd < at.signal_line);
    assert_eq!(at.signal, Signal::Bearish);
}

#[test]
fn test_macd_insufficient_data() {
    assert!(calculate_macd_default(&geometric_rise(33)).is_none());
    assert!(calculate_macd_default(&geometric_rise(34)).is_some());
}

#[test]
fn test_macd_flat_is_neutral() {
    let macd = calculate_macd_default(&flat(60, 100.0)).unwrap();
    assert_eq!(macd.signal, Signal::Neutral);
    assert_eq!(macd.crossover, CrossoverType::None);
}

#[test]
fn test_adx_strong_uptrend() {
    let adx = calculate_adx_default(&geometric_rise(100)).unwrap();
    assert_eq!(adx.strength, TrendStrength::Strong);
    assert!(adx.plus_di > adx.minus_di);
    assert_eq!(adx.signal, Signal::Bullish);
}

#[test]
fn test_adx_needs_two_periods() {
    assert!(calculate_adx_default(&geometric_rise(27)).is_none());
    assert!(calculate_adx_default(&geometric_rise(28)).is_some());
}

#[test]
fn test_adx_flat_is_weak() {
    let adx = calculate_adx_default(&flat(60, 100.0)).unwrap();
    assert_eq!(adx.strength, TrendStrength::Weak);
    assert_eq!(adx.signal, Signal::Neutral);
}

#[test]
fn test_parabolic_sar_warm_up() {
    assert!(calculate_parabolic_sar_default(&geometric_rise(SAR_MIN_BARS - 1)).is_none());
    let sar = calculate_parabolic_sar_default(&geometric_rise(SAR_MIN_BARS)).unwrap();
    assert_eq!(sar.trend, Signal::Bullish);
}

#[test]
fn test_parabolic_sar_trails_trend() {
    let candles = geometric_rise(120);
    let sar = calculate_parabolic_sar_default(&candles).unwrap();
    assert!(sar.value < candles.last().unwrap().low);
    assert_eq!(sar.signal, Signal::Bullish);
    assert!(!sar.flipped);

    let sar = calculate_parabolic_sar_default(&geometric_fall(120)).unwrap();
    assert_eq!(sar.trend, Signal::Bearish);
    assert_eq!(sar.signal, Signal::Bearish);
}

#[test]
fn test_parabolic_sar_flat_range_is_neutral() {
    // Constant close inside a fixed 99..101 range never sets a new extreme.
    let candles: Vec<_> = (0..40)
        .map(|i| {
            tickerscope::models::indicators::Candle::new(
                100.0,
                101.0,
                99.0,
                100.0,
                1_000_000.0,
                crate::support::day(i),
            )
        })
        .collect();
    let sar = calculate_parabolic_sar_default(&candles).unwrap();
    assert_eq!(sar.value, 99.0);
    assert_eq!(sar.signal, Signal::Neutral);
    assert!(!sar.flipped);
}

#[test]
fn test_parabolic_sar_flip_on_reversal() {
    let mut candles = geometric_rise(40);
    let last = candles.last().unwrap().clone();
    let crash = last.close * 0.8;
    candles.push(tickerscope::models::indicators::Candle::new(
        last.close,
        last.close,
        crash,
        crash,
        1_000_000.0,
        crate::support::day(40),
    ));
    let sar = calculate_parabolic_sar_default(&candles).unwrap();
    assert!(sar.flipped);
    assert_eq!(sar.trend, Signal::Bearish);
}

#[test]
fn test_aroon_trend_and_range() {
    let up = calculate_aroon_default(&geometric_rise(60)).unwrap();
    assert_eq!(up.up, 100.0);
    assert_eq!(up.signal, Signal::Bullish);

    let down = calculate_aroon_default(&geometric_fall(60)).unwrap();
    assert_eq!(down.down, 100.0);
    assert_eq!(down.signal, Signal::Bearish);

    let side = calculate_aroon_default(&sideways(60)).unwrap();
    assert!(side.oscillator.abs() <= 100.0);
    assert!(calculate_aroon_default(&sideways(25)).is_none());
}

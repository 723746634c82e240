//! Unit tests for momentum indicators

use tickerscope::indicators::momentum::*;
use tickerscope::models::indicators::{Signal, Zone};

use crate::support::{flat, from_closes, geometric_fall, geometric_rise, sideways};

#[test]
fn test_rsi_insufficient_data() {
    assert!(calculate_rsi_default(&geometric_rise(14)).is_none());
    assert!(calculate_rsi_default(&geometric_rise(15)).is_some());
}

#[test]
fn test_rsi_monotonic_rise_is_100() {
    let rsi = calculate_rsi_default(&geometric_rise(60)).unwrap();
    assert_eq!(rsi.value, 100.0);
    assert_eq!(rsi.zone, Zone::Overbought);
    assert_eq!(rsi.signal, Signal::Bearish);
}

#[test]
fn test_rsi_monotonic_fall_is_0() {
    let rsi = calculate_rsi_default(&geometric_fall(60)).unwrap();
    assert_eq!(rsi.value, 0.0);
    assert_eq!(rsi.zone, Zone::Oversold);
    assert_eq!(rsi.signal, Signal::Bullish);
}

#[test]
fn test_rsi_flat_is_50() {
    let rsi = calculate_rsi_default(&flat(30, 100.0)).unwrap();
    assert_eq!(rsi.value, 50.0);
    assert_eq!(rsi.zone, Zone::Neutral);
}

#[test]
fn test_rsi_stays_overbought_during_steady_rise() {
    let candles = geometric_rise(252);
    for end in (candles.len() - 30)..=candles.len() {
        let rsi = calculate_rsi_default(&candles[..end]).unwrap();
        assert!(rsi.value > 70.0, "RSI {} at bar {}", rsi.value, end);
    }
}

#[test]
fn test_rsi_wilder_smoothing() {
    // Alternating +1/-1 moves settle at equal average gain and loss.
    let closes: Vec<f64> = (0..61).map(|i| if i % 2 == 0 { 100.0 } else { 101.0 }).collect();
    let rsi = calculate_rsi_default(&from_closes(&closes)).unwrap();
    assert!((rsi.value - 50.0).abs() < 5.0);
}

#[test]
fn test_stochastic_range_and_flat() {
    let stoch = calculate_stochastic_default(&geometric_rise(40)).unwrap();
    assert!(stoch.k > 80.0);
    assert_eq!(stoch.zone, Zone::Overbought);

    let flat_stoch = calculate_stochastic_default(&flat(40, 100.0)).unwrap();
    assert_eq!(flat_stoch.k, 50.0);
    assert_eq!(flat_stoch.d, 50.0);

    assert!(calculate_stochastic_default(&geometric_rise(17)).is_none());
    assert!(calculate_stochastic_default(&geometric_rise(18)).is_some());
}

#[test]
fn test_stoch_rsi_bounds() {
    let stoch_rsi = calculate_stoch_rsi_default(&sideways(80)).unwrap();
    assert!((0.0..=100.0).contains(&stoch_rsi.k));
    assert!((0.0..=100.0).contains(&stoch_rsi.d));
    assert!(calculate_stoch_rsi_default(&sideways(31)).is_none());
}

#[test]
fn test_williams_r_zones() {
    let wr = calculate_williams_r_default(&geometric_rise(30)).unwrap();
    assert!(wr.value > -20.0);
    assert_eq!(wr.zone, Zone::Overbought);

    let wr = calculate_williams_r_default(&geometric_fall(30)).unwrap();
    assert!(wr.value < -80.0);
    assert_eq!(wr.signal, Signal::Bullish);
}

#[test]
fn test_roc_sign() {
    let closes: Vec<f64> = (0..11).map(|i| 100.0 + i as f64).collect();
    let roc = calculate_roc_default(&from_closes(&closes)).unwrap();
    assert!((roc.value - 10.0).abs() < 1e-9);
    assert_eq!(roc.signal, Signal::Bullish);

    let roc = calculate_roc_default(&flat(20, 50.0)).unwrap();
    assert_eq!(roc.signal, Signal::Neutral);
}

#[test]
fn test_mfi_extremes() {
    let mfi = calculate_mfi_default(&geometric_rise(30)).unwrap();
    assert_eq!(mfi.value, 100.0);
    assert_eq!(mfi.zone, Zone::Overbought);

    let mfi = calculate_mfi_default(&flat(30, 10.0)).unwrap();
    assert_eq!(mfi.value, 50.0);
}

#[test]
fn test_cci_trend_and_flat() {
    let cci = calculate_cci_default(&geometric_rise(40)).unwrap();
    assert!(cci.value > 100.0);
    assert_eq!(cci.signal, Signal::Bearish);

    let cci = calculate_cci_default(&flat(40, 10.0)).unwrap();
    assert_eq!(cci.value, 0.0);
    assert_eq!(cci.zone, Zone::Neutral);
}

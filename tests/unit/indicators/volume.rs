//! Unit tests for volume indicators

use tickerscope::indicators::volume::*;
use tickerscope::models::indicators::{Candle, Signal, VolumeLevel};

use crate::support::{day, flat, gap_up_on_heavy_volume, geometric_fall, geometric_rise};

fn with_last_volume(mut candles: Vec<Candle>, volume: f64) -> Vec<Candle> {
    if let Some(last) = candles.last_mut() {
        last.volume = volume;
    }
    candles
}

#[test]
fn test_volume_activity_levels() {
    let normal = calculate_volume_activity_default(&flat(30, 10.0)).unwrap();
    assert_eq!(normal.level, VolumeLevel::Normal);
    assert!((normal.ratio - 1.0).abs() < 1e-12);

    let high = calculate_volume_activity_default(&with_last_volume(flat(30, 10.0), 5_000_000.0)).unwrap();
    assert_eq!(high.level, VolumeLevel::High);

    let low = calculate_volume_activity_default(&with_last_volume(flat(30, 10.0), 100_000.0)).unwrap();
    assert_eq!(low.level, VolumeLevel::Low);

    assert!(calculate_volume_activity_default(&flat(19, 10.0)).is_none());
}

#[test]
fn test_obv_follows_price_direction() {
    let obv = calculate_obv(&geometric_rise(40)).unwrap();
    assert_eq!(obv.signal, Signal::Bullish);
    assert!((obv.slope - 1_000_000.0).abs() < 1e-3);

    let obv = calculate_obv(&geometric_fall(40)).unwrap();
    assert_eq!(obv.signal, Signal::Bearish);

    let obv = calculate_obv(&flat(40, 10.0)).unwrap();
    assert_eq!(obv.signal, Signal::Neutral);
    assert_eq!(obv.value, 0.0);

    assert!(calculate_obv(&flat(19, 10.0)).is_none());
}

#[test]
fn test_accumulation_distribution_and_vpt() {
    let ad = calculate_accumulation_distribution(&geometric_rise(40)).unwrap();
    assert_eq!(ad.signal, Signal::Bullish);

    let vpt = calculate_vpt(&geometric_fall(40)).unwrap();
    assert_eq!(vpt.signal, Signal::Bearish);
}

#[test]
fn test_money_flow_multiplier() {
    let at_high = Candle::new(10.0, 12.0, 8.0, 12.0, 1.0, day(0));
    let at_low = Candle::new(10.0, 12.0, 8.0, 8.0, 1.0, day(0));
    let no_range = Candle::new(10.0, 10.0, 10.0, 10.0, 1.0, day(0));
    assert_eq!(money_flow_multiplier(&at_high), 1.0);
    assert_eq!(money_flow_multiplier(&at_low), -1.0);
    assert_eq!(money_flow_multiplier(&no_range), 0.0);
}

#[test]
fn test_cmf_closes_near_high() {
    let cmf = calculate_cmf_default(&geometric_rise(40)).unwrap();
    assert!((cmf.value - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(cmf.signal, Signal::Bullish);

    let cmf = calculate_cmf_default(&flat(40, 10.0)).unwrap();
    assert_eq!(cmf.value, 0.0);
    assert_eq!(cmf.signal, Signal::Neutral);
}

#[test]
fn test_eom_direction() {
    let eom = calculate_eom_default(&geometric_rise(40)).unwrap();
    assert!(eom.value > 0.0);
    assert_eq!(eom.signal, Signal::Bullish);
    assert!(calculate_eom_default(&geometric_rise(14)).is_none());
}

#[test]
fn test_pvo_expands_on_volume_surge() {
    let mut candles = flat(60, 10.0);
    for (i, candle) in candles.iter_mut().enumerate().skip(50) {
        candle.volume = 1_000_000.0 * (1.0 + (i - 49) as f64);
    }
    let pvo = calculate_pvo_default(&candles).unwrap();
    assert!(pvo.pvo > 0.0);
    assert!(pvo.expanding);

    let steady = calculate_pvo_default(&flat(60, 10.0)).unwrap();
    assert!(steady.pvo.abs() < 1e-9);
    assert!(!steady.expanding);
}

#[test]
fn test_smart_money_on_gap_with_heavy_volume() {
    assert_eq!(detect_smart_money_default(&gap_up_on_heavy_volume()), Some(true));
}

#[test]
fn test_smart_money_requires_all_conditions() {
    // Heavy volume on a wide bullish bar is ordinary buying.
    let mut candles = gap_up_on_heavy_volume();
    let last = candles.len() - 1;
    candles[last] = Candle::new(101.0, 106.0, 100.5, 105.0, 3_000_000.0, day(60));
    assert_eq!(detect_smart_money_default(&candles), Some(false));

    // Divergent narrow bar without the volume.
    let mut candles = gap_up_on_heavy_volume();
    candles[last].volume = 1_200_000.0;
    assert_eq!(detect_smart_money_default(&candles), Some(false));

    assert_eq!(detect_smart_money_default(&flat(20, 10.0)), None);
}

//! Unit tests for OHLCV validation

use tickerscope::indicators::{validate_benchmark, validate_candles, IndicatorError};
use tickerscope::models::correlation::{BenchmarkSeries, PricePoint};
use tickerscope::models::indicators::Candle;

use crate::support::{day, flat};

#[test]
fn test_valid_series_passes() {
    assert!(validate_candles(&flat(10, 100.0)).is_ok());
}

#[test]
fn test_empty_series_rejected() {
    let err = validate_candles(&[]).unwrap_err();
    assert!(matches!(err, IndicatorError::InvalidInput(_)));
}

#[test]
fn test_high_below_low_rejected() {
    let mut candles = flat(5, 100.0);
    candles[2] = Candle::new(100.0, 99.0, 101.0, 100.0, 1000.0, day(2));
    assert!(matches!(
        validate_candles(&candles),
        Err(IndicatorError::InvalidInput(_))
    ));
}

#[test]
fn test_close_outside_range_rejected() {
    let mut candles = flat(5, 100.0);
    candles[4] = Candle::new(100.0, 101.0, 99.0, 102.0, 1000.0, day(4));
    assert!(validate_candles(&candles).is_err());
}

#[test]
fn test_non_positive_and_nan_prices_rejected() {
    let mut candles = flat(3, 100.0);
    candles[1].close = f64::NAN;
    assert!(validate_candles(&candles).is_err());

    let mut candles = flat(3, 100.0);
    candles[0] = Candle::new(0.0, 0.0, 0.0, 0.0, 10.0, day(0));
    assert!(validate_candles(&candles).is_err());
}

#[test]
fn test_negative_volume_rejected() {
    let mut candles = flat(3, 100.0);
    candles[2].volume = -1.0;
    assert!(validate_candles(&candles).is_err());
}

#[test]
fn test_dates_must_increase() {
    let mut candles = flat(3, 100.0);
    candles[2].date = candles[1].date;
    let err = validate_candles(&candles).unwrap_err();
    assert!(err.to_string().contains("bar 2"));
}

fn points(closes: &[(usize, f64)]) -> Vec<PricePoint> {
    closes
        .iter()
        .map(|&(i, close)| PricePoint { date: day(i), close })
        .collect()
}

#[test]
fn test_benchmark_sorted_by_date() {
    let series = BenchmarkSeries::new("SPY", points(&[(2, 102.0), (0, 100.0), (1, 101.0)]));
    let sorted = validate_benchmark(&series).unwrap();
    assert_eq!(sorted.symbol, "SPY");
    let dates: Vec<_> = sorted.points.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![day(0), day(1), day(2)]);
    assert_eq!(sorted.points[0].close, 100.0);
}

#[test]
fn test_benchmark_duplicate_date_rejected() {
    let series = BenchmarkSeries::new("SPY", points(&[(0, 100.0), (1, 101.0), (1, 101.5)]));
    assert!(matches!(
        validate_benchmark(&series),
        Err(IndicatorError::InvalidInput(_))
    ));
}

#[test]
fn test_benchmark_bad_close_rejected() {
    for bad in [f64::NAN, f64::INFINITY, 0.0, -3.0] {
        let series = BenchmarkSeries::new("SPY", points(&[(0, 100.0), (1, bad)]));
        assert!(matches!(
            validate_benchmark(&series),
            Err(IndicatorError::InvalidInput(_))
        ));
    }
}

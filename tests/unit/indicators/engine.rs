//! Unit tests for the indicator engine

use tickerscope::config::AnalysisConfig;
use tickerscope::indicators::{IndicatorEngine, IndicatorError};
use tickerscope::models::indicators::{Candle, Signal};

use crate::support::{day, flat, geometric_rise};

#[test]
fn test_short_series_omits_long_indicators() {
    let engine = IndicatorEngine::default();
    let set = engine.compute("AAPL", &geometric_rise(5)).unwrap();

    assert_eq!(set.symbol, "AAPL");
    assert_eq!(set.bars, 5);
    assert_eq!(set.as_of, day(4));
    assert!((set.price - 150.0).abs() < 1e-9);
    assert!(set.moving_averages.is_none());
    assert!(set.momentum.is_none());
    assert!(set.trend.is_none());
    assert!(set.volatility.is_none());
    assert!(set.volume.is_none());
    assert!(set.ichimoku.is_none());
    assert!(set.rsi().is_none());
    assert!(set.patterns.is_some());
    assert!(set.support_resistance.is_some());
}

#[test]
fn test_partial_history_keeps_short_windows() {
    let set = IndicatorEngine::default().compute("AAPL", &geometric_rise(30)).unwrap();

    let averages = set.moving_averages.as_ref().unwrap();
    assert!(averages.sma_20.is_some());
    assert!(averages.sma_50.is_none());
    assert!(averages.sma_200.is_none());
    assert!(set.rsi().is_some());
    assert!(set.macd().is_none());
    assert!(set.ichimoku.is_none());
}

#[test]
fn test_full_history_fills_every_block() {
    let set = IndicatorEngine::default().compute("AAPL", &geometric_rise(252)).unwrap();

    let averages = set.moving_averages.as_ref().unwrap();
    assert!(averages.sma_200.is_some());
    assert_eq!(averages.sma_trend, Signal::Bullish);

    let momentum = set.momentum.as_ref().unwrap();
    assert!(momentum.rsi.is_some() && momentum.stoch_rsi.is_some() && momentum.cci.is_some());

    let trend = set.trend.as_ref().unwrap();
    assert!(trend.macd.is_some() && trend.adx.is_some() && trend.aroon.is_some());
    assert!(trend.parabolic_sar.is_some());

    let volatility = set.volatility.as_ref().unwrap();
    assert!(volatility.bollinger.is_some() && volatility.historical.is_some());

    let volume = set.volume.as_ref().unwrap();
    assert!(volume.obv.is_some() && volume.pvo.is_some() && volume.smart_money.is_some());

    assert!(set.ichimoku.is_some());
    assert!(set.support_resistance.is_some());
}

#[test]
fn test_invalid_series_is_an_error() {
    let engine = IndicatorEngine::default();
    assert!(matches!(
        engine.compute("AAPL", &[]),
        Err(IndicatorError::InvalidInput(_))
    ));

    let mut candles = flat(10, 100.0);
    candles[5].date = day(2);
    assert!(matches!(
        engine.compute("AAPL", &candles),
        Err(IndicatorError::InvalidInput(_))
    ));

    let mut candles = flat(10, 100.0);
    candles[9] = Candle::new(100.0, 100.0, 100.0, f64::NAN, 1.0, day(9));
    assert!(engine.compute("AAPL", &candles).is_err());
}

#[test]
fn test_gap_threshold_from_config() {
    let candles = vec![
        Candle::new(100.0, 100.0, 100.0, 100.0, 1.0, day(0)),
        Candle::new(103.0, 103.0, 103.0, 103.0, 1.0, day(1)),
    ];

    let loose = IndicatorEngine::default().compute("X", &candles).unwrap();
    assert!(loose.patterns.unwrap().gap.unwrap().gap_up);

    let config = AnalysisConfig {
        gap_threshold: 0.05,
        ..AnalysisConfig::default()
    };
    let strict = IndicatorEngine::new(config).compute("X", &candles).unwrap();
    assert!(!strict.patterns.unwrap().gap.unwrap().gap_up);
}

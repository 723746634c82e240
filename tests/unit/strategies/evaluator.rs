//! Unit tests for the strategy combiner

use tickerscope::indicators::IndicatorEngine;
use tickerscope::models::indicators::*;
use tickerscope::models::strategy::{StrategyKind, StrategyResult, StrategySet};
use tickerscope::strategies::StrategyCombiner;

use crate::support::geometric_rise;

fn rsi(value: f64) -> RsiIndicator {
    RsiIndicator {
        value,
        period: 14,
        zone: Zone::classify(value, 30.0, 70.0),
        signal: Signal::Neutral,
    }
}

fn macd(signal: Signal) -> MacdIndicator {
    MacdIndicator {
        macd: signal.direction(),
        signal_line: 0.0,
        histogram: signal.direction(),
        period: (12, 26, 9),
        signal,
        crossover: CrossoverType::None,
    }
}

fn bollinger(zone: Zone) -> BollingerBandsIndicator {
    let percent_b = match zone {
        Zone::Overbought => 1.1,
        Zone::Oversold => -0.1,
        Zone::Neutral => 0.5,
    };
    BollingerBandsIndicator {
        upper: 110.0,
        middle: 100.0,
        lower: 90.0,
        period: 20,
        std_dev: 2.0,
        percent_b,
        bandwidth: 0.2,
        squeeze: None,
        zone,
        signal: Signal::Neutral,
    }
}

fn averages(trend: Signal, golden_cross: bool, death_cross: bool) -> MovingAverages {
    MovingAverages {
        sma_20: None,
        sma_50: None,
        sma_200: None,
        ema_8: None,
        ema_21: None,
        ema_55: None,
        sma_trend: trend,
        golden_cross,
        death_cross,
        signal: trend,
    }
}

fn activity(level: VolumeLevel) -> VolumeActivity {
    let ratio = match level {
        VolumeLevel::High => 2.0,
        VolumeLevel::Normal => 1.0,
        VolumeLevel::Low => 0.3,
    };
    VolumeActivity {
        volume: ratio * 1_000_000.0,
        average: 1_000_000.0,
        ratio,
        level,
    }
}

#[test]
fn test_rsi_macd_tiers() {
    let strong = StrategyCombiner::rsi_macd(&rsi(25.0), &macd(Signal::Bullish));
    assert_eq!(strong.label, "strong_buy");
    assert_eq!(strong.signal, Signal::Bullish);
    assert_eq!(strong.confidence, 85.0);
    assert!((strong.score - 8.5).abs() < 1e-12);

    let buy = StrategyCombiner::rsi_macd(&rsi(35.0), &macd(Signal::Bullish));
    assert_eq!(buy.label, "buy");
    assert_eq!(buy.confidence, 65.0);

    let sell = StrategyCombiner::rsi_macd(&rsi(75.0), &macd(Signal::Bearish));
    assert_eq!(sell.label, "strong_sell");

    let mild_sell = StrategyCombiner::rsi_macd(&rsi(65.0), &macd(Signal::Bearish));
    assert_eq!(mild_sell.label, "sell");
    assert_eq!(mild_sell.signal, Signal::Bearish);

    // Oversold RSI against a bearish MACD is not a call.
    let mixed = StrategyCombiner::rsi_macd(&rsi(25.0), &macd(Signal::Bearish));
    assert_eq!(mixed.label, "neutral");
    assert_eq!(mixed.confidence, 40.0);
    assert_eq!(mixed.contributing_indicators, vec!["rsi", "macd"]);
}

#[test]
fn test_bollinger_mean_reversion() {
    let strong = StrategyCombiner::bb_rsi_macd(
        &bollinger(Zone::Oversold),
        &rsi(25.0),
        &macd(Signal::Bullish),
    );
    assert_eq!(strong.label, "strong_mean_reversion_buy");
    assert_eq!(strong.confidence, 80.0);

    let plain = StrategyCombiner::bb_rsi_macd(
        &bollinger(Zone::Overbought),
        &rsi(75.0),
        &macd(Signal::Neutral),
    );
    assert_eq!(plain.label, "mean_reversion_sell");
    assert_eq!(plain.signal, Signal::Bearish);
    assert_eq!(plain.confidence, 65.0);

    let opposed = StrategyCombiner::bb_rsi_macd(
        &bollinger(Zone::Overbought),
        &rsi(75.0),
        &macd(Signal::Bullish),
    );
    assert_eq!(opposed.label, "neutral");
    assert_eq!(opposed.confidence, 45.0);

    let split = StrategyCombiner::bb_rsi_macd(
        &bollinger(Zone::Oversold),
        &rsi(50.0),
        &macd(Signal::Bullish),
    );
    assert_eq!(split.signal, Signal::Neutral);
}

#[test]
fn test_trend_crosses_with_volume() {
    let strong = StrategyCombiner::ma_rsi_volume(
        &averages(Signal::Bullish, true, false),
        &rsi(55.0),
        &activity(VolumeLevel::High),
        false,
    );
    assert_eq!(strong.label, "strong_trend_buy");
    assert_eq!(strong.confidence, 90.0);

    let smart_money = StrategyCombiner::ma_rsi_volume(
        &averages(Signal::Bearish, false, true),
        &rsi(45.0),
        &activity(VolumeLevel::Normal),
        true,
    );
    assert_eq!(smart_money.label, "strong_trend_sell");
    assert!(smart_money.reasoning.contains("smart-money"));

    let unconfirmed = StrategyCombiner::ma_rsi_volume(
        &averages(Signal::Neutral, true, false),
        &rsi(55.0),
        &activity(VolumeLevel::Normal),
        false,
    );
    assert_eq!(unconfirmed.label, "trend_buy");
    assert_eq!(unconfirmed.confidence, 65.0);
}

#[test]
fn test_trend_without_cross() {
    let trend = StrategyCombiner::ma_rsi_volume(
        &averages(Signal::Bullish, false, false),
        &rsi(60.0),
        &activity(VolumeLevel::Normal),
        false,
    );
    assert_eq!(trend.label, "trend_buy");
    assert_eq!(trend.confidence, 70.0);

    let weak = StrategyCombiner::ma_rsi_volume(
        &averages(Signal::Bearish, false, false),
        &rsi(45.0),
        &activity(VolumeLevel::Low),
        false,
    );
    assert_eq!(weak.label, "weak_trend_sell");
    assert_eq!(weak.confidence, 55.0);

    let stretched = StrategyCombiner::ma_rsi_volume(
        &averages(Signal::Bullish, false, false),
        &rsi(80.0),
        &activity(VolumeLevel::High),
        false,
    );
    assert_eq!(stretched.label, "neutral");
    assert_eq!(stretched.confidence, 50.0);
}

#[test]
fn test_overall_consensus() {
    let buy = StrategyCombiner::rsi_macd(&rsi(25.0), &macd(Signal::Bullish));
    let neutral = StrategyCombiner::rsi_macd(&rsi(50.0), &macd(Signal::Neutral));

    let set = StrategySet {
        rsi_macd: Some(buy.clone()),
        ma_rsi_volume: Some(buy),
        ..StrategySet::default()
    };
    let overall = StrategyCombiner::overall(&set).unwrap();
    assert_eq!(overall.signal, Signal::Bullish);
    assert_eq!(overall.strategies_evaluated, 2);
    assert!((overall.signal_strength - 85.0).abs() < 1e-9);

    // (0.85 + 0 + 0) / 3 is just under the threshold.
    let set = StrategySet {
        rsi_macd: Some(StrategyCombiner::rsi_macd(&rsi(25.0), &macd(Signal::Bullish))),
        bb_rsi_macd: Some(neutral.clone()),
        ma_rsi_volume: Some(neutral),
        overall: None,
    };
    let overall = StrategyCombiner::overall(&set).unwrap();
    assert_eq!(overall.signal, Signal::Neutral);
    assert!((overall.confidence - 55.0).abs() < 1e-9);

    assert!(StrategyCombiner::overall(&StrategySet::default()).is_none());
}

#[test]
fn test_evaluate_on_steady_uptrend() {
    let set = IndicatorEngine::default().compute("AAPL", &geometric_rise(252)).unwrap();
    let strategies = StrategyCombiner::evaluate(&set);

    let names: Vec<&str> = strategies.results().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["rsi_macd", "bb_rsi_macd", "ma_rsi_volume"]);
    // RSI pinned at 100 blocks every buy tier.
    assert!(strategies.results().iter().all(|r| r.signal == Signal::Neutral));
    assert_eq!(strategies.overall.as_ref().unwrap().signal, Signal::Neutral);
}

#[test]
fn test_evaluate_skips_missing_inputs() {
    let set = IndicatorEngine::default().compute("AAPL", &geometric_rise(12)).unwrap();
    let strategies = StrategyCombiner::evaluate(&set);
    assert!(strategies.is_empty());
    assert!(strategies.overall.is_none());
    assert!(strategies.get(StrategyKind::RsiMacd).is_none());
}

#[test]
fn test_result_confidence_is_clamped() {
    let result = StrategyResult::new(StrategyKind::RsiMacd, Signal::Bullish, "buy", 140.0, &[]);
    assert_eq!(result.confidence, 100.0);
    assert_eq!(result.reasoning, "no decisive conditions");
    assert!((result.directional_score() - 1.0).abs() < 1e-12);
}

//! Unit tests for the flat-file market data provider

use std::fs;
use tickerscope::services::{JsonFileProvider, MarketDataProvider};

use crate::support::geometric_rise;

fn provider_with(symbol: &str, bars: usize) -> (tempfile::TempDir, JsonFileProvider) {
    let dir = tempfile::tempdir().unwrap();
    let json = serde_json::to_string(&geometric_rise(bars)).unwrap();
    fs::write(dir.path().join(format!("{}.json", symbol)), json).unwrap();
    let provider = JsonFileProvider::new(dir.path());
    (dir, provider)
}

#[test]
fn test_reads_candles_oldest_first() {
    let (_dir, provider) = provider_with("AAPL", 30);
    let candles = provider.get_candles("AAPL", 100).unwrap();
    assert_eq!(candles.len(), 30);
    assert!(candles.windows(2).all(|w| w[0].date < w[1].date));
    let expected = geometric_rise(30);
    assert!(candles
        .iter()
        .zip(&expected)
        .all(|(a, b)| a.date == b.date && (a.close - b.close).abs() < 1e-9));
}

#[test]
fn test_limit_keeps_most_recent_bars() {
    let (_dir, provider) = provider_with("AAPL", 30);
    let candles = provider.get_candles("AAPL", 10).unwrap();
    assert_eq!(candles.len(), 10);
    let last = &geometric_rise(30)[29];
    assert_eq!(candles[9].date, last.date);
    assert!((candles[9].close - last.close).abs() < 1e-9);
}

#[test]
fn test_latest_price_and_benchmark() {
    let (_dir, provider) = provider_with("^GSPC", 30);
    let price = provider.get_latest_price("^GSPC").unwrap();
    assert!((price - 150.0).abs() < 1e-9);

    let benchmark = provider.get_benchmark("^GSPC", 20).unwrap();
    assert_eq!(benchmark.symbol, "^GSPC");
    assert_eq!(benchmark.points.len(), 20);
    assert!((benchmark.points[19].close - price).abs() < 1e-9);
}

#[test]
fn test_missing_and_malformed_files() {
    let (dir, provider) = provider_with("AAPL", 5);
    let err = provider.get_candles("MSFT", 10).unwrap_err();
    assert!(err.to_string().contains("failed to read"));

    fs::write(dir.path().join("BAD.json"), "{not json").unwrap();
    let err = provider.get_candles("BAD", 10).unwrap_err();
    assert!(err.to_string().contains("failed to parse"));

    fs::write(dir.path().join("EMPTY.json"), "[]").unwrap();
    assert!(provider.get_latest_price("EMPTY").is_err());
}

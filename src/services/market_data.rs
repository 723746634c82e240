//! Market data provider interface and a flat-file implementation.

use crate::models::correlation::BenchmarkSeries;
use crate::models::indicators::Candle;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait MarketDataProvider {
    /// Get historical candles for a symbol, oldest first, at most `limit` bars
    fn get_candles(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error>>;

    /// Get the latest price for a symbol
    fn get_latest_price(&self, symbol: &str) -> Result<f64, Box<dyn std::error::Error>>;

    /// Closes of a benchmark, for correlation analysis
    fn get_benchmark(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<BenchmarkSeries, Box<dyn std::error::Error>> {
        let candles = self.get_candles(symbol, limit)?;
        Ok(BenchmarkSeries::from_candles(symbol, &candles))
    }
}

/// Reads `<dir>/<SYMBOL>.json`, each holding a JSON array of candles
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    dir: PathBuf,
}

impl JsonFileProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{}.json", symbol))
    }

    /// Parse a candle file
    pub fn read_file(path: &Path) -> Result<Vec<Candle>, Box<dyn std::error::Error>> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        let candles: Vec<Candle> = serde_json::from_str(&raw)
            .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;
        Ok(candles)
    }
}

impl MarketDataProvider for JsonFileProvider {
    fn get_candles(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error>> {
        let path = self.path_for(symbol);
        let mut candles = Self::read_file(&path)?;
        if candles.len() > limit {
            candles.drain(..candles.len() - limit);
        }
        debug!(symbol = %symbol, bars = candles.len(), path = %path.display(), "loaded candles");
        Ok(candles)
    }

    fn get_latest_price(&self, symbol: &str) -> Result<f64, Box<dyn std::error::Error>> {
        let candles = Self::read_file(&self.path_for(symbol))?;
        candles
            .last()
            .map(|c| c.close)
            .ok_or_else(|| format!("no bars for {}", symbol).into())
    }
}

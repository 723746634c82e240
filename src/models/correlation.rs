//! Benchmark correlation data models

use crate::models::indicators::Candle;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Daily closes of a benchmark index or ETF, supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
}

impl BenchmarkSeries {
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Self {
        Self {
            symbol: symbol.into(),
            points,
        }
    }

    pub fn from_candles(symbol: impl Into<String>, candles: &[Candle]) -> Self {
        Self::new(
            symbol,
            candles
                .iter()
                .map(|c| PricePoint {
                    date: c.date,
                    close: c.close,
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::ShortTerm, Timeframe::MediumTerm, Timeframe::LongTerm];

    /// Number of most recent returns considered
    pub fn periods(self) -> usize {
        match self {
            Timeframe::ShortTerm => 20,
            Timeframe::MediumTerm => 50,
            Timeframe::LongTerm => 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkCategory {
    BroadMarket,
    SmallCap,
    International,
    Sectors,
    FixedIncome,
    Alternatives,
}

impl BenchmarkCategory {
    pub fn symbols(self) -> &'static [&'static str] {
        match self {
            BenchmarkCategory::BroadMarket => &["^GSPC", "^DJI", "^IXIC", "VTI", "QQQ"],
            BenchmarkCategory::SmallCap => &["^RUT"],
            BenchmarkCategory::International => &["EFA", "EEM"],
            BenchmarkCategory::Sectors => &[
                "XLF", "XLE", "XLK", "XLV", "XLI", "XLP", "XLY", "XLU", "XLRE", "XLB",
            ],
            BenchmarkCategory::FixedIncome => &["TLT", "HYG"],
            BenchmarkCategory::Alternatives => &["GLD", "VNQ"],
        }
    }

    pub const ALL: [BenchmarkCategory; 6] = [
        BenchmarkCategory::BroadMarket,
        BenchmarkCategory::SmallCap,
        BenchmarkCategory::International,
        BenchmarkCategory::Sectors,
        BenchmarkCategory::FixedIncome,
        BenchmarkCategory::Alternatives,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationSignal {
    HighMarketCorrelation,
    ModerateMarketCorrelation,
    LowMarketCorrelation,
    NegativeMarketCorrelation,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCorrelation {
    pub avg_correlation: f64,
    pub max_correlation: f64,
    pub min_correlation: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCorrelations {
    /// Up to three benchmarks, highest correlation first
    pub highest: Vec<(String, f64)>,
    /// Up to three benchmarks, lowest correlation last
    pub lowest: Vec<(String, f64)>,
}

/// Correlation of a series with its benchmarks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    pub correlations: BTreeMap<Timeframe, BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    pub correlation_signal: CorrelationSignal,
    pub diversification_score: f64,
    pub summary: BTreeMap<Timeframe, BTreeMap<BenchmarkCategory, CategoryCorrelation>>,
    pub top_correlations: BTreeMap<Timeframe, TopCorrelations>,
    pub recommendations: Vec<String>,
}

impl CorrelationReport {
    /// Risk inputs for the consensus confidence adjustment
    pub fn risk_context(&self) -> crate::models::signal::RiskContext {
        crate::models::signal::RiskContext::from_correlation(self)
    }
}

//! Correlation, beta and diversification against benchmark series

use crate::common::math;
use crate::config::{AnalysisConfig, CorrelationThresholds};
use crate::indicators::validation::validate_benchmark;
use crate::models::correlation::{
    BenchmarkCategory, BenchmarkSeries, CategoryCorrelation, CorrelationReport, CorrelationSignal,
    Timeframe, TopCorrelations,
};
use crate::models::indicators::Candle;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Bars required before correlations are attempted
pub const MIN_BARS: usize = 50;
/// A correlation needs more aligned returns than this
pub const MIN_ALIGNED_POINTS: usize = 10;
/// Beta needs more aligned returns than this
pub const MIN_BETA_POINTS: usize = 30;
pub const DEFAULT_DIVERSIFICATION_SCORE: f64 = 50.0;
const TOP_N: usize = 3;

type Returns = BTreeMap<NaiveDate, f64>;

/// Simple close-to-close returns keyed by the date of the later close
fn returns(points: impl Iterator<Item = (NaiveDate, f64)>) -> Returns {
    let points: Vec<(NaiveDate, f64)> = points.collect();
    points
        .windows(2)
        .filter(|pair| pair[0].1 > 0.0)
        .map(|pair| (pair[1].0, pair[1].1 / pair[0].1 - 1.0))
        .filter(|(_, r)| r.is_finite())
        .collect()
}

/// Inner join on date
fn align(stock: &[(NaiveDate, f64)], benchmark: &Returns) -> (Vec<f64>, Vec<f64>) {
    stock
        .iter()
        .filter_map(|(date, r)| benchmark.get(date).map(|b| (*r, *b)))
        .unzip()
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    math::mean(&values.collect::<Vec<_>>())
}

#[derive(Debug, Clone)]
pub struct CorrelationAnalyzer {
    thresholds: CorrelationThresholds,
    market_benchmark: String,
}

impl CorrelationAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            thresholds: config.correlation.clone(),
            market_benchmark: config.market_benchmark.clone(),
        }
    }

    /// Correlate the series' returns with each benchmark
    ///
    /// `None` with fewer than `MIN_BARS` bars or no benchmark holding enough
    /// returns.
    pub fn analyze(&self, candles: &[Candle], benchmarks: &[BenchmarkSeries]) -> Option<CorrelationReport> {
        if candles.len() < MIN_BARS {
            debug!(bars = candles.len(), required = MIN_BARS, "correlation skipped");
            return None;
        }

        let stock: Vec<(NaiveDate, f64)> =
            returns(candles.iter().map(|c| (c.date, c.close))).into_iter().collect();

        let benchmark_returns: BTreeMap<String, Returns> = benchmarks
            .iter()
            .filter_map(|b| match validate_benchmark(b) {
                Ok(series) => Some(series),
                Err(e) => {
                    debug!(benchmark = %b.symbol, error = %e, "benchmark rejected");
                    None
                }
            })
            .map(|b| {
                let r = returns(b.points.iter().map(|p| (p.date, p.close)));
                (b.symbol, r)
            })
            .filter(|(symbol, r)| {
                let usable = r.len() > MIN_ALIGNED_POINTS;
                if !usable {
                    debug!(benchmark = %symbol, points = r.len(), "benchmark skipped");
                }
                usable
            })
            .collect();
        if benchmark_returns.is_empty() {
            return None;
        }

        let mut correlations = BTreeMap::new();
        for timeframe in Timeframe::ALL {
            let recent = &stock[stock.len().saturating_sub(timeframe.periods())..];
            let mut values = BTreeMap::new();
            for (symbol, bench) in &benchmark_returns {
                let (a, b) = align(recent, bench);
                if a.len() <= MIN_ALIGNED_POINTS {
                    debug!(benchmark = %symbol, ?timeframe, aligned = a.len(), "insufficient aligned data");
                    continue;
                }
                if let Some(corr) = math::pearson_correlation(&a, &b) {
                    values.insert(symbol.clone(), corr);
                }
            }
            correlations.insert(timeframe, values);
        }

        let beta = benchmark_returns
            .get(&self.market_benchmark)
            .and_then(|market| self.beta(&stock, market));

        let correlation_signal = self.interpret(&correlations);
        let diversification_score = diversification_score(&correlations);
        let summary = summarize(&correlations);
        let top_correlations = top_correlations(&correlations);
        let recommendations = recommendations(&correlations);

        Some(CorrelationReport {
            correlations,
            beta,
            correlation_signal,
            diversification_score,
            summary,
            top_correlations,
            recommendations,
        })
    }

    /// cov(stock, market) / var(market) over all aligned returns
    fn beta(&self, stock: &[(NaiveDate, f64)], market: &Returns) -> Option<f64> {
        let (a, b) = align(stock, market);
        if a.len() <= MIN_BETA_POINTS {
            return None;
        }
        let covariance = math::sample_covariance(&a, &b)?;
        let variance = math::sample_variance(&b)?;
        if variance == 0.0 {
            return None;
        }
        math::finite(covariance / variance)
    }

    /// Classify the mean short-term correlation
    pub fn interpret(&self, correlations: &BTreeMap<Timeframe, BTreeMap<String, f64>>) -> CorrelationSignal {
        let Some(avg) = correlations
            .get(&Timeframe::ShortTerm)
            .and_then(|short| mean(short.values().copied()))
        else {
            return CorrelationSignal::Unknown;
        };

        if avg > self.thresholds.high {
            CorrelationSignal::HighMarketCorrelation
        } else if avg > self.thresholds.moderate {
            CorrelationSignal::ModerateMarketCorrelation
        } else if avg > self.thresholds.low {
            CorrelationSignal::LowMarketCorrelation
        } else {
            CorrelationSignal::NegativeMarketCorrelation
        }
    }
}

/// (1 - |mean medium-term correlation|) * 100, clamped to 0..=100
pub fn diversification_score(correlations: &BTreeMap<Timeframe, BTreeMap<String, f64>>) -> f64 {
    correlations
        .get(&Timeframe::MediumTerm)
        .and_then(|medium| mean(medium.values().copied()))
        .map(|avg| ((1.0 - avg.abs()) * 100.0).clamp(0.0, 100.0))
        .unwrap_or(DEFAULT_DIVERSIFICATION_SCORE)
}

/// Per-category statistics for each timeframe
pub fn summarize(
    correlations: &BTreeMap<Timeframe, BTreeMap<String, f64>>,
) -> BTreeMap<Timeframe, BTreeMap<BenchmarkCategory, CategoryCorrelation>> {
    correlations
        .iter()
        .map(|(timeframe, values)| {
            let categories = BenchmarkCategory::ALL
                .iter()
                .filter_map(|&category| {
                    let found: Vec<f64> = category
                        .symbols()
                        .iter()
                        .filter_map(|symbol| values.get(*symbol).copied())
                        .collect();
                    Some((
                        category,
                        CategoryCorrelation {
                            avg_correlation: math::mean(&found)?,
                            max_correlation: math::highest(&found)?,
                            min_correlation: math::lowest(&found)?,
                            count: found.len(),
                        },
                    ))
                })
                .collect();
            (*timeframe, categories)
        })
        .collect()
}

/// Three highest and three lowest correlations per timeframe
pub fn top_correlations(
    correlations: &BTreeMap<Timeframe, BTreeMap<String, f64>>,
) -> BTreeMap<Timeframe, TopCorrelations> {
    correlations
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(timeframe, values)| {
            let mut sorted: Vec<(String, f64)> =
                values.iter().map(|(s, v)| (s.clone(), *v)).collect();
            sorted.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            let highest = sorted.iter().take(TOP_N).cloned().collect();
            let lowest = sorted[sorted.len().saturating_sub(TOP_N)..].to_vec();
            (*timeframe, TopCorrelations { highest, lowest })
        })
        .collect()
}

fn category_mean(medium: &BTreeMap<String, f64>, category: BenchmarkCategory) -> Option<f64> {
    mean(
        category
            .symbols()
            .iter()
            .filter_map(|symbol| medium.get(*symbol).copied()),
    )
}

/// Diversification suggestions from medium-term correlations
pub fn recommendations(correlations: &BTreeMap<Timeframe, BTreeMap<String, f64>>) -> Vec<String> {
    let Some(medium) = correlations
        .get(&Timeframe::MediumTerm)
        .filter(|m| !m.is_empty())
    else {
        return vec!["Insufficient data for recommendations".to_string()];
    };

    let mut out = Vec::new();
    let negative: Vec<&str> = medium
        .iter()
        .filter(|(_, c)| **c < 0.0)
        .map(|(s, _)| s.as_str())
        .collect();
    let low: Vec<&str> = medium
        .iter()
        .filter(|(_, c)| **c < 0.3)
        .map(|(s, _)| s.as_str())
        .collect();

    if !negative.is_empty() {
        out.push(format!(
            "Consider adding {} for negative correlation benefits",
            negative.join(", ")
        ));
    }
    if !low.is_empty() {
        out.push(format!(
            "Low correlation assets for diversification: {}",
            low.join(", ")
        ));
    }
    if category_mean(medium, BenchmarkCategory::International).is_some_and(|c| c < 0.7) {
        out.push("International markets show good diversification potential".to_string());
    }
    if category_mean(medium, BenchmarkCategory::FixedIncome).is_some_and(|c| c < 0.5) {
        out.push("Fixed income assets provide good portfolio balance".to_string());
    }
    if category_mean(medium, BenchmarkCategory::Alternatives).is_some_and(|c| c < 0.6) {
        out.push("Alternative investments (Gold, REITs) offer diversification benefits".to_string());
    }
    if out.is_empty() {
        out.push(
            "Consider exploring assets with lower correlation to improve diversification".to_string(),
        );
    }
    out
}

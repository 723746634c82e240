//! Full analysis pipeline: validation, indicators, strategies, correlation, consensus.

use crate::analysis::correlation::CorrelationAnalyzer;
use crate::config::AnalysisConfig;
use crate::indicators::engine::IndicatorEngine;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_benchmark;
use crate::models::correlation::BenchmarkSeries;
use crate::models::indicators::Candle;
use crate::models::signal::TechnicalReport;
use crate::signals::aggregation::SignalAggregator;
use crate::strategies::evaluator::StrategyCombiner;
use tracing::info;

pub struct SignalEngine {
    indicators: IndicatorEngine,
    aggregator: SignalAggregator,
    correlation: CorrelationAnalyzer,
}

impl SignalEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            aggregator: SignalAggregator::new(config.aggregation.clone()),
            correlation: CorrelationAnalyzer::new(&config),
            indicators: IndicatorEngine::new(config),
        }
    }

    /// Analyze one series against optional benchmark series
    ///
    /// Malformed candles or benchmarks are an error; everything else degrades to absent
    /// indicators or a neutral call.
    pub fn analyze(
        &self,
        symbol: &str,
        candles: &[Candle],
        benchmarks: &[BenchmarkSeries],
    ) -> Result<TechnicalReport, IndicatorError> {
        let indicators = self.indicators.compute(symbol, candles)?;
        let benchmarks = benchmarks
            .iter()
            .map(validate_benchmark)
            .collect::<Result<Vec<_>, _>>()?;
        let strategies = StrategyCombiner::evaluate(&indicators);
        let correlation = self.correlation.analyze(candles, &benchmarks);
        let risk = correlation.as_ref().map(|report| report.risk_context());
        let aggregate = self.aggregator.aggregate(&indicators, &strategies, risk.as_ref());

        info!(
            symbol = %symbol,
            bars = candles.len(),
            signal = ?aggregate.overall_signal,
            confidence = aggregate.confidence,
            risk_adjusted = aggregate.risk_adjusted,
            "analysis complete"
        );

        Ok(TechnicalReport {
            overall_signal: aggregate.overall_signal,
            confidence: aggregate.confidence,
            indicators,
            strategic_combinations: strategies,
            aggregate,
            correlation,
        })
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

//! Consensus signal and report models

use crate::indicators::registry::IndicatorCategory;
use crate::models::correlation::{CorrelationReport, CorrelationSignal};
use crate::models::indicators::{IndicatorSet, Signal};
use crate::models::strategy::StrategySet;
use serde::{Deserialize, Serialize};

/// One vote in the consensus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalComponent {
    pub name: String,
    pub category: IndicatorCategory,
    pub signal: Signal,
    /// Weight after strategy-confidence scaling
    pub weight: f64,
}

/// Market-relative risk inputs for the confidence adjustment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    pub high_market_correlation: bool,
}

impl RiskContext {
    pub fn from_correlation(report: &CorrelationReport) -> Self {
        Self {
            beta: report.beta,
            high_market_correlation: report.correlation_signal
                == CorrelationSignal::HighMarketCorrelation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSignal {
    pub overall_signal: Signal,
    /// Always within the configured [min, max] confidence band
    pub confidence: f64,
    /// (bullish - bearish) / total, in -1..=1
    pub net_score: f64,
    pub bullish_weight: f64,
    pub bearish_weight: f64,
    pub neutral_weight: f64,
    pub total_weight: f64,
    pub components: Vec<SignalComponent>,
    pub risk_adjusted: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

/// Everything computed for one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalReport {
    #[serde(flatten)]
    pub indicators: IndicatorSet,
    pub strategic_combinations: StrategySet,
    pub overall_signal: Signal,
    pub confidence: f64,
    pub aggregate: AggregateSignal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<CorrelationReport>,
}

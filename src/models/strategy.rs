//! Multi-indicator strategy results

use crate::models::indicators::Signal;
use serde::{Deserialize, Serialize};

/// The fixed strategy combinations evaluated for every series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    RsiMacd,
    BollingerRsiMacd,
    MaRsiVolume,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::RsiMacd,
        StrategyKind::BollingerRsiMacd,
        StrategyKind::MaRsiVolume,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::RsiMacd => "rsi_macd",
            StrategyKind::BollingerRsiMacd => "bb_rsi_macd",
            StrategyKind::MaRsiVolume => "ma_rsi_volume",
        }
    }

    /// Indicators a strategy reads
    pub fn indicators(self) -> &'static [&'static str] {
        match self {
            StrategyKind::RsiMacd => &["rsi", "macd"],
            StrategyKind::BollingerRsiMacd => &["bollinger", "rsi", "macd"],
            StrategyKind::MaRsiVolume => &["moving_averages", "rsi", "volume"],
        }
    }
}

/// Outcome of one strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub name: String,
    pub signal: Signal,
    /// Strategy-specific call such as `strong_buy` or `mean_reversion_sell`.
    pub label: String,
    /// 0..=100
    pub confidence: f64,
    /// `confidence / 10`
    pub score: f64,
    pub contributing_indicators: Vec<String>,
    pub reasoning: String,
}

impl StrategyResult {
    pub fn new(
        kind: StrategyKind,
        signal: Signal,
        label: &str,
        confidence: f64,
        reasons: &[String],
    ) -> Self {
        let confidence = confidence.clamp(0.0, 100.0);
        let reasoning = if reasons.is_empty() {
            "no decisive conditions".to_string()
        } else {
            reasons.join("; ")
        };
        Self {
            name: kind.name().to_string(),
            signal,
            label: label.to_string(),
            confidence,
            score: confidence / 10.0,
            contributing_indicators: kind.indicators().iter().map(|s| s.to_string()).collect(),
            reasoning,
        }
    }

    /// +confidence/100 for bullish, -confidence/100 for bearish, 0 otherwise
    pub fn directional_score(&self) -> f64 {
        self.signal.direction() * self.confidence / 100.0
    }
}

/// Consensus across the strategies that could be evaluated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallStrategicSignal {
    pub signal: Signal,
    pub confidence: f64,
    /// |mean directional score| * 100
    pub signal_strength: f64,
    pub strategies_evaluated: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategySet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_macd: Option<StrategyResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_rsi_macd: Option<StrategyResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma_rsi_volume: Option<StrategyResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<OverallStrategicSignal>,
}

impl StrategySet {
    pub fn get(&self, kind: StrategyKind) -> Option<&StrategyResult> {
        match kind {
            StrategyKind::RsiMacd => self.rsi_macd.as_ref(),
            StrategyKind::BollingerRsiMacd => self.bb_rsi_macd.as_ref(),
            StrategyKind::MaRsiVolume => self.ma_rsi_volume.as_ref(),
        }
    }

    /// Present results in fixed strategy order
    pub fn results(&self) -> Vec<&StrategyResult> {
        StrategyKind::ALL
            .iter()
            .filter_map(|&kind| self.get(kind))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.results().is_empty()
    }
}

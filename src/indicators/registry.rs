//! Indicator registry and trait system

use crate::config::SignalWeights;
use crate::models::indicators::*;
use crate::models::strategy::StrategyResult;
use serde::{Deserialize, Serialize};

/// Weight class of a component in the consensus signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    Strategy,
    MovingAverage,
    Macd,
    TrendConfirmation,
    Momentum,
    Volatility,
    Volume,
}

/// Trait for indicator readings that can vote in the aggregate signal
pub trait Indicator {
    /// Get the category this indicator belongs to
    fn category(&self) -> IndicatorCategory;

    /// Directional reading of the indicator
    fn signal(&self) -> Signal;
}

/// Maps categories to their configured aggregation weight
#[derive(Debug, Clone)]
pub struct IndicatorRegistry {
    weights: SignalWeights,
}

impl IndicatorRegistry {
    /// Create a new registry with default weights
    pub fn new() -> Self {
        Self {
            weights: SignalWeights::default(),
        }
    }

    /// Create a new registry with custom weights
    pub fn with_weights(weights: SignalWeights) -> Self {
        Self { weights }
    }

    /// Get category weight multiplier
    pub fn category_weight(&self, category: IndicatorCategory) -> f64 {
        match category {
            IndicatorCategory::Strategy => self.weights.strategy,
            IndicatorCategory::MovingAverage => self.weights.moving_average,
            IndicatorCategory::Macd => self.weights.macd,
            IndicatorCategory::TrendConfirmation => self.weights.trend_confirmation,
            IndicatorCategory::Momentum => self.weights.momentum,
            IndicatorCategory::Volatility => self.weights.volatility,
            IndicatorCategory::Volume => self.weights.volume,
        }
    }

    /// Get all categories
    pub fn all_categories() -> Vec<IndicatorCategory> {
        vec![
            IndicatorCategory::Strategy,
            IndicatorCategory::MovingAverage,
            IndicatorCategory::Macd,
            IndicatorCategory::TrendConfirmation,
            IndicatorCategory::Momentum,
            IndicatorCategory::Volatility,
            IndicatorCategory::Volume,
        ]
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for MovingAverages {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::MovingAverage
    }

    fn signal(&self) -> Signal {
        self.sma_trend
    }
}

impl Indicator for MacdIndicator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Macd
    }

    fn signal(&self) -> Signal {
        self.signal
    }
}

impl Indicator for AdxIndicator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::TrendConfirmation
    }

    fn signal(&self) -> Signal {
        self.signal
    }
}

impl Indicator for ParabolicSarIndicator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::TrendConfirmation
    }

    fn signal(&self) -> Signal {
        self.signal
    }
}

impl Indicator for IchimokuCloud {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::TrendConfirmation
    }

    fn signal(&self) -> Signal {
        self.signal
    }
}

impl Indicator for RsiIndicator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Momentum
    }

    fn signal(&self) -> Signal {
        self.signal
    }
}

impl Indicator for BollingerBandsIndicator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Volatility
    }

    fn signal(&self) -> Signal {
        self.signal
    }
}

impl Indicator for CumulativeVolumeIndicator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Volume
    }

    fn signal(&self) -> Signal {
        self.signal
    }
}

impl Indicator for VolumeFlowIndicator {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Volume
    }

    fn signal(&self) -> Signal {
        self.signal
    }
}

impl Indicator for StrategyResult {
    fn category(&self) -> IndicatorCategory {
        IndicatorCategory::Strategy
    }

    fn signal(&self) -> Signal {
        self.signal
    }
}

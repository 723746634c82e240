//! Weighted consensus over strategies and indicator readings

use crate::config::AggregationConfig;
use crate::indicators::registry::IndicatorRegistry;
use crate::models::indicators::{IndicatorSet, Signal, VolatilityRegime};
use crate::models::signal::{AggregateSignal, RiskContext, SignalComponent};
use crate::models::strategy::StrategySet;
use crate::signals::categories::collect_components;
use crate::signals::scoring;
use tracing::debug;

/// Combines component votes into one signal with a confidence percentage
#[derive(Debug, Clone)]
pub struct SignalAggregator {
    config: AggregationConfig,
    registry: IndicatorRegistry,
}

impl SignalAggregator {
    pub fn new(config: AggregationConfig) -> Self {
        let registry = IndicatorRegistry::with_weights(config.weights.clone());
        Self { config, registry }
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Aggregate the indicator set and strategy results
    ///
    /// Never fails: with no directional votes the result is neutral at the
    /// minimum confidence.
    pub fn aggregate(
        &self,
        set: &IndicatorSet,
        strategies: &StrategySet,
        risk: Option<&RiskContext>,
    ) -> AggregateSignal {
        let components = collect_components(set, strategies, &self.registry);
        self.aggregate_components(components, set.volatility_regime(), risk)
    }

    /// Aggregate an explicit component list
    pub fn aggregate_components(
        &self,
        components: Vec<SignalComponent>,
        regime: Option<VolatilityRegime>,
        risk: Option<&RiskContext>,
    ) -> AggregateSignal {
        let cfg = &self.config;
        let weight_of = |side: Signal| -> f64 {
            components
                .iter()
                .filter(|c| c.signal == side)
                .map(|c| c.weight)
                .sum()
        };
        let bullish = weight_of(Signal::Bullish);
        let bearish = weight_of(Signal::Bearish);
        let neutral = weight_of(Signal::Neutral);
        let total = bullish + bearish + neutral;
        let directional = bullish + bearish;
        let net = scoring::net_score(bullish, bearish, total);

        let mut notes = Vec::new();

        if directional <= 0.0 {
            debug!(components = components.len(), "no directional components");
            notes.push("no directional components; defaulting to neutral".to_string());
            return AggregateSignal {
                overall_signal: Signal::Neutral,
                confidence: cfg.min_confidence,
                net_score: net,
                bullish_weight: bullish,
                bearish_weight: bearish,
                neutral_weight: neutral,
                total_weight: total,
                components,
                risk_adjusted: false,
                notes,
            };
        }

        let overall_signal = if net > cfg.signal_threshold {
            Signal::Bullish
        } else if net < -cfg.signal_threshold {
            Signal::Bearish
        } else {
            Signal::Neutral
        };

        let mut confidence = match overall_signal {
            Signal::Bullish => scoring::directional_confidence(bullish, directional, total),
            Signal::Bearish => scoring::directional_confidence(bearish, directional, total),
            Signal::Neutral => scoring::neutral_confidence(directional, total),
        };

        let mut risk_reasons = Vec::new();
        if regime == Some(VolatilityRegime::Increasing) {
            risk_reasons.push("volatility regime increasing".to_string());
        }
        if let Some(ctx) = risk {
            if let Some(beta) = ctx.beta.filter(|b| *b > cfg.high_beta_threshold) {
                risk_reasons.push(format!("high beta {:.2}", beta));
            }
            if ctx.high_market_correlation {
                risk_reasons.push("high market correlation".to_string());
            }
        }

        let risk_adjusted = !risk_reasons.is_empty();
        if risk_adjusted {
            confidence = scoring::apply_risk_penalty(confidence, cfg.risk_penalty);
            notes.push(format!("confidence reduced: {}", risk_reasons.join(", ")));
        }

        AggregateSignal {
            overall_signal,
            confidence: scoring::clamp_confidence(confidence, cfg.min_confidence, cfg.max_confidence),
            net_score: net,
            bullish_weight: bullish,
            bearish_weight: bearish,
            neutral_weight: neutral,
            total_weight: total,
            components,
            risk_adjusted,
            notes,
        }
    }
}

impl Default for SignalAggregator {
    fn default() -> Self {
        Self::new(AggregationConfig::default())
    }
}

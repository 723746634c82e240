//! Component catalog: which readings vote in the consensus and in which weight class

use crate::indicators::registry::{Indicator, IndicatorRegistry};
use crate::models::indicators::IndicatorSet;
use crate::models::signal::SignalComponent;
use crate::models::strategy::StrategySet;

pub const SMA_TREND: &str = "sma_trend";
pub const MACD: &str = "macd";
pub const ADX_DI: &str = "adx_di";
pub const ICHIMOKU: &str = "ichimoku";
pub const PARABOLIC_SAR: &str = "parabolic_sar";
pub const RSI: &str = "rsi";
pub const BOLLINGER: &str = "bollinger";
pub const OBV: &str = "obv";
pub const CMF: &str = "cmf";

fn component(
    name: &str,
    indicator: &dyn Indicator,
    scale: f64,
    registry: &IndicatorRegistry,
) -> SignalComponent {
    let category = indicator.category();
    SignalComponent {
        name: name.to_string(),
        category,
        signal: indicator.signal(),
        weight: registry.category_weight(category) * scale,
    }
}

/// Collect the voting components in a fixed order
///
/// Strategies come first, weighted by their confidence; absent indicators do
/// not vote at all.
pub fn collect_components(
    set: &IndicatorSet,
    strategies: &StrategySet,
    registry: &IndicatorRegistry,
) -> Vec<SignalComponent> {
    let mut components: Vec<SignalComponent> = strategies
        .results()
        .into_iter()
        .map(|result| component(&result.name, result, result.confidence / 100.0, registry))
        .collect();

    let indicators: [(&str, Option<&dyn Indicator>); 9] = [
        (SMA_TREND, set.moving_averages.as_ref().map(|m| m as &dyn Indicator)),
        (MACD, set.macd().map(|m| m as &dyn Indicator)),
        (ADX_DI, set.adx().map(|m| m as &dyn Indicator)),
        (ICHIMOKU, set.ichimoku.as_ref().map(|m| m as &dyn Indicator)),
        (PARABOLIC_SAR, set.parabolic_sar().map(|m| m as &dyn Indicator)),
        (RSI, set.rsi().map(|m| m as &dyn Indicator)),
        (BOLLINGER, set.bollinger().map(|m| m as &dyn Indicator)),
        (OBV, set.obv().map(|m| m as &dyn Indicator)),
        (CMF, set.cmf().map(|m| m as &dyn Indicator)),
    ];

    components.extend(
        indicators
            .into_iter()
            .filter_map(|(name, indicator)| indicator.map(|i| component(name, i, 1.0, registry))),
    );
    components
}

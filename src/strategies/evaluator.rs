//! Strategy combiner: fixed multi-indicator strategies over an indicator set

use crate::models::indicators::{
    BollingerBandsIndicator, IndicatorSet, MacdIndicator, MovingAverages, RsiIndicator, Signal,
    VolumeActivity, VolumeLevel, Zone,
};
use crate::models::strategy::{OverallStrategicSignal, StrategyKind, StrategyResult, StrategySet};
use tracing::debug;

/// Mean directional score beyond which the strategic consensus turns directional
pub const OVERALL_SIGNAL_THRESHOLD: f64 = 0.3;

pub struct StrategyCombiner;

impl StrategyCombiner {
    /// Evaluate every strategy whose inputs are present
    pub fn evaluate(set: &IndicatorSet) -> StrategySet {
        let mut strategies = StrategySet::default();

        match (set.rsi(), set.macd()) {
            (Some(rsi), Some(macd)) => {
                strategies.rsi_macd = Some(Self::rsi_macd(rsi, macd));
            }
            _ => debug!(strategy = StrategyKind::RsiMacd.name(), "strategy skipped, inputs missing"),
        }

        match (set.bollinger(), set.rsi(), set.macd()) {
            (Some(bb), Some(rsi), Some(macd)) => {
                strategies.bb_rsi_macd = Some(Self::bb_rsi_macd(bb, rsi, macd));
            }
            _ => debug!(
                strategy = StrategyKind::BollingerRsiMacd.name(),
                "strategy skipped, inputs missing"
            ),
        }

        match (set.moving_averages.as_ref(), set.rsi(), set.volume_activity()) {
            (Some(ma), Some(rsi), Some(activity)) => {
                strategies.ma_rsi_volume =
                    Some(Self::ma_rsi_volume(ma, rsi, activity, set.smart_money()));
            }
            _ => debug!(
                strategy = StrategyKind::MaRsiVolume.name(),
                "strategy skipped, inputs missing"
            ),
        }

        strategies.overall = Self::overall(&strategies);
        strategies
    }

    /// RSI + MACD momentum confirmation
    pub fn rsi_macd(rsi: &RsiIndicator, macd: &MacdIndicator) -> StrategyResult {
        let kind = StrategyKind::RsiMacd;
        let value = rsi.value;
        let reasons = |text: &str| vec![format!("RSI {:.1}", value), text.to_string()];

        match macd.signal {
            Signal::Bullish if value < 30.0 => StrategyResult::new(
                kind,
                Signal::Bullish,
                "strong_buy",
                85.0,
                &reasons("RSI oversold with bullish MACD"),
            ),
            Signal::Bearish if value > 70.0 => StrategyResult::new(
                kind,
                Signal::Bearish,
                "strong_sell",
                85.0,
                &reasons("RSI overbought with bearish MACD"),
            ),
            Signal::Bullish if value < 40.0 => StrategyResult::new(
                kind,
                Signal::Bullish,
                "buy",
                65.0,
                &reasons("RSI favorable with bullish MACD"),
            ),
            Signal::Bearish if value > 60.0 => StrategyResult::new(
                kind,
                Signal::Bearish,
                "sell",
                65.0,
                &reasons("RSI unfavorable with bearish MACD"),
            ),
            _ => StrategyResult::new(
                kind,
                Signal::Neutral,
                "neutral",
                40.0,
                &reasons("mixed or neutral RSI/MACD readings"),
            ),
        }
    }

    /// Bollinger Bands + RSI mean reversion, filtered by MACD
    pub fn bb_rsi_macd(
        bb: &BollingerBandsIndicator,
        rsi: &RsiIndicator,
        macd: &MacdIndicator,
    ) -> StrategyResult {
        let kind = StrategyKind::BollingerRsiMacd;
        let mut reasons = vec![format!("%B {:.2}", bb.percent_b), format!("RSI {:.1}", rsi.value)];

        let side = match (bb.zone, rsi.zone) {
            (Zone::Oversold, Zone::Oversold) => Signal::Bullish,
            (Zone::Overbought, Zone::Overbought) => Signal::Bearish,
            _ => Signal::Neutral,
        };

        if !side.is_directional() || macd.signal == side.opposite() {
            reasons.push("no clear BB/RSI/MACD convergence".to_string());
            return StrategyResult::new(kind, Signal::Neutral, "neutral", 45.0, &reasons);
        }

        let (zone_text, action) = match side {
            Signal::Bullish => ("oversold on both BB and RSI", "buy"),
            _ => ("overbought on both BB and RSI", "sell"),
        };
        reasons.push(zone_text.to_string());

        if macd.signal == side {
            reasons.push("MACD confirms".to_string());
            StrategyResult::new(
                kind,
                side,
                &format!("strong_mean_reversion_{}", action),
                80.0,
                &reasons,
            )
        } else {
            reasons.push("MACD not opposing".to_string());
            StrategyResult::new(kind, side, &format!("mean_reversion_{}", action), 65.0, &reasons)
        }
    }

    /// Moving-average trend + RSI + volume confirmation
    pub fn ma_rsi_volume(
        ma: &MovingAverages,
        rsi: &RsiIndicator,
        activity: &VolumeActivity,
        smart_money: bool,
    ) -> StrategyResult {
        let kind = StrategyKind::MaRsiVolume;
        let value = rsi.value;
        let confirmed = activity.level == VolumeLevel::High || smart_money;
        let low_volume = activity.level == VolumeLevel::Low;
        let mut reasons = vec![
            format!("RSI {:.1}", value),
            format!("volume ratio {:.2}", activity.ratio),
        ];
        if smart_money {
            reasons.push("smart-money activity".to_string());
        }

        if ma.golden_cross && value > 40.0 {
            return if confirmed {
                reasons.push("golden cross with volume confirmation".to_string());
                StrategyResult::new(kind, Signal::Bullish, "strong_trend_buy", 90.0, &reasons)
            } else {
                reasons.push("golden cross without volume confirmation".to_string());
                StrategyResult::new(kind, Signal::Bullish, "trend_buy", 65.0, &reasons)
            };
        }

        if ma.death_cross && value < 60.0 {
            return if confirmed {
                reasons.push("death cross with volume confirmation".to_string());
                StrategyResult::new(kind, Signal::Bearish, "strong_trend_sell", 90.0, &reasons)
            } else {
                reasons.push("death cross without volume confirmation".to_string());
                StrategyResult::new(kind, Signal::Bearish, "trend_sell", 65.0, &reasons)
            };
        }

        match ma.sma_trend {
            Signal::Bullish if value < 70.0 => {
                if low_volume {
                    reasons.push("bullish SMA trend on low volume".to_string());
                    StrategyResult::new(kind, Signal::Bullish, "weak_trend_buy", 55.0, &reasons)
                } else {
                    reasons.push("bullish SMA trend with favorable RSI and volume".to_string());
                    StrategyResult::new(kind, Signal::Bullish, "trend_buy", 70.0, &reasons)
                }
            }
            Signal::Bearish if value > 30.0 => {
                if low_volume {
                    reasons.push("bearish SMA trend on low volume".to_string());
                    StrategyResult::new(kind, Signal::Bearish, "weak_trend_sell", 55.0, &reasons)
                } else {
                    reasons.push("bearish SMA trend with unfavorable RSI and volume".to_string());
                    StrategyResult::new(kind, Signal::Bearish, "trend_sell", 70.0, &reasons)
                }
            }
            _ => {
                reasons.push("no clear MA/RSI/volume alignment".to_string());
                StrategyResult::new(kind, Signal::Neutral, "neutral", 50.0, &reasons)
            }
        }
    }

    /// Mean of the directional scores of the present strategies
    pub fn overall(strategies: &StrategySet) -> Option<OverallStrategicSignal> {
        let results = strategies.results();
        if results.is_empty() {
            return None;
        }

        let count = results.len() as f64;
        let mean_score = results.iter().map(|r| r.directional_score()).sum::<f64>() / count;
        let mean_confidence = results.iter().map(|r| r.confidence).sum::<f64>() / count;

        let signal = if mean_score > OVERALL_SIGNAL_THRESHOLD {
            Signal::Bullish
        } else if mean_score < -OVERALL_SIGNAL_THRESHOLD {
            Signal::Bearish
        } else {
            Signal::Neutral
        };

        Some(OverallStrategicSignal {
            signal,
            confidence: mean_confidence,
            signal_strength: mean_score.abs() * 100.0,
            strategies_evaluated: results.len(),
        })
    }
}

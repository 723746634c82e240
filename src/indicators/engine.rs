//! Indicator engine: validates a series and computes every indicator block.

use crate::config::AnalysisConfig;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_candles;
use crate::indicators::{ichimoku, momentum, patterns, structure, trend, volatility, volume};
use crate::models::indicators::*;
use tracing::debug;

/// Computes the latest reading of every indicator for one series
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    config: AnalysisConfig,
}

/// Log why an indicator is missing and pass the result through.
fn record<T>(name: &'static str, required: usize, bars: usize, value: Option<T>) -> Option<T> {
    if value.is_none() {
        let reason = if bars < required {
            IndicatorError::insufficient(name, required, bars)
        } else {
            IndicatorError::NonFinite(name)
        };
        debug!(indicator = name, reason = %reason, "indicator omitted");
    }
    value
}

impl IndicatorEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Compute the indicator set for `candles`
    ///
    /// Only malformed input is an error. Indicators without enough history are
    /// left out, and blocks with nothing in them are `None`.
    pub fn compute(&self, symbol: &str, candles: &[Candle]) -> Result<IndicatorSet, IndicatorError> {
        validate_candles(candles)?;
        let last = candles
            .last()
            .ok_or_else(|| IndicatorError::invalid_input("empty price series"))?;
        let bars = candles.len();

        let mut set = IndicatorSet::new(symbol.to_string(), last.close, bars, last.date);

        set.moving_averages = record(
            "moving_averages",
            8,
            bars,
            trend::calculate_moving_averages(candles),
        );

        let momentum = MomentumIndicators {
            rsi: record("rsi", 15, bars, momentum::calculate_rsi_default(candles)),
            stochastic: record("stochastic", 18, bars, momentum::calculate_stochastic_default(candles)),
            stoch_rsi: record("stoch_rsi", 32, bars, momentum::calculate_stoch_rsi_default(candles)),
            williams_r: record("williams_r", 14, bars, momentum::calculate_williams_r_default(candles)),
            roc: record("roc", 11, bars, momentum::calculate_roc_default(candles)),
            mfi: record("mfi", 15, bars, momentum::calculate_mfi_default(candles)),
            cci: record("cci", 20, bars, momentum::calculate_cci_default(candles)),
        };
        set.momentum = (!momentum.is_empty()).then_some(momentum);

        let trend = TrendIndicators {
            macd: record("macd", 34, bars, trend::calculate_macd_default(candles)),
            adx: record("adx", 28, bars, trend::calculate_adx_default(candles)),
            parabolic_sar: record(
                "parabolic_sar",
                trend::SAR_MIN_BARS,
                bars,
                trend::calculate_parabolic_sar_default(candles),
            ),
            aroon: record("aroon", 26, bars, trend::calculate_aroon_default(candles)),
        };
        set.trend = (!trend.is_empty()).then_some(trend);

        let volatility = VolatilityIndicators {
            bollinger: record(
                "bollinger",
                20,
                bars,
                volatility::calculate_bollinger_bands_default(candles),
            ),
            atr: record("atr", 15, bars, volatility::calculate_atr_default(candles)),
            keltner: record("keltner", 20, bars, volatility::calculate_keltner_default(candles)),
            donchian: record("donchian", 21, bars, volatility::calculate_donchian_default(candles)),
            historical: record(
                "historical_volatility",
                volatility::LONG_TERM_PERIOD + 1,
                bars,
                volatility::calculate_historical_volatility(candles),
            ),
        };
        set.volatility = (!volatility.is_empty()).then_some(volatility);

        let volume = VolumeIndicators {
            activity: record(
                "volume_activity",
                20,
                bars,
                volume::calculate_volume_activity_default(candles),
            ),
            obv: record("obv", volume::SLOPE_WINDOW, bars, volume::calculate_obv(candles)),
            accumulation_distribution: record(
                "accumulation_distribution",
                volume::SLOPE_WINDOW,
                bars,
                volume::calculate_accumulation_distribution(candles),
            ),
            cmf: record("cmf", 20, bars, volume::calculate_cmf_default(candles)),
            vpt: record("vpt", volume::SLOPE_WINDOW, bars, volume::calculate_vpt(candles)),
            eom: record("eom", 15, bars, volume::calculate_eom_default(candles)),
            pvo: record("pvo", 34, bars, volume::calculate_pvo_default(candles)),
            smart_money: record(
                "smart_money",
                volume::SMART_MONEY_LOOKBACK + 1,
                bars,
                volume::detect_smart_money_default(candles),
            ),
        };
        set.volume = (!volume.is_empty()).then_some(volume);

        set.ichimoku = record(
            "ichimoku",
            ichimoku::ICHIMOKU_MIN_BARS,
            bars,
            ichimoku::calculate_ichimoku(candles),
        );
        set.patterns = patterns::detect_patterns(candles, self.config.gap_threshold);
        set.support_resistance = record(
            "support_resistance",
            2,
            bars,
            structure::calculate_support_resistance(candles),
        );

        Ok(set)
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: f64, date: NaiveDate) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    pub fn upper_wick(&self) -> f64 {
        self.high - self.open.max(self.close)
    }

    pub fn lower_wick(&self) -> f64 {
        self.open.min(self.close) - self.low
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

/// Directional call shared by every indicator, strategy and the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl Signal {
    /// +1 for bullish, -1 for bearish, 0 for neutral.
    pub fn direction(self) -> f64 {
        match self {
            Signal::Bullish => 1.0,
            Signal::Bearish => -1.0,
            Signal::Neutral => 0.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Signal::Bullish => Signal::Bearish,
            Signal::Bearish => Signal::Bullish,
            Signal::Neutral => Signal::Neutral,
        }
    }

    pub fn is_directional(self) -> bool {
        self != Signal::Neutral
    }
}

/// Oscillator band classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Overbought,
    Oversold,
    #[default]
    Neutral,
}

impl Zone {
    /// `value > upper` is overbought, `value < lower` is oversold.
    pub fn classify(value: f64, lower: f64, upper: f64) -> Self {
        if value > upper {
            Zone::Overbought
        } else if value < lower {
            Zone::Oversold
        } else {
            Zone::Neutral
        }
    }

    /// Oversold readings lean bullish, overbought readings lean bearish.
    pub fn signal(self) -> Signal {
        match self {
            Zone::Oversold => Signal::Bullish,
            Zone::Overbought => Signal::Bearish,
            Zone::Neutral => Signal::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverType {
    Bullish,
    Bearish,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendStrength {
    Strong,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityRegime {
    Increasing,
    Decreasing,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelPosition {
    Above,
    Inside,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeLevel {
    High,
    Normal,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapDirection {
    Up,
    Down,
    None,
}

// ---------------------------------------------------------------------------
// Moving averages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverage {
    pub period: u32,
    pub value: f64,
    /// Distance of the current price from the average, in percent.
    pub price_distance_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_20: Option<MovingAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_50: Option<MovingAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_200: Option<MovingAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_8: Option<MovingAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_21: Option<MovingAverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_55: Option<MovingAverage>,
    pub sma_trend: Signal,
    pub golden_cross: bool,
    pub death_cross: bool,
    pub signal: Signal,
}

// ---------------------------------------------------------------------------
// Momentum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
    pub zone: Zone,
    pub signal: Signal,
}

/// Shared shape for %K/%D oscillators (Stochastic, Stochastic RSI).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StochasticIndicator {
    pub k: f64,
    pub d: f64,
    pub zone: Zone,
    pub signal: Signal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorIndicator {
    pub value: f64,
    pub period: u32,
    pub zone: Zone,
    pub signal: Signal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocIndicator {
    pub value: f64,
    pub period: u32,
    pub signal: Signal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MomentumIndicators {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<RsiIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stochastic: Option<StochasticIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stoch_rsi: Option<StochasticIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub williams_r: Option<OscillatorIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roc: Option<RocIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfi: Option<OscillatorIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cci: Option<OscillatorIndicator>,
}

impl MomentumIndicators {
    pub fn is_empty(&self) -> bool {
        self.rsi.is_none()
            && self.stochastic.is_none()
            && self.stoch_rsi.is_none()
            && self.williams_r.is_none()
            && self.roc.is_none()
            && self.mfi.is_none()
            && self.cci.is_none()
    }
}

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal_line: f64,
    pub histogram: f64,
    pub period: (u32, u32, u32),
    /// MACD line relative to its signal line; the sign of the MACD line once the two converge.
    pub signal: Signal,
    /// Cross of the MACD line over its signal line on the latest bar.
    pub crossover: CrossoverType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdxIndicator {
    pub value: f64,
    pub plus_di: f64,
    pub minus_di: f64,
    pub period: u32,
    pub strength: TrendStrength,
    pub di_trend: Signal,
    pub signal: Signal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParabolicSarIndicator {
    pub value: f64,
    /// Bullish while the SAR trails below price (long trend).
    pub trend: Signal,
    /// Trend reversed on the latest bar.
    pub flipped: bool,
    pub signal: Signal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AroonIndicator {
    pub up: f64,
    pub down: f64,
    pub oscillator: f64,
    pub period: u32,
    pub signal: Signal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendIndicators {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adx: Option<AdxIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parabolic_sar: Option<ParabolicSarIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aroon: Option<AroonIndicator>,
}

impl TrendIndicators {
    pub fn is_empty(&self) -> bool {
        self.macd.is_none()
            && self.adx.is_none()
            && self.parabolic_sar.is_none()
            && self.aroon.is_none()
    }
}

// ---------------------------------------------------------------------------
// Volatility
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: u32,
    pub std_dev: f64,
    /// Position of price inside the bands, 0 at the lower band and 1 at the upper.
    pub percent_b: f64,
    /// (upper - lower) / middle.
    pub bandwidth: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squeeze: Option<bool>,
    pub zone: Zone,
    pub signal: Signal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub value: f64,
    pub period: u32,
    pub percent: f64,
    pub high_volatility: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub position: ChannelPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalVolatility {
    /// Annualized stdev of log returns over the standard window.
    pub annualized: f64,
    pub short_term: f64,
    pub long_term: f64,
    pub regime: VolatilityRegime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolatilityIndicators {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerBandsIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atr: Option<AtrIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keltner: Option<ChannelIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donchian: Option<ChannelIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical: Option<HistoricalVolatility>,
}

impl VolatilityIndicators {
    pub fn is_empty(&self) -> bool {
        self.bollinger.is_none()
            && self.atr.is_none()
            && self.keltner.is_none()
            && self.donchian.is_none()
            && self.historical.is_none()
    }
}

// ---------------------------------------------------------------------------
// Volume
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeActivity {
    pub volume: f64,
    pub average: f64,
    pub ratio: f64,
    pub level: VolumeLevel,
}

/// Running-total volume lines (OBV, A/D, VPT) with a slope-based trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeVolumeIndicator {
    pub value: f64,
    pub slope: f64,
    pub signal: Signal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeFlowIndicator {
    pub value: f64,
    pub period: u32,
    pub signal: Signal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvoIndicator {
    pub pvo: f64,
    pub signal_line: f64,
    pub histogram: f64,
    pub expanding: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeIndicators {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<VolumeActivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obv: Option<CumulativeVolumeIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accumulation_distribution: Option<CumulativeVolumeIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmf: Option<VolumeFlowIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpt: Option<CumulativeVolumeIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eom: Option<VolumeFlowIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pvo: Option<PvoIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_money: Option<bool>,
}

impl VolumeIndicators {
    pub fn is_empty(&self) -> bool {
        self.activity.is_none()
            && self.obv.is_none()
            && self.accumulation_distribution.is_none()
            && self.cmf.is_none()
            && self.vpt.is_none()
            && self.eom.is_none()
            && self.pvo.is_none()
            && self.smart_money.is_none()
    }
}

// ---------------------------------------------------------------------------
// Ichimoku
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IchimokuCloud {
    pub conversion_line: f64,
    pub base_line: f64,
    /// Cloud under the current bar (spans projected 26 bars ago).
    pub span_a: f64,
    pub span_b: f64,
    /// Spans computed on the current bar, projected 26 bars ahead.
    pub leading_span_a: f64,
    pub leading_span_b: f64,
    pub lagging_span: f64,
    pub lagging_confirmation: Signal,
    pub cloud_color: Signal,
    pub price_vs_cloud: ChannelPosition,
    pub tk_cross: Signal,
    pub signal: Signal,
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapIndicator {
    pub direction: GapDirection,
    /// |open - prior close| / prior close.
    pub size: f64,
    pub gap_up: bool,
    pub gap_down: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSignals {
    pub doji: bool,
    pub hammer: bool,
    pub hanging_man: bool,
    pub shooting_star: bool,
    pub bullish_engulfing: bool,
    pub bearish_engulfing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<GapIndicator>,
    pub signal: Signal,
}

// ---------------------------------------------------------------------------
// Support / resistance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub label: String,
    pub price: f64,
    /// Signed distance from the current price, in percent (positive above).
    pub distance_pct: f64,
}

impl PriceLevel {
    pub fn new(label: impl Into<String>, price: f64, current_price: f64) -> Self {
        let distance_pct = if current_price != 0.0 {
            (price - current_price) / current_price * 100.0
        } else {
            0.0
        };
        Self {
            label: label.into(),
            price,
            distance_pct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotPoints {
    pub pivot: f64,
    pub resistance: [f64; 3],
    pub support: [f64; 3],
    pub nearest_resistance: PriceLevel,
    pub nearest_support: PriceLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibonacciLevels {
    pub swing_high: f64,
    pub swing_low: f64,
    pub levels: Vec<PriceLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportResistance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivots: Option<PivotPoints>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub dynamic_support: Vec<PriceLevel>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub dynamic_resistance: Vec<PriceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fibonacci: Option<FibonacciLevels>,
}

impl SupportResistance {
    pub fn is_empty(&self) -> bool {
        self.pivots.is_none()
            && self.dynamic_support.is_empty()
            && self.dynamic_resistance.is_empty()
            && self.fibonacci.is_none()
    }
}

// ---------------------------------------------------------------------------
// Indicator set
// ---------------------------------------------------------------------------

/// Latest indicator readings for one series. Absent blocks had too little history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub symbol: String,
    pub price: f64,
    pub bars: usize,
    pub as_of: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moving_averages: Option<MovingAverages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momentum: Option<MomentumIndicators>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendIndicators>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility: Option<VolatilityIndicators>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeIndicators>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ichimoku: Option<IchimokuCloud>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<PatternSignals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_resistance: Option<SupportResistance>,
}

impl IndicatorSet {
    pub fn new(symbol: String, price: f64, bars: usize, as_of: NaiveDate) -> Self {
        Self {
            symbol,
            price,
            bars,
            as_of,
            moving_averages: None,
            momentum: None,
            trend: None,
            volatility: None,
            volume: None,
            ichimoku: None,
            patterns: None,
            support_resistance: None,
        }
    }

    pub fn rsi(&self) -> Option<&RsiIndicator> {
        self.momentum.as_ref()?.rsi.as_ref()
    }

    pub fn macd(&self) -> Option<&MacdIndicator> {
        self.trend.as_ref()?.macd.as_ref()
    }

    pub fn adx(&self) -> Option<&AdxIndicator> {
        self.trend.as_ref()?.adx.as_ref()
    }

    pub fn parabolic_sar(&self) -> Option<&ParabolicSarIndicator> {
        self.trend.as_ref()?.parabolic_sar.as_ref()
    }

    pub fn bollinger(&self) -> Option<&BollingerBandsIndicator> {
        self.volatility.as_ref()?.bollinger.as_ref()
    }

    pub fn volatility_regime(&self) -> Option<VolatilityRegime> {
        Some(self.volatility.as_ref()?.historical.as_ref()?.regime)
    }

    pub fn obv(&self) -> Option<&CumulativeVolumeIndicator> {
        self.volume.as_ref()?.obv.as_ref()
    }

    pub fn cmf(&self) -> Option<&VolumeFlowIndicator> {
        self.volume.as_ref()?.cmf.as_ref()
    }

    pub fn volume_activity(&self) -> Option<&VolumeActivity> {
        self.volume.as_ref()?.activity.as_ref()
    }

    pub fn smart_money(&self) -> bool {
        self.volume
            .as_ref()
            .and_then(|v| v.smart_money)
            .unwrap_or(false)
    }
}

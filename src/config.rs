//! Explicit configuration objects.
//!
//! Process-level settings are read once from the environment (and an optional
//! `.env` file) into [`Config`]; analysis tuning lives in [`AnalysisConfig`],
//! which is passed into the engines at construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// LLM backends the report writer can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    OpenAi,
    Gemini,
    Claude,
    Groq,
    Local,
}

impl LlmProvider {
    /// Fallback order when the configured default has no credentials.
    pub const FALLBACK_ORDER: [LlmProvider; 4] = [
        LlmProvider::OpenAi,
        LlmProvider::Claude,
        LlmProvider::Groq,
        LlmProvider::Gemini,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "openai",
            LlmProvider::Gemini => "gemini",
            LlmProvider::Claude => "claude",
            LlmProvider::Groq => "groq",
            LlmProvider::Local => "local",
        }
    }

    /// Environment variable holding the provider's API key.
    pub fn api_key_var(self) -> Option<&'static str> {
        match self {
            LlmProvider::OpenAi => Some("OPENAI_API_KEY"),
            LlmProvider::Gemini => Some("GEMINI_API_KEY"),
            LlmProvider::Claude => Some("CLAUDE_API_KEY"),
            LlmProvider::Groq => Some("GROQ_API_KEY"),
            LlmProvider::Local => None,
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(LlmProvider::OpenAi),
            "gemini" => Ok(LlmProvider::Gemini),
            "claude" => Ok(LlmProvider::Claude),
            "groq" => Ok(LlmProvider::Groq),
            "local" => Ok(LlmProvider::Local),
            other => Err(format!("unknown LLM provider: {}", other)),
        }
    }
}

/// Aggregation weight per component class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    pub strategy: f64,
    pub moving_average: f64,
    pub macd: f64,
    pub trend_confirmation: f64,
    pub momentum: f64,
    pub volatility: f64,
    pub volume: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            strategy: 3.0,
            moving_average: 2.0,
            macd: 2.0,
            trend_confirmation: 1.5,
            momentum: 1.0,
            volatility: 1.0,
            volume: 1.0,
        }
    }
}

/// Cut-offs for classifying mean benchmark correlation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationThresholds {
    pub high: f64,
    pub moderate: f64,
    pub low: f64,
}

impl Default for CorrelationThresholds {
    fn default() -> Self {
        Self {
            high: 0.7,
            moderate: 0.3,
            low: -0.3,
        }
    }
}

/// Tuning for the aggregation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    pub weights: SignalWeights,
    /// |net score| above which the overall call becomes directional.
    pub signal_threshold: f64,
    pub min_confidence: f64,
    pub max_confidence: f64,
    /// Confidence multiplier applied once when risk is elevated.
    pub risk_penalty: f64,
    pub high_beta_threshold: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            weights: SignalWeights::default(),
            signal_threshold: 0.15,
            min_confidence: 5.0,
            max_confidence: 95.0,
            risk_penalty: 0.8,
            high_beta_threshold: 1.5,
        }
    }
}

/// Everything the analysis pipeline needs, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub aggregation: AggregationConfig,
    pub correlation: CorrelationThresholds,
    /// Benchmark symbol used for beta.
    pub market_benchmark: String,
    /// Minimum |open - prior close| / prior close to flag a gap.
    pub gap_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            aggregation: AggregationConfig::default(),
            correlation: CorrelationThresholds::default(),
            market_benchmark: "^GSPC".to_string(),
            gap_threshold: 0.02,
        }
    }
}

/// Process configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub log_level: String,
    pub llm_provider: Option<LlmProvider>,
    pub api_keys: BTreeMap<LlmProvider, String>,
    pub cache_duration_secs: u64,
    pub technical_analysis_period: usize,
    pub sentiment_analysis_enabled: bool,
    pub fundamental_analysis_enabled: bool,
    pub reports_dir: String,
    /// Directory of `<SYMBOL>.json` candle files.
    pub data_dir: String,
    pub analysis: AnalysisConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            log_level: "info".to_string(),
            llm_provider: None,
            api_keys: BTreeMap::new(),
            cache_duration_secs: 3600,
            technical_analysis_period: 252,
            sentiment_analysis_enabled: true,
            fundamental_analysis_enabled: true,
            reports_dir: "./reports".to_string(),
            data_dir: "./data".to_string(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mut api_keys = BTreeMap::new();
        for provider in LlmProvider::FALLBACK_ORDER {
            if let Some(key) = provider
                .api_key_var()
                .and_then(|var| lookup(var))
                .filter(|k| !k.trim().is_empty())
            {
                api_keys.insert(provider, key);
            }
        }

        let requested = lookup("DEFAULT_LLM_PROVIDER")
            .map(|raw| {
                raw.parse::<LlmProvider>().unwrap_or_else(|e| {
                    warn!(error = %e, "falling back to openai");
                    LlmProvider::OpenAi
                })
            })
            .unwrap_or(LlmProvider::OpenAi);
        let llm_provider = resolve_provider(requested, &api_keys);

        Self {
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
            log_level: lookup("LOG_LEVEL")
                .map(|l| l.to_ascii_lowercase())
                .unwrap_or(defaults.log_level),
            llm_provider,
            api_keys,
            cache_duration_secs: parse_or(&lookup, "CACHE_DURATION", defaults.cache_duration_secs),
            technical_analysis_period: parse_or(
                &lookup,
                "TECHNICAL_ANALYSIS_PERIOD",
                defaults.technical_analysis_period,
            ),
            sentiment_analysis_enabled: flag_or(
                &lookup,
                "SENTIMENT_ANALYSIS_ENABLED",
                defaults.sentiment_analysis_enabled,
            ),
            fundamental_analysis_enabled: flag_or(
                &lookup,
                "FUNDAMENTAL_ANALYSIS_ENABLED",
                defaults.fundamental_analysis_enabled,
            ),
            reports_dir: lookup("REPORTS_DIR").unwrap_or(defaults.reports_dir),
            data_dir: lookup("DATA_DIR").unwrap_or(defaults.data_dir),
            analysis: defaults.analysis,
        }
    }

    /// API key for the selected provider, if it needs one.
    pub fn llm_api_key(&self) -> Option<&str> {
        self.llm_provider
            .and_then(|p| self.api_keys.get(&p))
            .map(String::as_str)
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

fn resolve_provider(
    requested: LlmProvider,
    api_keys: &BTreeMap<LlmProvider, String>,
) -> Option<LlmProvider> {
    if requested == LlmProvider::Local || api_keys.contains_key(&requested) {
        return Some(requested);
    }
    let fallback = LlmProvider::FALLBACK_ORDER
        .into_iter()
        .find(|p| api_keys.contains_key(p));
    match fallback {
        Some(provider) => {
            warn!(
                requested = %requested,
                selected = %provider,
                "default LLM provider has no API key, switching"
            );
            Some(provider)
        }
        None => {
            warn!("no LLM API keys configured, AI analysis disabled");
            None
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "invalid numeric setting, using default");
            default
        }),
        None => default,
    }
}

fn flag_or<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| raw.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

//! Shared data models spanning the engine layers.

pub mod correlation;
pub mod indicators;
pub mod signal;
pub mod strategy;

pub use correlation::{BenchmarkSeries, CorrelationReport, PricePoint};
pub use indicators::{Candle, IndicatorSet, Signal};
pub use signal::{AggregateSignal, RiskContext, SignalComponent, TechnicalReport};
pub use strategy::{OverallStrategicSignal, StrategyKind, StrategyResult, StrategySet};

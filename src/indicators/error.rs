//! Indicator error types.

use thiserror::Error;

/// Errors raised while validating a series or computing an indicator.
///
/// Only `InvalidInput` escapes the engine; the other variants describe why an
/// individual indicator was left out of the result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// The indicator's lookback window exceeds the available bars.
    #[error("insufficient data for {indicator}: need {required} bars, got {actual}")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        actual: usize,
    },

    /// Malformed or non-chronological OHLCV series.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The computation produced NaN or infinity.
    #[error("non-finite result for {0}")]
    NonFinite(&'static str),
}

impl IndicatorError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        IndicatorError::InvalidInput(msg.into())
    }

    pub fn insufficient(indicator: &'static str, required: usize, actual: usize) -> Self {
        IndicatorError::InsufficientData {
            indicator,
            required,
            actual,
        }
    }
}

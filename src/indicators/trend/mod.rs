//! Trend indicators: moving averages, MACD, ADX, Parabolic SAR, Aroon

pub mod moving_average;
pub mod macd;
pub mod adx;
pub mod parabolic_sar;
pub mod aroon;

pub use moving_average::*;
pub use macd::*;
pub use adx::*;
pub use parabolic_sar::*;
pub use aroon::*;

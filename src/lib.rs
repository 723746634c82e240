//! Technical analysis core: indicators, multi-indicator strategies and a
//! weighted consensus signal for daily OHLCV series.

pub mod analysis;
pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
pub mod strategies;

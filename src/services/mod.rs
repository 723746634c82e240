//! Data source seams.

pub mod market_data;

pub use market_data::{JsonFileProvider, MarketDataProvider};

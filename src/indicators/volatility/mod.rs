//! Volatility indicators: Bollinger Bands, ATR, Keltner/Donchian channels, realized volatility

pub mod bollinger;
pub mod atr;
pub mod channels;
pub mod historical;

pub use bollinger::*;
pub use atr::*;
pub use channels::*;
pub use historical::*;

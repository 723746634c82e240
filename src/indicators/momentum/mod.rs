//! Momentum indicators: RSI, Stochastic, Williams %R, ROC, MFI, CCI

pub mod rsi;
pub mod stochastic;
pub mod williams_r;
pub mod roc;
pub mod mfi;
pub mod cci;

pub use rsi::*;
pub use stochastic::*;
pub use williams_r::*;
pub use roc::*;
pub use mfi::*;
pub use cci::*;

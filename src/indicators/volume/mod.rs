//! Volume indicators: activity, OBV, A/D, CMF, VPT, EOM, PVO, smart money

pub mod activity;
pub mod cumulative;
pub mod flow;
pub mod pvo;
pub mod smart_money;

pub use activity::*;
pub use cumulative::*;
pub use flow::*;
pub use pvo::*;
pub use smart_money::*;

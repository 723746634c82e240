//! Market-relative analysis fed into the consensus risk adjustment.

pub mod correlation;

pub use correlation::CorrelationAnalyzer;

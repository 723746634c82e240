//! Multi-indicator strategies evaluated over a computed indicator set.

pub mod evaluator;

pub use evaluator::StrategyCombiner;

//! Signal aggregation and the end-to-end analysis pipeline.

pub mod aggregation;
pub mod categories;
pub mod scoring;
pub mod engine;

pub use aggregation::SignalAggregator;
pub use categories::*;
pub use scoring::*;
pub use engine::SignalEngine;

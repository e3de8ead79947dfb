//! Trend classification, per-timeframe summaries and cross-timeframe consensus.

pub mod consensus;
pub mod engine;
pub mod timeframe;
pub mod trend;

pub use consensus::*;
pub use engine::*;
pub use timeframe::*;
pub use trend::*;

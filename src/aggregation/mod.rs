//! Candle aggregation: fixed-count and calendar-aligned regrouping.

pub mod candles;
pub mod timeframe;

pub use candles::*;
pub use timeframe::*;

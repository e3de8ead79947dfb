//! Shared data models spanning the engine layers.

pub mod analysis;
pub mod candle;
pub mod indicators;
pub mod prediction;

pub use analysis::{SrLevels, TimeframeSummary, TrendDirection, TrendResult};
pub use candle::{validate_series, Candle};
pub use indicators::{
    BarBias, BarRange, BollingerBands, HistogramPoint, IndicatorPoint, MacdSeries, VolumePoint,
};
pub use prediction::{
    validate_multiplier, Horizon, PredictionReport, PredictionResult, TimeframeBreakdown,
    TradeLeg,
};

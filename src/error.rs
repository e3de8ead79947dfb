//! Error types shared by the analysis pipeline.

use crate::aggregation::Timeframe;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Boxed error returned by market-data collaborators.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("insufficient data: {available} candles available, {required} required")]
    InsufficientData { required: usize, available: usize },

    #[error("no market data available for prediction")]
    NoDataAvailable,

    #[error("invalid {name} multiplier: {value}")]
    InvalidMultiplier { name: &'static str, value: f64 },

    #[error("invalid candle at {time}: {reason}")]
    InvalidCandle { time: i64, reason: String },

    #[error("candles out of order: {next} follows {previous}")]
    UnorderedCandles { previous: i64, next: i64 },

    #[error("duplicate analysis group label: {label}")]
    DuplicateGroup { label: String },

    #[error("market data provider failed for {timeframe}: {source}")]
    Provider {
        timeframe: Timeframe,
        #[source]
        source: ProviderError,
    },
}

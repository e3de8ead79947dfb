//! Per-timeframe summary: ATR, trend, and swing levels over one candle series.

use crate::aggregation::Timeframe;
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::indicators::structure::find_support_resistance;
use crate::indicators::volatility::calculate_atr;
use crate::models::analysis::TimeframeSummary;
use crate::models::Candle;
use crate::signals::trend::detect_trend;

/// Summarise one timeframe. Fails with [`AnalysisError::InsufficientData`]
/// below `consensus.min_candles`; callers drop such timeframes.
pub fn analyze_timeframe(
    timeframe: Timeframe,
    candles: &[Candle],
    config: &AnalysisConfig,
) -> Result<TimeframeSummary> {
    let required = config.consensus.min_candles;
    let last = match candles.last() {
        Some(last) if candles.len() >= required => last,
        _ => {
            return Err(AnalysisError::InsufficientData {
                required,
                available: candles.len(),
            })
        }
    };

    Ok(TimeframeSummary {
        timeframe,
        atr: calculate_atr(candles, &config.atr),
        trend: detect_trend(candles, &config.trend),
        sr: find_support_resistance(candles, &config.swing),
        last_close: last.close,
        last_high: last.high,
        last_low: last.low,
    })
}

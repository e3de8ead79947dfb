//! ATR (Average True Range) indicator

use crate::common::math;
use crate::config::AtrParams;
use crate::models::Candle;

/// Calculate ATR (Average True Range)
///
/// Simple mean of the most recent `period` true ranges (no Wilder smoothing).
/// Returns 0 when fewer than `period + 1` candles are available.
pub fn calculate_atr(candles: &[Candle], params: &AtrParams) -> f64 {
    let period = params.period as usize;
    if period == 0 || candles.len() < period + 1 {
        return 0.0;
    }

    let tr_values = true_ranges(candles);
    math::sma(&tr_values, period).unwrap_or(0.0)
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(candles: &[Candle]) -> f64 {
    calculate_atr(candles, &AtrParams::default())
}

/// True range of every candle after the first.
pub fn true_ranges(candles: &[Candle]) -> Vec<f64> {
    candles
        .windows(2)
        .map(|pair| math::true_range(pair[1].high, pair[1].low, pair[0].close))
        .collect()
}

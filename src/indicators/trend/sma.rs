//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::indicators::IndicatorPoint;
use crate::models::Candle;

/// Mean of the last `period` closes at every bar where that many are available.
pub fn calculate_sma(candles: &[Candle], period: u32) -> Vec<IndicatorPoint> {
    let period = period as usize;
    if period == 0 || candles.len() < period {
        return Vec::new();
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    closes
        .windows(period)
        .zip(&candles[period - 1..])
        .filter_map(|(window, candle)| {
            math::sma(window, period).map(|value| IndicatorPoint::new(candle.time, value))
        })
        .collect()
}

//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::IndicatorPoint;
use crate::models::Candle;

/// EMA of closes, seeded with the SMA of the first `period` closes.
///
/// The first point is stamped with the time of candle `period - 1`; nothing is
/// produced for shorter inputs.
pub fn calculate_ema(candles: &[Candle], period: u32) -> Vec<IndicatorPoint> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    align(&closes, candles.iter().map(|c| c.time), period)
}

/// Calculate multiple EMAs at once, keyed by period.
pub fn calculate_emas(candles: &[Candle], periods: &[u32]) -> Vec<(u32, Vec<IndicatorPoint>)> {
    periods
        .iter()
        .map(|&period| (period, calculate_ema(candles, period)))
        .collect()
}

/// EMA applied to an already derived series (e.g. the MACD line).
pub fn ema_of_points(points: &[IndicatorPoint], period: u32) -> Vec<IndicatorPoint> {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    align(&values, points.iter().map(|p| p.time), period)
}

fn align<I>(values: &[f64], times: I, period: u32) -> Vec<IndicatorPoint>
where
    I: Iterator<Item = i64>,
{
    let series = math::ema_series(values, period as usize);
    if series.is_empty() {
        return Vec::new();
    }
    times
        .skip(period as usize - 1)
        .zip(series)
        .map(|(time, value)| IndicatorPoint::new(time, value))
        .collect()
}

//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::config::RsiParams;
use crate::models::indicators::IndicatorPoint;
use crate::models::Candle;

/// Calculate the RSI series
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Averages are seeded with the plain mean of the first `period` changes and
/// then follow Wilder smoothing. The first point lands on candle `period`.
pub fn calculate_rsi(candles: &[Candle], params: &RsiParams) -> Vec<IndicatorPoint> {
    let period = params.period as usize;
    if period == 0 || candles.len() < period + 1 {
        return Vec::new();
    }

    let mut gains = Vec::with_capacity(candles.len() - 1);
    let mut losses = Vec::with_capacity(candles.len() - 1);
    for pair in candles.windows(2) {
        let change = pair[1].close - pair[0].close;
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let mut avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period as f64;

    let mut result = Vec::with_capacity(gains.len() - period + 1);
    result.push(IndicatorPoint::new(
        candles[period].time,
        rsi_value(avg_gain, avg_loss),
    ));

    for i in period..gains.len() {
        avg_gain = math::wilder_smooth(avg_gain, gains[i], period);
        avg_loss = math::wilder_smooth(avg_loss, losses[i], period);
        result.push(IndicatorPoint::new(
            candles[i + 1].time,
            rsi_value(avg_gain, avg_loss),
        ));
    }

    result
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Vec<IndicatorPoint> {
    calculate_rsi(candles, &RsiParams::default())
}

/// RSI from smoothed averages. A zero average loss saturates at 100, even when
/// there were no gains either.
pub fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    (100.0 - (100.0 / (1.0 + rs))).clamp(0.0, 100.0)
}

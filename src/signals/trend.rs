//! EMA-pair trend classification.

use crate::common::math;
use crate::config::TrendParams;
use crate::models::analysis::{TrendDirection, TrendResult};
use crate::models::Candle;

/// Classify the trend of a candle series from its fast/slow EMA pair.
///
/// The EMAs start from the first close, so every non-empty series gets a
/// reading even when it is shorter than the slow period.
pub fn detect_trend(candles: &[Candle], params: &TrendParams) -> TrendResult {
    let Some(last) = candles.last() else {
        return TrendResult::neutral();
    };

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast = math::running_ema(&closes, params.fast_period as usize);
    let slow = math::running_ema(&closes, params.slow_period as usize);

    match (fast.last(), slow.last()) {
        (Some(&fast), Some(&slow)) => classify_trend(fast, slow, last.close, params),
        _ => TrendResult::neutral(),
    }
}

/// Direction and strength from the latest EMA values and close.
///
/// - fast > slow and close > slow: bull, `min(1, |diff| * aligned_scale)`
/// - fast < slow and close < slow: bear, same strength
/// - otherwise bull when `diff > 0` and bear when it is not, capped at
///   `mixed_cap`
///
/// where `diff = (fast - slow) / close`.
pub fn classify_trend(fast: f64, slow: f64, close: f64, params: &TrendParams) -> TrendResult {
    if !(close.is_finite() && close > 0.0 && fast.is_finite() && slow.is_finite()) {
        return TrendResult::neutral();
    }

    let diff = (fast - slow) / close;
    let aligned_strength = (diff.abs() * params.aligned_scale).min(1.0);

    if fast > slow && close > slow {
        TrendResult {
            direction: TrendDirection::Bull,
            strength: aligned_strength,
        }
    } else if fast < slow && close < slow {
        TrendResult {
            direction: TrendDirection::Bear,
            strength: aligned_strength,
        }
    } else {
        // a zero spread falls on the bear side
        let direction = if diff > 0.0 {
            TrendDirection::Bull
        } else {
            TrendDirection::Bear
        };
        TrendResult {
            direction,
            strength: (diff.abs() * params.mixed_scale).min(params.mixed_cap),
        }
    }
}

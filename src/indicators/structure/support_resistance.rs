//! Support and Resistance levels detection

use crate::config::SwingParams;
use crate::models::analysis::SrLevels;
use crate::models::indicators::IndicatorPoint;
use crate::models::Candle;

/// Local extremes found in a candle window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwingPoints {
    pub highs: Vec<IndicatorPoint>,
    pub lows: Vec<IndicatorPoint>,
}

/// Find swing highs and lows.
///
/// A bar is a swing high when its high is strictly above the highs of the
/// `half_width` bars on each side, and a swing low symmetrically. Bars without
/// a full neighbourhood are never swing points. A `half_width` of 0 is
/// treated as 1, since a bar with no neighbours would always qualify.
pub fn find_swing_points(candles: &[Candle], half_width: usize) -> SwingPoints {
    let mut points = SwingPoints::default();
    let half_width = half_width.max(1);
    if candles.len() < half_width.saturating_mul(2).saturating_add(1) {
        return points;
    }

    for i in half_width..candles.len() - half_width {
        let bar = &candles[i];
        let neighbours = candles[i - half_width..=i + half_width]
            .iter()
            .enumerate()
            .filter(|(offset, _)| *offset != half_width)
            .map(|(_, c)| c);

        let (mut is_high, mut is_low) = (true, true);
        for other in neighbours {
            is_high &= bar.high > other.high;
            is_low &= bar.low < other.low;
        }

        if is_high {
            points.highs.push(IndicatorPoint::new(bar.time, bar.high));
        }
        if is_low {
            points.lows.push(IndicatorPoint::new(bar.time, bar.low));
        }
    }

    points
}

/// Calculate support and resistance levels
///
/// Scans the last `lookback` candles for swing points. Swing highs above the
/// last close become resistance (ascending), swing lows below it become
/// support (descending); the first `depth` of each are kept.
pub fn find_support_resistance(candles: &[Candle], params: &SwingParams) -> SrLevels {
    let Some(last) = candles.last() else {
        return SrLevels::default();
    };
    let last_close = last.close;

    let lookback = params.lookback.min(candles.len());
    let recent = &candles[candles.len() - lookback..];
    let swings = find_swing_points(recent, params.half_width);

    let mut resistance: Vec<f64> = swings
        .highs
        .iter()
        .map(|p| p.value)
        .filter(|&h| h > last_close)
        .collect();
    resistance.sort_by(|a, b| a.total_cmp(b));

    let mut support: Vec<f64> = swings
        .lows
        .iter()
        .map(|p| p.value)
        .filter(|&l| l < last_close)
        .collect();
    support.sort_by(|a, b| b.total_cmp(a));

    resistance.truncate(params.depth);
    support.truncate(params.depth);

    SrLevels {
        support: support.first().copied(),
        resistance: resistance.first().copied(),
        all_support: support,
        all_resistance: resistance,
    }
}

/// Calculate support/resistance with default window (±2 bars, 50 lookback, 3 levels)
pub fn find_support_resistance_default(candles: &[Candle]) -> SrLevels {
    find_support_resistance(candles, &SwingParams::default())
}

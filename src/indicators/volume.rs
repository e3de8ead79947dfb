//! Volume series tagged by bar direction.

use crate::models::indicators::{BarBias, VolumePoint};
use crate::models::Candle;

pub fn calculate_volume(candles: &[Candle]) -> Vec<VolumePoint> {
    candles
        .iter()
        .map(|c| VolumePoint {
            time: c.time,
            value: c.volume,
            bias: if c.is_bullish() {
                BarBias::Up
            } else {
                BarBias::Down
            },
        })
        .collect()
}

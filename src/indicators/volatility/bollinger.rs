//! Bollinger Bands indicator

use crate::common::math;
use crate::config::BollingerParams;
use crate::models::indicators::{BollingerBands, IndicatorPoint};
use crate::models::Candle;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * population standard deviation)
/// Lower Band = Middle - (std_dev * population standard deviation)
pub fn calculate_bollinger_bands(candles: &[Candle], params: &BollingerParams) -> BollingerBands {
    let period = params.period as usize;
    if period == 0 || candles.len() < period {
        return BollingerBands::default();
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let mut bands = BollingerBands::default();

    for (window, candle) in closes.windows(period).zip(&candles[period - 1..]) {
        let (Some(mean), Some(deviation)) = (
            math::sma(window, period),
            math::standard_deviation(window, period),
        ) else {
            continue;
        };
        let offset = params.std_dev * deviation;

        bands.middle.push(IndicatorPoint::new(candle.time, mean));
        bands.upper.push(IndicatorPoint::new(candle.time, mean + offset));
        bands.lower.push(IndicatorPoint::new(candle.time, mean - offset));
    }

    bands
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(candles: &[Candle]) -> BollingerBands {
    calculate_bollinger_bands(candles, &BollingerParams::default())
}

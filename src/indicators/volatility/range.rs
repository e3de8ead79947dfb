use crate::models::indicators::BarRange;
use crate::models::Candle;

/// High-low range of every bar, absolute and as a percentage of the low.
pub fn calculate_bar_ranges(candles: &[Candle]) -> Vec<BarRange> {
    candles
        .iter()
        .map(|c| {
            let range = c.high - c.low;
            BarRange {
                time: c.time,
                open: c.open,
                high: c.high,
                low: c.low,
                close: c.close,
                range,
                range_percent: (c.low > 0.0).then(|| range / c.low * 100.0),
            }
        })
        .collect()
}

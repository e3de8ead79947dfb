//! MACD (Moving Average Convergence Divergence) indicator

use crate::config::MacdParams;
use crate::indicators::trend::{calculate_ema, ema_of_points};
use crate::models::indicators::{BarBias, HistogramPoint, IndicatorPoint, MacdSeries};
use crate::models::Candle;
use std::collections::HashMap;

/// Calculate the MACD series
///
/// MACD = EMA(fast) - EMA(slow), on timestamps present in both
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
pub fn calculate_macd(candles: &[Candle], params: &MacdParams) -> MacdSeries {
    let fast = calculate_ema(candles, params.fast_period);
    let slow = calculate_ema(candles, params.slow_period);
    if fast.is_empty() || slow.is_empty() {
        return MacdSeries::default();
    }

    let slow_by_time: HashMap<i64, f64> = slow.iter().map(|p| (p.time, p.value)).collect();
    let macd_line: Vec<IndicatorPoint> = fast
        .iter()
        .filter_map(|f| {
            slow_by_time
                .get(&f.time)
                .map(|s| IndicatorPoint::new(f.time, f.value - s))
        })
        .collect();

    let signal_line = ema_of_points(&macd_line, params.signal_period);
    let signal_by_time: HashMap<i64, f64> =
        signal_line.iter().map(|p| (p.time, p.value)).collect();

    let histogram = macd_line
        .iter()
        .filter_map(|m| {
            signal_by_time.get(&m.time).map(|s| {
                let value = m.value - s;
                HistogramPoint {
                    time: m.time,
                    value,
                    bias: BarBias::from_sign(value),
                }
            })
        })
        .collect();

    MacdSeries {
        macd_line,
        signal_line,
        histogram,
    }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> MacdSeries {
    calculate_macd(candles, &MacdParams::default())
}

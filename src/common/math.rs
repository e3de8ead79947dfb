//! Windowed statistics over plain `f64` slices.

/// Mean of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Smoothing factor `2 / (period + 1)`.
pub fn ema_multiplier(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One EMA step. Written as `prev + (value - prev) * k` so that a flat input
/// reproduces `prev` exactly.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    previous + (value - previous) * ema_multiplier(period)
}

/// EMA seeded with the SMA of the first `period` values. The first element of
/// the returned vector corresponds to `values[period - 1]`.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let seed = values[..period].iter().sum::<f64>() / period as f64;
    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(seed);

    let mut previous = seed;
    for &value in &values[period..] {
        previous = ema_from_previous(value, previous, period);
        out.push(previous);
    }
    out
}

/// EMA seeded with the first value instead of an SMA, producing one output per
/// input. Used where a reading is needed before `period` values exist.
pub fn running_ema(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut iter = values.iter();
    let Some(&first) = iter.next() else {
        return out;
    };

    let period = period.max(1);
    let mut previous = first;
    out.push(previous);
    for &value in iter {
        previous = ema_from_previous(value, previous, period);
        out.push(previous);
    }
    out
}

/// Population standard deviation of the last `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    let mean = sma(values, period)?;
    let window = &values[values.len() - period..];
    let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
    Some(variance.sqrt())
}

/// Wilder's true range for a bar given the previous close.
pub fn true_range(high: f64, low: f64, previous_close: f64) -> f64 {
    (high - low)
        .max((high - previous_close).abs())
        .max((low - previous_close).abs())
}

/// Wilder smoothing step: `(avg * (period - 1) + value) / period`.
pub fn wilder_smooth(average: f64, value: f64, period: usize) -> f64 {
    (average * (period as f64 - 1.0) + value) / period as f64
}

//! Unit tests for trend detection

use trendcast::config::TrendParams;
use trendcast::models::{Candle, TrendDirection};
use trendcast::signals::{classify_trend, detect_trend};

fn series(count: usize, start: f64, step: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = start + step * i as f64;
            let open = close - step;
            Candle::new(
                open,
                open.max(close) + 0.5,
                open.min(close) - 0.5,
                close,
                1000.0,
                i as i64 * 86_400,
            )
        })
        .collect()
}

#[test]
fn test_detect_trend_uptrend() {
    let trend = detect_trend(&series(30, 100.0, 1.0), &TrendParams::default());
    assert_eq!(trend.direction, TrendDirection::Bull);
    assert!(trend.strength > 0.0 && trend.strength <= 1.0);
}

#[test]
fn test_detect_trend_downtrend() {
    let trend = detect_trend(&series(30, 130.0, -1.0), &TrendParams::default());
    assert_eq!(trend.direction, TrendDirection::Bear);
    assert!(trend.strength > 0.0 && trend.strength <= 1.0);
}

#[test]
fn test_detect_trend_short_series_still_classified() {
    let trend = detect_trend(&series(15, 100.0, 1.0), &TrendParams::default());
    assert_eq!(trend.direction, TrendDirection::Bull);
}

#[test]
fn test_detect_trend_flat_and_empty() {
    let flat = detect_trend(&series(30, 100.0, 0.0), &TrendParams::default());
    assert_eq!(flat.direction, TrendDirection::Bear);
    assert_eq!(flat.strength, 0.0);

    let empty = detect_trend(&[], &TrendParams::default());
    assert_eq!(empty.direction, TrendDirection::Neutral);
    assert_eq!(empty.strength, 0.0);
}

#[test]
fn test_zero_spread_votes_bear() {
    let candles: Vec<Candle> = (0..30)
        .map(|i| Candle::new(100.0, 100.0, 100.0, 100.0, 0.0, i * 86_400))
        .collect();
    let trend = detect_trend(&candles, &TrendParams::default());
    assert_eq!(trend.direction, TrendDirection::Bear);
    assert_eq!(trend.strength, 0.0);

    let classified = classify_trend(100.0, 100.0, 100.0, &TrendParams::default());
    assert_eq!(classified.direction, TrendDirection::Bear);
    assert_eq!(classified.strength, 0.0);
}

#[test]
fn test_classify_aligned_strength_is_capped() {
    let params = TrendParams::default();

    let bull = classify_trend(110.0, 100.0, 111.0, &params);
    assert_eq!(bull.direction, TrendDirection::Bull);
    assert_eq!(bull.strength, 1.0);

    let bear = classify_trend(90.0, 100.0, 85.0, &params);
    assert_eq!(bear.direction, TrendDirection::Bear);
    assert_eq!(bear.strength, 1.0);

    let mild = classify_trend(100.1, 100.0, 100.2, &params);
    assert_eq!(mild.direction, TrendDirection::Bull);
    assert!((mild.strength - 0.1 / 100.2 * 50.0).abs() < 1e-9);
}

#[test]
fn test_classify_mixed_signals() {
    let params = TrendParams::default();

    // fast above slow, price below slow
    let lean_bull = classify_trend(101.0, 100.0, 99.0, &params);
    assert_eq!(lean_bull.direction, TrendDirection::Bull);
    assert!((lean_bull.strength - 30.0 / 99.0).abs() < 1e-9);

    // fast below slow, price above slow
    let lean_bear = classify_trend(99.0, 100.0, 101.0, &params);
    assert_eq!(lean_bear.direction, TrendDirection::Bear);
    assert!((lean_bear.strength - 30.0 / 101.0).abs() < 1e-9);

    let capped = classify_trend(110.0, 100.0, 95.0, &params);
    assert_eq!(capped.strength, 0.5);
}

#[test]
fn test_classify_rejects_non_positive_close() {
    let params = TrendParams::default();
    assert_eq!(
        classify_trend(2.0, 1.0, 0.0, &params).direction,
        TrendDirection::Neutral
    );
    assert_eq!(
        classify_trend(2.0, 1.0, f64::NAN, &params).direction,
        TrendDirection::Neutral
    );
}

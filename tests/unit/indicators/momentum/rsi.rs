//! Unit tests for RSI indicator

use trendcast::config::RsiParams;
use trendcast::indicators::momentum::{calculate_rsi, calculate_rsi_default, rsi_value};
use trendcast::models::Candle;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Candle::new(c, c + 1.0, c - 1.0, c, 1000.0, i as i64 * 60))
        .collect()
}

#[test]
fn test_rsi_insufficient_data() {
    let candles = candles_from_closes(&[1.0; 14]);
    assert!(calculate_rsi_default(&candles).is_empty());
}

#[test]
fn test_rsi_alignment() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + (i % 3) as f64).collect();
    let candles = candles_from_closes(&closes);
    let rsi = calculate_rsi_default(&candles);
    assert_eq!(rsi.len(), 16);
    assert_eq!(rsi[0].time, candles[14].time);
    assert_eq!(rsi.last().unwrap().time, candles[29].time);
}

#[test]
fn test_rsi_wilder_smoothing() {
    let candles = candles_from_closes(&[1.0, 2.0, 1.0, 2.0]);
    let rsi = calculate_rsi(&candles, &RsiParams { period: 2 });
    assert_eq!(rsi.len(), 2);
    assert_eq!(rsi[0].value, 50.0);
    // avg gain 0.75, avg loss 0.25
    assert!((rsi[1].value - 75.0).abs() < 1e-9);
}

#[test]
fn test_rsi_extremes() {
    let rising: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let falling: Vec<f64> = rising.iter().rev().copied().collect();

    assert!(calculate_rsi_default(&candles_from_closes(&rising))
        .iter()
        .all(|p| p.value == 100.0));
    assert!(calculate_rsi_default(&candles_from_closes(&falling))
        .iter()
        .all(|p| p.value == 0.0));
}

#[test]
fn test_rsi_flat_series_saturates() {
    let candles = candles_from_closes(&[50.0; 20]);
    assert!(calculate_rsi_default(&candles).iter().all(|p| p.value == 100.0));
    assert_eq!(rsi_value(0.0, 0.0), 100.0);
}

#[test]
fn test_rsi_stays_in_bounds() {
    let closes: Vec<f64> = (0..80)
        .map(|i| 100.0 + ((i * 7) % 11) as f64 - 5.0)
        .collect();
    let rsi = calculate_rsi_default(&candles_from_closes(&closes));
    assert!(!rsi.is_empty());
    assert!(rsi.iter().all(|p| (0.0..=100.0).contains(&p.value)));
}

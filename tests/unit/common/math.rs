//! Unit tests for the shared math helpers

use trendcast::common::math::{
    ema_from_previous, ema_series, running_ema, sma, standard_deviation, true_range, wilder_smooth,
};

#[test]
fn test_sma_uses_last_window() {
    assert_eq!(sma(&[1.0, 2.0, 3.0, 4.0], 2), Some(3.5));
}

#[test]
fn test_sma_insufficient_or_zero_period() {
    assert_eq!(sma(&[1.0, 2.0], 3), None);
    assert_eq!(sma(&[1.0, 2.0], 0), None);
}

#[test]
fn test_ema_series_length_and_seed() {
    let values: Vec<f64> = (1..=10).map(|v| v as f64).collect();
    let series = ema_series(&values, 4);
    assert_eq!(series.len(), 7);
    assert_eq!(series[0], 2.5);
}

#[test]
fn test_ema_constant_series_is_exact() {
    let values = vec![42.125; 50];
    assert!(ema_series(&values, 9).iter().all(|&v| v == 42.125));
    assert_eq!(ema_series(&values, 9).last(), Some(&42.125));
    assert!(running_ema(&values, 21).iter().all(|&v| v == 42.125));
}

#[test]
fn test_ema_from_previous_step() {
    // k = 2 / (3 + 1) = 0.5
    assert_eq!(ema_from_previous(20.0, 10.0, 3), 15.0);
}

#[test]
fn test_running_ema_starts_at_first_value() {
    let values = [10.0, 20.0, 30.0];
    let series = running_ema(&values, 3);
    assert_eq!(series, vec![10.0, 15.0, 22.5]);
    assert!(running_ema(&[], 3).is_empty());
}

#[test]
fn test_standard_deviation_population() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_eq!(standard_deviation(&values, 8), Some(2.0));
}

#[test]
fn test_true_range_uses_gaps() {
    assert_eq!(true_range(10.0, 8.0, 9.0), 2.0);
    assert_eq!(true_range(10.0, 8.0, 12.0), 4.0);
    assert_eq!(true_range(10.0, 8.0, 5.0), 5.0);
}

#[test]
fn test_wilder_smooth() {
    assert_eq!(wilder_smooth(1.0, 3.0, 2), 2.0);
}

//! Unit tests for report assembly from preloaded candles

use std::collections::HashMap;
use trendcast::aggregation::Timeframe;
use trendcast::config::AnalysisConfig;
use trendcast::models::{Candle, Horizon, TrendDirection};
use trendcast::signals::{analyze_candles, AnalysisGroup};
use trendcast::AnalysisError;

fn rising_candles(count: usize, start: f64, step_seconds: i64) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = start + i as f64;
            Candle::new(close - 1.0, close + 0.5, close - 1.5, close, 1000.0, i as i64 * step_seconds)
        })
        .collect()
}

#[test]
fn test_group_timeframes_sorted_and_deduplicated() {
    let group = AnalysisGroup::new(
        "custom",
        Horizon::Short,
        vec![Timeframe::Hour1, Timeframe::Min5, Timeframe::Hour1],
    );
    assert_eq!(group.timeframes, vec![Timeframe::Min5, Timeframe::Hour1]);
}

#[test]
fn test_default_groups() {
    let groups = AnalysisGroup::defaults();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label, "shortTerm");
    assert_eq!(
        groups[0].timeframes,
        vec![Timeframe::Min5, Timeframe::Min15, Timeframe::Hour1]
    );
    assert_eq!(groups[1].label, "longTerm");
    assert_eq!(groups[1].horizon, Horizon::Long);
    assert_eq!(
        groups[1].timeframes,
        vec![Timeframe::Hour4, Timeframe::Day1, Timeframe::Week1]
    );
}

#[test]
fn test_single_timeframe_group() {
    let mut candles = HashMap::new();
    candles.insert(Timeframe::Day1, rising_candles(30, 100.0, 86_400));

    let report = analyze_candles(
        "BTC",
        &AnalysisGroup::defaults(),
        &candles,
        &AnalysisConfig::default(),
    )
    .unwrap();

    assert_eq!(report.symbol, "BTC");
    assert_eq!(report.current_price, 129.0);
    assert!(report.get("shortTerm").is_none());
    assert!(report.groups.contains_key("shortTerm"));

    let long = report.get("longTerm").unwrap();
    assert_eq!(long.consensus, TrendDirection::Bull);
    assert_eq!(long.confidence, 100);
    assert_eq!(long.avg_atr, 2.0);
    assert_eq!(long.timeframes.len(), 1);
    assert_eq!(long.timeframes[0].label, "D");
    assert_eq!(long.long.target, 134.0);
    assert_eq!(long.long.sl, 127.0);
}

#[test]
fn test_current_price_from_first_requested_timeframe() {
    let mut candles = HashMap::new();
    candles.insert(Timeframe::Hour1, rising_candles(40, 50.0, 3600));
    candles.insert(Timeframe::Day1, rising_candles(30, 100.0, 86_400));

    let report = analyze_candles(
        "ETH",
        &AnalysisGroup::defaults(),
        &candles,
        &AnalysisConfig::default(),
    )
    .unwrap();

    assert_eq!(report.current_price, 89.0);
    let long = report.get("longTerm").unwrap();
    // legs are anchored on the current price, not the group's own close
    assert_eq!(long.long.entry, 89.0);
    assert!(report.get("shortTerm").is_some());
}

#[test]
fn test_short_series_are_dropped() {
    let mut candles = HashMap::new();
    candles.insert(Timeframe::Min5, rising_candles(10, 100.0, 300));
    candles.insert(Timeframe::Min15, rising_candles(20, 100.0, 900));

    let report = analyze_candles(
        "SOL",
        &[AnalysisGroup::short_term()],
        &candles,
        &AnalysisConfig::default(),
    )
    .unwrap();

    let short = report.get("shortTerm").unwrap();
    assert_eq!(short.timeframes.len(), 1);
    assert_eq!(short.timeframes[0].timeframe, Timeframe::Min15);
    assert_eq!(report.current_price, 119.0);
}

#[test]
fn test_no_data_available() {
    let err = analyze_candles(
        "BTC",
        &AnalysisGroup::defaults(),
        &HashMap::new(),
        &AnalysisConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AnalysisError::NoDataAvailable));
    assert_eq!(err.to_string(), "no market data available for prediction");

    let mut candles = HashMap::new();
    candles.insert(Timeframe::Day1, rising_candles(14, 100.0, 86_400));
    assert!(matches!(
        analyze_candles("BTC", &AnalysisGroup::defaults(), &candles, &AnalysisConfig::default()),
        Err(AnalysisError::NoDataAvailable)
    ));
}

#[test]
fn test_flat_timeframe_votes_bear() {
    let flat: Vec<Candle> = (0..30)
        .map(|i| Candle::new(100.0, 100.0, 100.0, 100.0, 0.0, i * 86_400))
        .collect();
    let mut candles = HashMap::new();
    candles.insert(Timeframe::Day1, flat);

    let report = analyze_candles(
        "BTC",
        &[AnalysisGroup::long_term()],
        &candles,
        &AnalysisConfig::default(),
    )
    .unwrap();

    let long = report.get("longTerm").unwrap();
    assert_eq!(long.consensus, TrendDirection::Bear);
    assert_eq!(long.confidence, 100);
    assert_eq!(long.avg_strength, 0);
    assert_eq!(long.avg_atr, 0.0);
}

#[test]
fn test_duplicate_group_labels_rejected() {
    let mut candles = HashMap::new();
    candles.insert(Timeframe::Day1, rising_candles(30, 100.0, 86_400));
    let groups = vec![
        AnalysisGroup::new("trend", Horizon::Short, vec![Timeframe::Day1]),
        AnalysisGroup::new("trend", Horizon::Long, vec![Timeframe::Week1]),
    ];

    let err = analyze_candles("BTC", &groups, &candles, &AnalysisConfig::default()).unwrap_err();
    match err {
        AnalysisError::DuplicateGroup { label } => assert_eq!(label, "trend"),
        other => panic!("unexpected error: {other}"),
    }
}

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use trendcast::aggregation::Timeframe;
use trendcast::error::ProviderError;
use trendcast::models::Candle;
use trendcast::services::{InMemoryMarketDataProvider, MarketDataProvider};

pub const JAN_1_2024: i64 = 1_704_067_200;

/// Straight-line series: each close moves by `step` from the previous one.
pub fn trending_candles(count: usize, step_seconds: i64, start_price: f64, step: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = start_price + step * i as f64;
            let open = close - step;
            Candle::new(
                open,
                open.max(close) + 0.5,
                open.min(close) - 0.5,
                close,
                1000.0,
                JAN_1_2024 + i as i64 * step_seconds,
            )
        })
        .collect()
}

/// Provider with enough rising history for both default groups.
pub fn full_provider(symbol: &str) -> InMemoryMarketDataProvider {
    InMemoryMarketDataProvider::new()
        .with_candles(symbol, Timeframe::Min5, trending_candles(60, 300, 100.0, 0.5))
        .with_candles(symbol, Timeframe::Min15, trending_candles(60, 900, 90.0, 0.5))
        .with_candles(symbol, Timeframe::Hour1, trending_candles(200, 3600, 80.0, 0.25))
        .with_candles(symbol, Timeframe::Day1, trending_candles(60, 86_400, 50.0, 1.0))
        .with_candles(symbol, Timeframe::Week1, trending_candles(60, 604_800, 20.0, 2.0))
}

/// Fails every request for the listed source timeframes and delegates the rest.
pub struct FailingProvider {
    pub inner: InMemoryMarketDataProvider,
    pub failing: HashSet<Timeframe>,
}

#[async_trait]
impl MarketDataProvider for FailingProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Candle>, ProviderError> {
        if self.failing.contains(&timeframe) {
            return Err(format!("upstream unavailable for {}", timeframe).into());
        }
        self.inner.get_candles(symbol, timeframe, limit).await
    }
}

/// Records every request before delegating.
pub struct RecordingProvider {
    pub inner: InMemoryMarketDataProvider,
    pub requests: Mutex<Vec<(Timeframe, usize)>>,
}

impl RecordingProvider {
    pub fn new(inner: InMemoryMarketDataProvider) -> Self {
        Self {
            inner,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(Timeframe, usize)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketDataProvider for RecordingProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Candle>, ProviderError> {
        self.requests.lock().unwrap().push((timeframe, limit));
        self.inner.get_candles(symbol, timeframe, limit).await
    }
}

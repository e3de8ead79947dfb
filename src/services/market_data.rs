//! Market data provider interface and timeframe fetching.

use crate::aggregation::{AggregationPlan, Timeframe};
use crate::error::{AnalysisError, ProviderError, Result};
use crate::models::{validate_series, Candle};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// Source of raw candles. Implementations return candles in non-decreasing
/// time order, at most `limit` of them, most recent last.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn get_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> std::result::Result<Vec<Candle>, ProviderError>;
}

/// Provider backed by candle vectors loaded up front.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketDataProvider {
    candles: HashMap<(String, Timeframe), Vec<Candle>>,
}

impl InMemoryMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candles(mut self, symbol: &str, timeframe: Timeframe, candles: Vec<Candle>) -> Self {
        self.insert(symbol, timeframe, candles);
        self
    }

    pub fn insert(&mut self, symbol: &str, timeframe: Timeframe, candles: Vec<Candle>) {
        self.candles.insert((symbol.to_string(), timeframe), candles);
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryMarketDataProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> std::result::Result<Vec<Candle>, ProviderError> {
        let candles = self
            .candles
            .get(&(symbol.to_string(), timeframe))
            .ok_or_else(|| format!("no {} candles stored for {}", timeframe, symbol))?;
        let start = candles.len().saturating_sub(limit);
        Ok(candles[start..].to_vec())
    }
}

/// Fetch the source candles for `timeframe`, aggregate them and keep the most
/// recent `limit`.
///
/// 4h bars are built from hourly bars on UTC 4-hour boundaries; other
/// composite timeframes use the fixed-count plan.
pub async fn fetch_timeframe_candles(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    timeframe: Timeframe,
    limit: usize,
) -> Result<Vec<Candle>> {
    let plan = AggregationPlan::calendar_aligned(timeframe);
    let source_limit = plan.source_limit(limit);

    debug!(
        symbol = %symbol,
        timeframe = %timeframe,
        source = %plan.source,
        source_limit,
        "fetching candles"
    );

    let raw = provider
        .get_candles(symbol, plan.source, source_limit)
        .await
        .map_err(|source| AnalysisError::Provider { timeframe, source })?;
    validate_series(&raw)?;

    let mut candles = if plan.is_passthrough() {
        raw
    } else {
        plan.apply(&raw)
    };

    if candles.len() > limit {
        candles.drain(..candles.len() - limit);
    }

    debug!(
        symbol = %symbol,
        timeframe = %timeframe,
        count = candles.len(),
        "candles ready"
    );
    Ok(candles)
}

//! Prediction engine: fetch, summarise and combine timeframe groups.

use crate::aggregation::Timeframe;
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::models::analysis::TimeframeSummary;
use crate::models::prediction::{Horizon, PredictionReport};
use crate::models::Candle;
use crate::services::market_data::{fetch_timeframe_candles, MarketDataProvider};
use crate::signals::consensus::build_prediction;
use crate::signals::timeframe::analyze_timeframe;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A labelled set of timeframes voting together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisGroup {
    pub label: String,
    pub horizon: Horizon,
    pub timeframes: Vec<Timeframe>,
}

impl AnalysisGroup {
    /// Timeframes are sorted finest first and deduplicated, which fixes the
    /// consensus weights.
    pub fn new(label: impl Into<String>, horizon: Horizon, mut timeframes: Vec<Timeframe>) -> Self {
        timeframes.sort();
        timeframes.dedup();
        Self {
            label: label.into(),
            horizon,
            timeframes,
        }
    }

    pub fn short_term() -> Self {
        Self::new(
            "shortTerm",
            Horizon::Short,
            vec![Timeframe::Min5, Timeframe::Min15, Timeframe::Hour1],
        )
    }

    pub fn long_term() -> Self {
        Self::new(
            "longTerm",
            Horizon::Long,
            vec![Timeframe::Hour4, Timeframe::Day1, Timeframe::Week1],
        )
    }

    pub fn defaults() -> Vec<Self> {
        vec![Self::short_term(), Self::long_term()]
    }
}

/// Group labels key the report, so each may appear once.
fn check_group_labels(groups: &[AnalysisGroup]) -> Result<()> {
    let mut seen = HashSet::new();
    for group in groups {
        if !seen.insert(group.label.as_str()) {
            return Err(AnalysisError::DuplicateGroup {
                label: group.label.clone(),
            });
        }
    }
    Ok(())
}

/// Unique timeframes across all groups, in request order.
fn requested_timeframes(groups: &[AnalysisGroup]) -> Vec<Timeframe> {
    let mut seen = Vec::new();
    for tf in groups.iter().flat_map(|g| g.timeframes.iter().copied()) {
        if !seen.contains(&tf) {
            seen.push(tf);
        }
    }
    seen
}

pub struct PredictionEngine {
    provider: Arc<dyn MarketDataProvider>,
    config: AnalysisConfig,
}

impl PredictionEngine {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: AnalysisConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Fetch every requested timeframe concurrently and build one prediction
    /// per group. Timeframes that fail to fetch or are too short are dropped;
    /// the call only fails when nothing at all could be analysed or when two
    /// groups share a label.
    pub async fn analyze(&self, symbol: &str, groups: &[AnalysisGroup]) -> Result<PredictionReport> {
        check_group_labels(groups)?;
        let limit = self.config.consensus.candle_limit;
        let provider = self.provider.as_ref();
        let config = &self.config;

        let fetches = requested_timeframes(groups).into_iter().map(move |timeframe| async move {
            let outcome = match fetch_timeframe_candles(provider, symbol, timeframe, limit).await {
                Ok(candles) => analyze_timeframe(timeframe, &candles, config),
                Err(e) => Err(e),
            };
            (timeframe, outcome)
        });

        let outcomes = join_all(fetches).await;
        assemble_report(symbol, groups, outcomes, &self.config)
    }

    /// Fetch and analyse with the default short- and long-term groups.
    pub async fn analyze_default(&self, symbol: &str) -> Result<PredictionReport> {
        self.analyze(symbol, &AnalysisGroup::defaults()).await
    }
}

/// Synchronous entry point for callers that already hold the candles of each
/// timeframe.
pub fn analyze_candles(
    symbol: &str,
    groups: &[AnalysisGroup],
    candles: &HashMap<Timeframe, Vec<Candle>>,
    config: &AnalysisConfig,
) -> Result<PredictionReport> {
    check_group_labels(groups)?;
    let outcomes = requested_timeframes(groups)
        .into_iter()
        .map(|timeframe| {
            let outcome = match candles.get(&timeframe) {
                Some(series) => analyze_timeframe(timeframe, series, config),
                None => Err(AnalysisError::InsufficientData {
                    required: config.consensus.min_candles,
                    available: 0,
                }),
            };
            (timeframe, outcome)
        })
        .collect();

    assemble_report(symbol, groups, outcomes, config)
}

fn assemble_report(
    symbol: &str,
    groups: &[AnalysisGroup],
    outcomes: Vec<(Timeframe, Result<TimeframeSummary>)>,
    config: &AnalysisConfig,
) -> Result<PredictionReport> {
    let mut current_price = None;
    let mut summaries: HashMap<Timeframe, TimeframeSummary> = HashMap::new();

    for (timeframe, outcome) in outcomes {
        match outcome {
            Ok(summary) => {
                debug!(
                    symbol = %symbol,
                    timeframe = %timeframe,
                    direction = %summary.trend.direction,
                    strength = summary.trend.strength,
                    atr = summary.atr,
                    "timeframe analysed"
                );
                current_price.get_or_insert(summary.last_close);
                summaries.insert(timeframe, summary);
            }
            Err(e) => {
                warn!(symbol = %symbol, timeframe = %timeframe, error = %e, "dropping timeframe");
            }
        }
    }

    let current_price = current_price.ok_or(AnalysisError::NoDataAvailable)?;

    let mut predictions = BTreeMap::new();
    for group in groups {
        let available: Vec<&TimeframeSummary> = group
            .timeframes
            .iter()
            .filter_map(|tf| summaries.get(tf))
            .collect();

        let prediction = build_prediction(group.horizon, &available, current_price, &config.consensus)?;
        match &prediction {
            Some(p) => info!(
                symbol = %symbol,
                group = %group.label,
                consensus = %p.consensus,
                confidence = p.confidence,
                timeframes = available.len(),
                "group prediction built"
            ),
            None => warn!(symbol = %symbol, group = %group.label, "no usable timeframe in group"),
        }
        predictions.insert(group.label.clone(), prediction);
    }

    if predictions.values().all(Option::is_none) {
        return Err(AnalysisError::NoDataAvailable);
    }

    Ok(PredictionReport {
        symbol: symbol.to_string(),
        current_price,
        groups: predictions,
    })
}

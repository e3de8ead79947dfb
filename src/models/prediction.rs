//! Cross-timeframe prediction output.

use crate::aggregation::Timeframe;
use crate::error::{AnalysisError, Result};
use crate::models::analysis::{TimeframeSummary, TrendDirection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Holding horizon of a timeframe group; picks the target multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Horizon {
    Short,
    Long,
}

/// Entry, target and stop for one side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeLeg {
    pub entry: f64,
    pub target: f64,
    pub sl: f64,
    pub rr: f64,
}

impl TradeLeg {
    pub fn long(entry: f64, atr: f64, target_multiplier: f64, stop_multiplier: f64) -> Self {
        Self {
            entry,
            target: entry + atr * target_multiplier,
            sl: entry - atr * stop_multiplier,
            rr: target_multiplier / stop_multiplier,
        }
    }

    pub fn short(entry: f64, atr: f64, target_multiplier: f64, stop_multiplier: f64) -> Self {
        Self {
            entry,
            target: entry - atr * target_multiplier,
            sl: entry + atr * stop_multiplier,
            rr: target_multiplier / stop_multiplier,
        }
    }
}

/// Reject zero, negative and non-finite multipliers.
pub fn validate_multiplier(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AnalysisError::InvalidMultiplier { name, value })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeBreakdown {
    pub label: String,
    pub timeframe: Timeframe,
    pub trend: TrendDirection,
    /// Trend strength as a whole percentage.
    pub strength: u8,
    pub atr: f64,
    pub last_close: f64,
}

impl From<&TimeframeSummary> for TimeframeBreakdown {
    fn from(summary: &TimeframeSummary) -> Self {
        Self {
            label: summary.timeframe.display_label().to_string(),
            timeframe: summary.timeframe,
            trend: summary.trend.direction,
            strength: to_percent(summary.trend.strength),
            atr: summary.atr,
            last_close: summary.last_close,
        }
    }
}

/// Round a `[0, 1]` ratio to a whole percentage.
pub fn to_percent(ratio: f64) -> u8 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub horizon: Horizon,
    pub consensus: TrendDirection,
    pub confidence: u8,
    #[serde(rename = "avgATR")]
    pub avg_atr: f64,
    pub avg_strength: u8,
    pub timeframes: Vec<TimeframeBreakdown>,
    pub long: TradeLeg,
    pub short: TradeLeg,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
    pub target_multiplier: f64,
    pub stop_multiplier: f64,
}

impl PredictionResult {
    /// Recompute both legs with a different stop distance. Targets are unchanged.
    pub fn with_stop_multiplier(mut self, stop_multiplier: f64) -> Result<Self> {
        let stop = validate_multiplier("stop", stop_multiplier)?;
        self.long = TradeLeg::long(self.long.entry, self.avg_atr, self.target_multiplier, stop);
        self.short = TradeLeg::short(self.short.entry, self.avg_atr, self.target_multiplier, stop);
        self.stop_multiplier = stop;
        Ok(self)
    }
}

/// Result of one `analyze` call: a prediction (or `None`) per requested group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    pub symbol: String,
    pub current_price: f64,
    pub groups: BTreeMap<String, Option<PredictionResult>>,
}

impl PredictionReport {
    pub fn get(&self, label: &str) -> Option<&PredictionResult> {
        self.groups.get(label).and_then(Option::as_ref)
    }
}

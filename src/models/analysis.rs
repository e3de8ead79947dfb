//! Per-timeframe analysis results.

use crate::aggregation::Timeframe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Bull,
    Bear,
    Neutral,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TrendDirection::Bull => "bull",
            TrendDirection::Bear => "bear",
            TrendDirection::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// Confidence in `[0, 1]`.
    pub strength: f64,
}

impl TrendResult {
    pub fn neutral() -> Self {
        Self {
            direction: TrendDirection::Neutral,
            strength: 0.0,
        }
    }
}

/// Swing-derived levels around the last close, nearest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SrLevels {
    pub support: Option<f64>,
    pub resistance: Option<f64>,
    pub all_support: Vec<f64>,
    pub all_resistance: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeSummary {
    pub timeframe: Timeframe,
    pub atr: f64,
    pub trend: TrendResult,
    pub sr: SrLevels,
    pub last_close: f64,
    pub last_high: f64,
    pub last_low: f64,
}

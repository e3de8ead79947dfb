//! Timeframe catalogue and the source-granularity lookup used to build each one.

use crate::aggregation::candles::{aggregate_candles, aggregate_utc_blocks};
use crate::models::Candle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound on source candles requested for a single timeframe.
pub const MAX_SOURCE_CANDLES: usize = 1000;

/// Chart granularities, ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1m")]
    Min1,
    #[serde(rename = "3m")]
    Min3,
    #[serde(rename = "5m")]
    Min5,
    #[serde(rename = "10m")]
    Min10,
    #[serde(rename = "15m")]
    Min15,
    #[serde(rename = "30m")]
    Min30,
    #[serde(rename = "45m")]
    Min45,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "1d")]
    Day1,
    #[serde(rename = "1wk")]
    Week1,
    #[serde(rename = "1mo")]
    Month1,
    #[serde(rename = "3mo")]
    Month3,
    #[serde(rename = "6mo")]
    Month6,
    #[serde(rename = "1y")]
    Year1,
}

impl Timeframe {
    pub fn all() -> &'static [Timeframe] {
        &[
            Timeframe::Min1,
            Timeframe::Min3,
            Timeframe::Min5,
            Timeframe::Min10,
            Timeframe::Min15,
            Timeframe::Min30,
            Timeframe::Min45,
            Timeframe::Hour1,
            Timeframe::Hour4,
            Timeframe::Day1,
            Timeframe::Week1,
            Timeframe::Month1,
            Timeframe::Month3,
            Timeframe::Month6,
            Timeframe::Year1,
        ]
    }

    /// Request label, e.g. `"4h"` or `"1wk"`.
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Min1 => "1m",
            Timeframe::Min3 => "3m",
            Timeframe::Min5 => "5m",
            Timeframe::Min10 => "10m",
            Timeframe::Min15 => "15m",
            Timeframe::Min30 => "30m",
            Timeframe::Min45 => "45m",
            Timeframe::Hour1 => "1h",
            Timeframe::Hour4 => "4h",
            Timeframe::Day1 => "1d",
            Timeframe::Week1 => "1wk",
            Timeframe::Month1 => "1mo",
            Timeframe::Month3 => "3mo",
            Timeframe::Month6 => "6mo",
            Timeframe::Year1 => "1y",
        }
    }

    /// Short label shown next to a timeframe in prediction breakdowns.
    pub fn display_label(&self) -> &'static str {
        match self {
            Timeframe::Hour1 => "1H",
            Timeframe::Hour4 => "4H",
            Timeframe::Day1 => "D",
            Timeframe::Week1 => "W",
            Timeframe::Month1 => "M",
            Timeframe::Month3 => "3M",
            Timeframe::Month6 => "6M",
            Timeframe::Year1 => "Y",
            other => other.label(),
        }
    }

    /// Nominal bar length. Months and years use 30 and 365 day approximations.
    pub fn seconds(&self) -> i64 {
        const MINUTE: i64 = 60;
        const HOUR: i64 = 60 * MINUTE;
        const DAY: i64 = 24 * HOUR;
        match self {
            Timeframe::Min1 => MINUTE,
            Timeframe::Min3 => 3 * MINUTE,
            Timeframe::Min5 => 5 * MINUTE,
            Timeframe::Min10 => 10 * MINUTE,
            Timeframe::Min15 => 15 * MINUTE,
            Timeframe::Min30 => 30 * MINUTE,
            Timeframe::Min45 => 45 * MINUTE,
            Timeframe::Hour1 => HOUR,
            Timeframe::Hour4 => 4 * HOUR,
            Timeframe::Day1 => DAY,
            Timeframe::Week1 => 7 * DAY,
            Timeframe::Month1 => 30 * DAY,
            Timeframe::Month3 => 90 * DAY,
            Timeframe::Month6 => 180 * DAY,
            Timeframe::Year1 => 365 * DAY,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown timeframe: {0}")]
pub struct UnknownTimeframe(pub String);

impl FromStr for Timeframe {
    type Err = UnknownTimeframe;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "60m" => return Ok(Timeframe::Hour1),
            "1w" => return Ok(Timeframe::Week1),
            _ => {}
        }
        Timeframe::all()
            .iter()
            .copied()
            .find(|tf| tf.label() == s || tf.display_label() == s)
            .ok_or_else(|| UnknownTimeframe(s.to_string()))
    }
}

/// How source candles are merged into one output candle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Fixed number of consecutive source candles.
    Count(usize),
    /// All candles inside the same N-hour block of a UTC day.
    UtcHourBlock(u32),
}

/// Source granularity and grouping that produce a requested timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationPlan {
    pub target: Timeframe,
    pub source: Timeframe,
    pub grouping: Grouping,
}

impl AggregationPlan {
    /// Fixed-count lookup, e.g. 10m = 2 x 5m, 45m = 3 x 15m, 3mo = 3 x 1mo.
    pub fn for_timeframe(target: Timeframe) -> Self {
        let (source, count) = match target {
            Timeframe::Min1 => (Timeframe::Min1, 1),
            Timeframe::Min3 => (Timeframe::Min1, 3),
            Timeframe::Min5 => (Timeframe::Min5, 1),
            Timeframe::Min10 => (Timeframe::Min5, 2),
            Timeframe::Min15 => (Timeframe::Min15, 1),
            Timeframe::Min30 => (Timeframe::Min15, 2),
            Timeframe::Min45 => (Timeframe::Min15, 3),
            Timeframe::Hour1 => (Timeframe::Hour1, 1),
            Timeframe::Hour4 => (Timeframe::Hour1, 4),
            Timeframe::Day1 => (Timeframe::Day1, 1),
            Timeframe::Week1 => (Timeframe::Week1, 1),
            Timeframe::Month1 => (Timeframe::Month1, 1),
            Timeframe::Month3 => (Timeframe::Month1, 3),
            Timeframe::Month6 => (Timeframe::Month1, 6),
            Timeframe::Year1 => (Timeframe::Month1, 12),
        };
        Self {
            target,
            source,
            grouping: Grouping::Count(count),
        }
    }

    /// Like [`for_timeframe`](Self::for_timeframe), but 4h bars are cut on UTC
    /// 4-hour boundaries instead of every fourth hourly bar.
    pub fn calendar_aligned(target: Timeframe) -> Self {
        match target {
            Timeframe::Hour4 => Self {
                target,
                source: Timeframe::Hour1,
                grouping: Grouping::UtcHourBlock(4),
            },
            other => Self::for_timeframe(other),
        }
    }

    /// Source candles consumed per output candle.
    pub fn group_factor(&self) -> usize {
        match self.grouping {
            Grouping::Count(count) => count.max(1),
            Grouping::UtcHourBlock(hours) => {
                let source_hours = (self.source.seconds() / 3600).max(1) as usize;
                (hours as usize / source_hours).max(1)
            }
        }
    }

    /// Source candles to request so that `limit` output candles can be built.
    pub fn source_limit(&self, limit: usize) -> usize {
        limit.saturating_mul(self.group_factor()).min(MAX_SOURCE_CANDLES)
    }

    pub fn is_passthrough(&self) -> bool {
        self.grouping == Grouping::Count(1)
    }

    pub fn apply(&self, candles: &[Candle]) -> Vec<Candle> {
        match self.grouping {
            Grouping::Count(count) => aggregate_candles(candles, count),
            Grouping::UtcHourBlock(hours) => aggregate_utc_blocks(candles, hours),
        }
    }
}

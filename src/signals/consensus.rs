//! Weighted multi-timeframe consensus and trade levels.

use crate::config::ConsensusParams;
use crate::error::Result;
use crate::models::analysis::{TimeframeSummary, TrendDirection};
use crate::models::prediction::{
    to_percent, validate_multiplier, Horizon, PredictionResult, TimeframeBreakdown, TradeLeg,
};

/// Running totals over the available timeframes of one group.
///
/// The `i`-th timeframe (finest first) carries weight `i + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsensusTally {
    pub bull_count: usize,
    pub bear_count: usize,
    pub available: usize,
    pub weighted_strength: f64,
    pub weighted_atr: f64,
    pub total_weight: f64,
}

impl ConsensusTally {
    pub fn from_summaries<'a, I>(summaries: I) -> Self
    where
        I: IntoIterator<Item = &'a TimeframeSummary>,
    {
        let mut tally = Self::default();
        for (i, summary) in summaries.into_iter().enumerate() {
            let weight = (i + 1) as f64;
            match summary.trend.direction {
                TrendDirection::Bull => tally.bull_count += 1,
                TrendDirection::Bear => tally.bear_count += 1,
                TrendDirection::Neutral => {}
            }
            tally.weighted_strength += summary.trend.strength * weight;
            tally.weighted_atr += summary.atr * weight;
            tally.total_weight += weight;
            tally.available += 1;
        }
        tally
    }

    pub fn consensus(&self) -> TrendDirection {
        if self.bull_count > self.bear_count {
            TrendDirection::Bull
        } else if self.bear_count > self.bull_count {
            TrendDirection::Bear
        } else {
            TrendDirection::Neutral
        }
    }

    /// Share of timeframes voting with the majority, in whole percent.
    pub fn confidence(&self) -> u8 {
        if self.available == 0 {
            return 0;
        }
        let majority = self.bull_count.max(self.bear_count);
        to_percent(majority as f64 / self.available as f64)
    }

    pub fn avg_atr(&self) -> f64 {
        if self.total_weight > 0.0 {
            self.weighted_atr / self.total_weight
        } else {
            0.0
        }
    }

    pub fn avg_strength(&self) -> u8 {
        if self.total_weight > 0.0 {
            to_percent(self.weighted_strength / self.total_weight)
        } else {
            0
        }
    }
}

/// Build the prediction for one group from its available summaries, ordered
/// finest to coarsest. Returns `Ok(None)` when nothing is available.
///
/// Support and resistance are taken from the coarsest (highest-weighted)
/// timeframe.
pub fn build_prediction(
    horizon: Horizon,
    summaries: &[&TimeframeSummary],
    current_price: f64,
    params: &ConsensusParams,
) -> Result<Option<PredictionResult>> {
    let Some(highest) = summaries.last() else {
        return Ok(None);
    };

    let target_multiplier = validate_multiplier("target", params.target_multiplier(horizon))?;
    let stop_multiplier = validate_multiplier("stop", params.stop_multiplier)?;

    let tally = ConsensusTally::from_summaries(summaries.iter().copied());
    let avg_atr = tally.avg_atr();

    Ok(Some(PredictionResult {
        horizon,
        consensus: tally.consensus(),
        confidence: tally.confidence(),
        avg_atr,
        avg_strength: tally.avg_strength(),
        timeframes: summaries.iter().map(|s| TimeframeBreakdown::from(*s)).collect(),
        long: TradeLeg::long(current_price, avg_atr, target_multiplier, stop_multiplier),
        short: TradeLeg::short(current_price, avg_atr, target_multiplier, stop_multiplier),
        support: highest.sr.support,
        resistance: highest.sr.resistance,
        target_multiplier,
        stop_multiplier,
    }))
}

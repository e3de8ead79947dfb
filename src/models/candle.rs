use crate::error::{AnalysisError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLCV bar keyed by its opening time in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: f64, time: i64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }

    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// Check `low <= min(open, close) <= max(open, close) <= high` and a
    /// non-negative volume.
    pub fn validate(&self) -> Result<()> {
        let prices = [self.open, self.high, self.low, self.close, self.volume];
        if prices.iter().any(|v| !v.is_finite()) {
            return Err(self.invalid("non-finite value"));
        }
        if self.volume < 0.0 {
            return Err(self.invalid("negative volume"));
        }
        if self.low > self.open.min(self.close) {
            return Err(self.invalid("low above body"));
        }
        if self.high < self.open.max(self.close) {
            return Err(self.invalid("high below body"));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> AnalysisError {
        AnalysisError::InvalidCandle {
            time: self.time,
            reason: reason.to_string(),
        }
    }
}

/// Validate every candle and the non-decreasing time ordering of a series.
pub fn validate_series(candles: &[Candle]) -> Result<()> {
    for candle in candles {
        candle.validate()?;
    }
    for pair in candles.windows(2) {
        if pair[1].time < pair[0].time {
            return Err(AnalysisError::UnorderedCandles {
                previous: pair[0].time,
                next: pair[1].time,
            });
        }
    }
    Ok(())
}

//! Analysis configuration.
//!
//! Every numeric knob of the pipeline lives here with its default. Values can be
//! loaded from JSON or overridden through `TRENDCAST_*` environment variables.

use crate::models::Horizon;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Parse { key: String, value: String },
    #[error("validation error: {0}")]
    Validation(String),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Deployment environment, read from `ENVIRONMENT` (defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// EMA pair used by the trend detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendParams {
    pub fast_period: u32,
    pub slow_period: u32,
    /// Scale applied to the normalized EMA spread when both signals agree.
    pub aligned_scale: f64,
    /// Scale applied when EMA order and price position disagree.
    pub mixed_scale: f64,
    /// Ceiling on strength for a mixed reading.
    pub mixed_cap: f64,
}

impl Default for TrendParams {
    fn default() -> Self {
        Self {
            fast_period: 8,
            slow_period: 21,
            aligned_scale: 50.0,
            mixed_scale: 30.0,
            mixed_cap: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtrParams {
    pub period: u32,
}

impl Default for AtrParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsiParams {
    pub period: u32,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdParams {
    pub fast_period: u32,
    pub slow_period: u32,
    pub signal_period: u32,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerParams {
    pub period: u32,
    pub std_dev: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
        }
    }
}

/// Swing-point detection window for support/resistance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwingParams {
    /// Bars on each side a swing point must exceed.
    pub half_width: usize,
    /// Number of most recent candles scanned.
    pub lookback: usize,
    /// Levels kept on each side of price.
    pub depth: usize,
}

impl Default for SwingParams {
    fn default() -> Self {
        Self {
            half_width: 2,
            lookback: 50,
            depth: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusParams {
    /// Candles a timeframe needs before it takes part in the consensus.
    pub min_candles: usize,
    /// Candles kept per timeframe after aggregation.
    pub candle_limit: usize,
    pub long_target_multiplier: f64,
    pub short_target_multiplier: f64,
    pub stop_multiplier: f64,
}

impl Default for ConsensusParams {
    fn default() -> Self {
        Self {
            min_candles: 15,
            candle_limit: 100,
            long_target_multiplier: 2.5,
            short_target_multiplier: 1.5,
            stop_multiplier: 1.0,
        }
    }
}

impl ConsensusParams {
    pub fn target_multiplier(&self, horizon: Horizon) -> f64 {
        match horizon {
            Horizon::Long => self.long_target_multiplier,
            Horizon::Short => self.short_target_multiplier,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub trend: TrendParams,
    pub atr: AtrParams,
    pub rsi: RsiParams,
    pub macd: MacdParams,
    pub bollinger: BollingerParams,
    pub swing: SwingParams,
    pub consensus: ConsensusParams,
}

impl AnalysisConfig {
    /// Load defaults, then apply `.env` and `TRENDCAST_*` overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let mut config = Self::default();
        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        override_value(&lookup, "TRENDCAST_TREND_FAST", &mut self.trend.fast_period)?;
        override_value(&lookup, "TRENDCAST_TREND_SLOW", &mut self.trend.slow_period)?;
        override_value(&lookup, "TRENDCAST_ATR_PERIOD", &mut self.atr.period)?;
        override_value(&lookup, "TRENDCAST_RSI_PERIOD", &mut self.rsi.period)?;
        override_value(&lookup, "TRENDCAST_MACD_FAST", &mut self.macd.fast_period)?;
        override_value(&lookup, "TRENDCAST_MACD_SLOW", &mut self.macd.slow_period)?;
        override_value(&lookup, "TRENDCAST_MACD_SIGNAL", &mut self.macd.signal_period)?;
        override_value(&lookup, "TRENDCAST_BOLLINGER_PERIOD", &mut self.bollinger.period)?;
        override_value(&lookup, "TRENDCAST_BOLLINGER_STD_DEV", &mut self.bollinger.std_dev)?;
        override_value(&lookup, "TRENDCAST_SWING_HALF_WIDTH", &mut self.swing.half_width)?;
        override_value(&lookup, "TRENDCAST_SWING_LOOKBACK", &mut self.swing.lookback)?;
        override_value(&lookup, "TRENDCAST_SR_DEPTH", &mut self.swing.depth)?;
        override_value(&lookup, "TRENDCAST_MIN_CANDLES", &mut self.consensus.min_candles)?;
        override_value(&lookup, "TRENDCAST_CANDLE_LIMIT", &mut self.consensus.candle_limit)?;
        override_value(
            &lookup,
            "TRENDCAST_LONG_TARGET_MULTIPLIER",
            &mut self.consensus.long_target_multiplier,
        )?;
        override_value(
            &lookup,
            "TRENDCAST_SHORT_TARGET_MULTIPLIER",
            &mut self.consensus.short_target_multiplier,
        )?;
        override_value(&lookup, "TRENDCAST_STOP_MULTIPLIER", &mut self.consensus.stop_multiplier)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("trend.fast_period", self.trend.fast_period),
            ("trend.slow_period", self.trend.slow_period),
            ("atr.period", self.atr.period),
            ("rsi.period", self.rsi.period),
            ("macd.fast_period", self.macd.fast_period),
            ("macd.slow_period", self.macd.slow_period),
            ("macd.signal_period", self.macd.signal_period),
            ("bollinger.period", self.bollinger.period),
        ];
        for (name, value) in periods {
            if value == 0 {
                return Err(ConfigError::Validation(format!("{} must be > 0", name)));
            }
        }

        if self.trend.fast_period >= self.trend.slow_period {
            return Err(ConfigError::Validation(
                "trend.fast_period must be smaller than trend.slow_period".to_string(),
            ));
        }
        if self.macd.fast_period >= self.macd.slow_period {
            return Err(ConfigError::Validation(
                "macd.fast_period must be smaller than macd.slow_period".to_string(),
            ));
        }
        if self.swing.half_width == 0 || self.swing.depth == 0 {
            return Err(ConfigError::Validation(
                "swing.half_width and swing.depth must be > 0".to_string(),
            ));
        }
        if self.swing.lookback < self.swing.half_width.saturating_mul(2).saturating_add(1) {
            return Err(ConfigError::Validation(
                "swing.lookback must cover at least one full swing window".to_string(),
            ));
        }
        let atr_history = self.atr.period as usize + 1;
        if self.consensus.min_candles < atr_history {
            return Err(ConfigError::Validation(format!(
                "consensus.min_candles must be at least atr.period + 1 ({})",
                atr_history
            )));
        }
        if self.consensus.candle_limit < self.consensus.min_candles {
            return Err(ConfigError::Validation(
                "consensus.candle_limit must not be below consensus.min_candles".to_string(),
            ));
        }

        let multipliers = [
            ("long_target", self.consensus.long_target_multiplier),
            ("short_target", self.consensus.short_target_multiplier),
            ("stop", self.consensus.stop_multiplier),
            ("bollinger.std_dev", self.bollinger.std_dev),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{} multiplier must be a positive number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

fn override_value<T, F>(lookup: &F, key: &str, target: &mut T) -> Result<(), ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(key) {
        *target = raw.trim().parse().map_err(|_| ConfigError::Parse {
            key: key.to_string(),
            value: raw.clone(),
        })?;
    }
    Ok(())
}

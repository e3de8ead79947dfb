use serde::{Deserialize, Serialize};

/// One value of a derived series, aligned to a source candle time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub time: i64,
    pub value: f64,
}

impl IndicatorPoint {
    pub fn new(time: i64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Presentation category of a histogram or volume bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarBias {
    Up,
    Down,
}

impl BarBias {
    pub fn from_sign(value: f64) -> Self {
        if value >= 0.0 {
            BarBias::Up
        } else {
            BarBias::Down
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramPoint {
    pub time: i64,
    pub value: f64,
    pub bias: BarBias,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacdSeries {
    pub macd_line: Vec<IndicatorPoint>,
    pub signal_line: Vec<IndicatorPoint>,
    pub histogram: Vec<HistogramPoint>,
}

impl MacdSeries {
    pub fn is_empty(&self) -> bool {
        self.macd_line.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: Vec<IndicatorPoint>,
    pub middle: Vec<IndicatorPoint>,
    pub lower: Vec<IndicatorPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumePoint {
    pub time: i64,
    pub value: f64,
    pub bias: BarBias,
}

/// High-low span of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarRange {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub range: f64,
    /// `range / low * 100`, `None` when the low is not positive.
    pub range_percent: Option<f64>,
}

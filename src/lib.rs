//! Multi-timeframe trend and trade-level engine.
//!
//! Candles flow upward through the crate: raw candles are regrouped by
//! [`aggregation`], turned into derived series by [`indicators`], summarised per
//! timeframe and combined into a weighted consensus by [`signals`].

pub mod aggregation;
pub mod common;
pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{AnalysisError, Result};

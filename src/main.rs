//! trendcast demo
//!
//! Usage: `trendcast <SYMBOL> <CANDLES.json>`
//!
//! The JSON file maps source timeframe labels (`"5m"`, `"1h"`, `"1d"`, ...) to
//! candle arrays. The default short- and long-term groups are analysed and the
//! report is printed to stdout. `demos/candles.json` is a ready-made input.

use dotenvy::dotenv;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::sync::Arc;
use tracing::{error, info};
use trendcast::aggregation::Timeframe;
use trendcast::config::AnalysisConfig;
use trendcast::logging;
use trendcast::models::Candle;
use trendcast::services::InMemoryMarketDataProvider;
use trendcast::signals::PredictionEngine;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let mut args = env::args().skip(1);
    let (Some(symbol), Some(path)) = (args.next(), args.next()) else {
        return Err("usage: trendcast <SYMBOL> <CANDLES.json>".into());
    };

    let config = AnalysisConfig::from_env()?;
    info!(environment = %trendcast::config::get_environment(), symbol = %symbol, "starting analysis");

    let raw = fs::read_to_string(&path)?;
    let series: HashMap<String, Vec<Candle>> = serde_json::from_str(&raw)?;

    let mut provider = InMemoryMarketDataProvider::new();
    for (label, candles) in series {
        let timeframe: Timeframe = label.parse()?;
        info!(timeframe = %timeframe, count = candles.len(), "loaded candles");
        provider.insert(&symbol, timeframe, candles);
    }

    let engine = PredictionEngine::new(Arc::new(provider), config);
    match engine.analyze_default(&symbol).await {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, symbol = %symbol, "prediction failed");
            Err(e.into())
        }
    }
}

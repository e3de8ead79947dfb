//! Collaborator seams: where candles come from.

pub mod market_data;

pub use market_data::*;

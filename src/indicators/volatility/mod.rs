//! Volatility indicators: Bollinger Bands, ATR, bar ranges

pub mod atr;
pub mod bollinger;
pub mod range;

pub use atr::*;
pub use bollinger::*;
pub use range::*;

//! Stateless indicator transforms over candle slices.
//!
//! Every function takes candles by reference and returns a new series; leading
//! bars without enough history are omitted rather than zero-filled.

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use momentum::*;
pub use structure::*;
pub use trend::*;
pub use volatility::*;
pub use volume::*;
